//! Property tests for deployment-property parsing and serialization.

use std::collections::BTreeMap;

use proptest::prelude::*;

use streamctl::properties::{parse_inline, parse_properties, serialize};

fn plain_key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap()
}

fn plain_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the .properties parser never panics on arbitrary input.
    #[test]
    fn property_parse_properties_never_panics(
        text in "(?s).{0,512}"
    ) {
        let _ = parse_properties(&text);
    }

    /// PROPERTY: the inline parser never panics on arbitrary input.
    #[test]
    fn property_parse_inline_never_panics(
        raw in "(?s).{0,256}"
    ) {
        let _ = parse_inline(&raw);
    }

    /// PROPERTY: serializing any property map and parsing it back yields an
    /// equivalent (key, value) set.
    #[test]
    fn property_serialize_parse_round_trip(
        entries in proptest::collection::btree_map(".{0,16}", ".{0,16}", 0..8)
    ) {
        let map: BTreeMap<String, String> = entries;
        let text = serialize(&map);
        let reparsed = parse_properties(&text)
            .expect("serialized properties must reparse");
        prop_assert_eq!(reparsed, map);
    }

    /// PROPERTY: well-formed inline strings resolve to the expected map with
    /// last-write-wins on duplicate keys.
    #[test]
    fn property_parse_inline_well_formed(
        pairs in proptest::collection::vec((plain_key(), plain_value()), 1..8)
    ) {
        let raw = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(",");

        let mut expected = BTreeMap::new();
        for (k, v) in &pairs {
            expected.insert(k.clone(), v.clone());
        }

        prop_assert_eq!(parse_inline(&raw).unwrap(), expected);
    }
}
