//! Deployment property resolution
//!
//! A deploy command may carry its properties inline (`--properties a=1,b=2`)
//! or in a Java-style `.properties` file (`--properties-file deploy.properties`),
//! but never both. This module selects the source, parses it, and produces the
//! normalized property map handed to the server.
//!
//! Inline values support no escaping: commas and the first equals sign are
//! hard delimiters. The file parser implements the conventional properties
//! grammar (`#`/`!` comments, `\` line continuation, `\uXXXX` and
//! single-character escapes, `=`/`:`/whitespace key terminators) so existing
//! deployment-property files load unchanged.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ShellError, ShellResult};

/// Option identifier for the inline property source
pub const PROPERTIES_OPTION: &str = "properties";

/// Option identifier for the file property source
pub const PROPERTIES_FILE_OPTION: &str = "properties-file";

/// Normalized deployment property map
pub type DeploymentProperties = BTreeMap<String, String>;

/// Which deployment-property source applies to this invocation.
///
/// At most one of the two options may be specified; both at once is a
/// `ConflictingOptions` error naming both option identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertySource<'a> {
    /// Neither option given; deployment uses an empty property map
    Neither,
    /// Inline `key=value[,key=value...]` string
    Inline(&'a str),
    /// Path to a `.properties` file
    FromFile(&'a Path),
}

impl<'a> PropertySource<'a> {
    /// Validate the two optional inputs down to a single source.
    pub fn select(inline: Option<&'a str>, file: Option<&'a Path>) -> ShellResult<Self> {
        match (inline, file) {
            (Some(_), Some(_)) => Err(ShellError::ConflictingOptions {
                first: PROPERTIES_OPTION,
                second: PROPERTIES_FILE_OPTION,
            }),
            (Some(raw), None) => Ok(PropertySource::Inline(raw)),
            (None, Some(path)) => Ok(PropertySource::FromFile(path)),
            (None, None) => Ok(PropertySource::Neither),
        }
    }
}

/// Resolve the deployment properties for one invocation.
///
/// Validation happens entirely before any remote call: a conflict, parse
/// error, or unreadable file aborts the command with nothing applied.
pub fn resolve(inline: Option<&str>, file: Option<&Path>) -> ShellResult<DeploymentProperties> {
    match PropertySource::select(inline, file)? {
        PropertySource::Neither => Ok(DeploymentProperties::new()),
        PropertySource::Inline(raw) => parse_inline(raw),
        PropertySource::FromFile(path) => load_file(path),
    }
}

/// Parse an inline `key=value[,key=value...]` string.
///
/// Tokens are trimmed; blank tokens (e.g. from a trailing comma) are
/// skipped; the last occurrence of a duplicate key wins.
pub fn parse_inline(raw: &str) -> ShellResult<DeploymentProperties> {
    let mut properties = DeploymentProperties::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| ShellError::MalformedProperty {
                token: token.to_string(),
            })?;
        properties.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(properties)
}

/// Load deployment properties from a `.properties` file.
///
/// The file handle lives only for the duration of the read; missing or
/// unreadable files and syntax errors all surface as `PropertiesFile`
/// wrapping the underlying cause.
pub fn load_file(path: &Path) -> ShellResult<DeploymentProperties> {
    let text = fs::read_to_string(path).map_err(|source| ShellError::PropertiesFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_properties(&text).map_err(|err| ShellError::PropertiesFile {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, err),
    })
}

/// Syntax error in `.properties` text, with the physical line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesSyntaxError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for PropertiesSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for PropertiesSyntaxError {}

/// Parse `.properties` text into a property map.
pub fn parse_properties(text: &str) -> Result<DeploymentProperties, PropertiesSyntaxError> {
    let mut properties = DeploymentProperties::new();
    for (line_number, logical) in logical_lines(text) {
        let (raw_key, raw_value) = split_key_value(&logical);
        let key = unescape(&raw_key, line_number)?;
        let value = unescape(&raw_value, line_number)?;
        properties.insert(key, value);
    }
    Ok(properties)
}

/// Serialize a property map back to `.properties` text.
///
/// Separators, comment markers, whitespace, and control characters are
/// escaped so that `parse_properties(serialize(m)) == m` for any map.
pub fn serialize(properties: &DeploymentProperties) -> String {
    let mut out = String::new();
    for (key, value) in properties {
        escape_key(key, &mut out);
        out.push('=');
        escape_value(value, &mut out);
        out.push('\n');
    }
    out
}

/// Assemble logical lines: skip blanks and comments, join `\`-continuations.
///
/// Comments are decided per natural line before continuation applies, and a
/// continuation line keeps its content even if it starts with `#` or `!`.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut lines = text.lines().enumerate();
    while let Some((index, line)) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }
        let mut logical = trimmed.to_string();
        while ends_with_odd_backslashes(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }
        out.push((index + 1, logical));
    }
    out
}

fn ends_with_odd_backslashes(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped `=`, `:`, space, or tab.
///
/// Returns the still-escaped key and value halves. A bare key yields an
/// empty value.
fn split_key_value(line: &str) -> (String, String) {
    let chars: Vec<char> = line.chars().collect();
    let mut key = String::new();
    let mut i = 0;
    let mut separator_seen = false;
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            key.push(c);
            if i + 1 < chars.len() {
                key.push(chars[i + 1]);
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }
        if c == '=' || c == ':' {
            separator_seen = true;
            i += 1;
            break;
        }
        if c == ' ' || c == '\t' {
            i += 1;
            break;
        }
        key.push(c);
        i += 1;
    }
    while i < chars.len() && (chars[i] == ' ' || chars[i] == '\t') {
        i += 1;
    }
    if !separator_seen && i < chars.len() && (chars[i] == '=' || chars[i] == ':') {
        i += 1;
        while i < chars.len() && (chars[i] == ' ' || chars[i] == '\t') {
            i += 1;
        }
    }
    (key, chars[i..].iter().collect())
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesSyntaxError> {
    let mut out = String::new();
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            // lone trailing backslash is dropped
            None => break,
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let mut code: u32 = 0;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|h| h.to_digit(16))
                        .ok_or_else(|| PropertiesSyntaxError {
                            line,
                            message: "invalid \\u escape - expected 4 hex digits".to_string(),
                        })?;
                    code = code * 16 + digit;
                }
                out.push(char::from_u32(code).ok_or_else(|| PropertiesSyntaxError {
                    line,
                    message: format!("invalid \\u escape - U+{code:04X} is not a character"),
                })?);
            }
            // backslash before any other character is dropped
            Some(other) => out.push(other),
        }
    }
    Ok(out)
}

fn escape_key(key: &str, out: &mut String) {
    for c in key.chars() {
        match c {
            '\\' | '=' | ':' | ' ' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            _ => escape_common(c, out),
        }
    }
}

fn escape_value(value: &str, out: &mut String) {
    let mut leading = true;
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ' ' if leading => out.push_str("\\ "),
            _ => escape_common(c, out),
        }
        if c != ' ' {
            leading = false;
        }
    }
}

fn escape_common(c: char, out: &mut String) {
    match c {
        '\n' => out.push_str("\\n"),
        '\t' => out.push_str("\\t"),
        '\r' => out.push_str("\\r"),
        '\x0c' => out.push_str("\\f"),
        c if (c as u32) < 0x20 => {
            out.push_str(&format!("\\u{:04X}", c as u32));
        }
        c => out.push(c),
    }
}
