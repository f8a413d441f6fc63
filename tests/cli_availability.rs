//! Availability gating and pre-remote validation through the binary.

use std::process::Command;

fn scrubbed(bin: &str, home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(bin);
    cmd.env_remove("STREAMCTL_SERVER")
        .env_remove("STREAMCTL_TIMEOUT_SECS")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path());
    cmd
}

#[test]
fn test_commands_unavailable_without_a_server() {
    let bin = env!("CARGO_BIN_EXE_streamctl");
    let home = tempfile::tempdir().unwrap();

    let output = scrubbed(bin, &home).arg("list").output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("stream commands unavailable"),
        "expected the unavailable signal; got:\n{}",
        stderr
    );
    assert!(
        stderr.contains("--server"),
        "expected a remediation hint; got:\n{}",
        stderr
    );
}

#[test]
fn test_conflicting_property_sources_fail_before_any_remote_call() {
    let bin = env!("CARGO_BIN_EXE_streamctl");
    let home = tempfile::tempdir().unwrap();

    // port 1 never serves; resolution must fail before a connection attempt
    let output = scrubbed(bin, &home)
        .args([
            "--server",
            "http://127.0.0.1:1",
            "deploy",
            "ticktock",
            "--properties",
            "a=1",
            "--properties-file",
            "deploy.properties",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cannot both be specified"),
        "expected the conflicting-options error; got:\n{}",
        stderr
    );
    assert!(
        stderr.contains("properties") && stderr.contains("properties-file"),
        "error should name both option identifiers; got:\n{}",
        stderr
    );
}

#[test]
fn test_malformed_inline_properties_fail_before_any_remote_call() {
    let bin = env!("CARGO_BIN_EXE_streamctl");
    let home = tempfile::tempdir().unwrap();

    let output = scrubbed(bin, &home)
        .args([
            "--server",
            "http://127.0.0.1:1",
            "deploy",
            "ticktock",
            "--properties",
            "bad",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("malformed deployment property"),
        "expected the malformed-property error; got:\n{}",
        stderr
    );
}
