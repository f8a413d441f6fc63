use std::process::Command;

#[test]
fn test_help_lists_all_lifecycle_commands() {
    let bin = env!("CARGO_BIN_EXE_streamctl");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in [
        "list",
        "create",
        "deploy",
        "undeploy",
        "undeploy-all",
        "destroy",
        "destroy-all",
    ] {
        assert!(
            stdout.contains(command),
            "help output should list the '{}' command; got:\n{}",
            command,
            stdout
        );
    }
}

#[test]
fn test_help_mentions_the_stream_dsl() {
    let bin = env!("CARGO_BIN_EXE_streamctl");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("http --port=9000 | hdfs"),
        "help output should show a DSL example; got:\n{}",
        stdout
    );
}
