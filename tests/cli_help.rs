use std::process::Command;

#[test]
fn test_help_lists_commands() {
    let bin = env!("CARGO_BIN_EXE_canonsort");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["analyze", "provenance", "recommend"] {
        assert!(
            stdout.contains(command),
            "help output should list '{}'; got:\n{}",
            command,
            stdout
        );
    }
}

#[test]
fn test_unknown_command_fails() {
    let bin = env!("CARGO_BIN_EXE_canonsort");

    let output = Command::new(bin).arg("reorganize").output().unwrap();

    assert!(!output.status.success());
}
