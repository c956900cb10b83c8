use assert_cmd::Command;

#[test]
fn test_exit_code_0_on_success() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_recho"));
    cmd.arg("plain text").assert().code(0);
}

#[test]
fn test_exit_code_0_on_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_recho"));
    cmd.arg("-h").assert().code(0);
}

#[test]
fn test_exit_code_2_on_missing_text() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_recho"));
    cmd.assert().code(2);
}

#[test]
fn test_exit_code_2_on_unknown_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_recho"));
    cmd.arg("--bogus").arg("text").assert().code(2);
}

#[test]
fn test_exit_code_2_on_surplus_positional() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_recho"));
    cmd.arg("one").arg("two").assert().code(2);
}
