//! CLI integration tests

use std::path::Path;
use std::process::Command;

fn call_record_bin(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_call-record"));
    cmd.env_remove("CALL_RECORD_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .arg("--config")
        .arg(config);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn help_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_call-record"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("watch"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("enable"));
    assert!(stdout.contains("disable"));
    assert!(stdout.contains("--config"));
}

#[test]
fn version_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_call-record"))
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("call-record"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_command_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_call-record"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn unknown_command_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_call-record"))
        .arg("record-everything")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("record-everything"));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    let stdout = stdout_of(call_record_bin(&path).args(["config", "path"]));
    assert_eq!(stdout.trim(), path.to_string_lossy());
}

#[test]
fn config_path_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("env.toml");

    let output = Command::new(env!("CARGO_BIN_EXE_call-record"))
        .env("CALL_RECORD_CONFIG", &path)
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("env.toml"));
}

#[test]
fn config_init_then_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    stdout_of(call_record_bin(&path).args(["config", "init"]));
    assert!(path.exists());

    let stdout = stdout_of(call_record_bin(&path).args(["config", "list"]));
    assert!(stdout.contains("file_name: Record"));
    assert!(stdout.contains("dir_name: CallRecord"));
    assert!(stdout.contains("save_file: true"));
    assert!(stdout.contains("output_format: 3 (amr-nb)"));
}

#[test]
fn config_init_twice_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    stdout_of(call_record_bin(&path).args(["config", "init"]));
    let output = call_record_bin(&path)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

#[test]
fn config_set_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    stdout_of(call_record_bin(&path).args(["config", "set", "file_name", "Meeting"]));
    let stdout = stdout_of(call_record_bin(&path).args(["config", "get", "file_name"]));
    assert_eq!(stdout.trim(), "Meeting");

    let stdout = stdout_of(call_record_bin(&path).args(["config", "get", "dir_name"]));
    assert_eq!(stdout.trim(), "(not set)");
}

#[test]
fn config_set_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    stdout_of(call_record_bin(&path).args(["config", "set", "output_format", "2"]));
    let stdout = stdout_of(call_record_bin(&path).args(["config", "get", "output_format"]));
    assert_eq!(stdout.trim(), "2 (mpeg4)");
}

#[test]
fn enable_and_disable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    stdout_of(call_record_bin(&path).arg("disable"));
    let stdout = stdout_of(call_record_bin(&path).args(["config", "get", "save_file"]));
    assert_eq!(stdout.trim(), "false");

    stdout_of(call_record_bin(&path).arg("enable"));
    let stdout = stdout_of(call_record_bin(&path).args(["config", "get", "save_file"]));
    assert_eq!(stdout.trim(), "true");
}

#[test]
fn config_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_call-record"))
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}
