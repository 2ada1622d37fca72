//! End-to-end tests for the `textcall` binary

use std::io::Write;
use std::process::{Command, Stdio};

const REPLY: &str = r#"
I'll do both operations.

TOOL_CALL_START
{
  "function": "core_memory_append",
  "params": {"name": "facts", "content": "likes pizza"}
}
TOOL_CALL_END

TOOL_CALL_START
{
  "function": "archival_memory_insert",
  "params": {"content": "User likes pizza"}
}
TOOL_CALL_END

All done!
"#;

fn textcall() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_textcall"));
    cmd.env_remove("RUST_LOG").env_remove("TEXTCALL_CONFIG");
    cmd
}

fn run_with_stdin(cmd: &mut Command, input: &str) -> std::process::Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_json_from_stdin() {
    let output = run_with_stdin(&mut textcall(), REPLY);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let calls = value.as_array().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0]["name"], "core_memory_append");
    assert_eq!(calls[1]["name"], "archival_memory_insert");
    assert_eq!(calls[1]["confidence"], 1.0);
    assert_eq!(calls[1]["strategy"], "marker");
}

#[test]
fn test_quiet_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", REPLY).unwrap();

    let output = textcall()
        .args(["--format", "quiet"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "core_memory_append\narchival_memory_insert"
    );
}

#[test]
fn test_no_calls_is_success() {
    let output = run_with_stdin(&mut textcall(), "I could help with that later.");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn test_custom_config() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "start_marker = \"<call>\"\nend_marker = \"</call>\"").unwrap();

    let output = run_with_stdin(
        textcall().arg("--config").arg(config.path()),
        "<call>\n{\"function\": \"ping\", \"params\": {}}\n</call>\n",
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["name"], "ping");
}

#[test]
fn test_missing_input_file_fails() {
    let output = textcall()
        .args(["--no-color", "/nonexistent/reply.txt"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read input"));
}
