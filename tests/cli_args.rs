//! Tests for CLI argument parsing.
//!
//! These run the built binary. Every case here fails before the terminal is
//! switched to raw mode, so no TTY is needed.

use std::process::Command;

fn order_search_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_order-search"))
}

#[test]
fn help_lists_overrides() {
    let output = order_search_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--debounce-ms"));
    assert!(stdout.contains("--policy"));
    assert!(stdout.contains("--fail"));
}

#[test]
fn missing_config_file_exits_with_error() {
    let output = order_search_cmd()
        .arg("--config")
        .arg("/nonexistent/order-search/config.toml")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Failed to read config file"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn out_of_range_debounce_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let output = order_search_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--debounce-ms")
        .arg("999999")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}

#[test]
fn unknown_policy_is_rejected_by_clap() {
    let output = order_search_cmd()
        .arg("--policy")
        .arg("first-wins")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "unexpected stderr: {}", stderr);
}
