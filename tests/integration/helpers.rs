//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Write `content` as a config file inside a fresh temp dir.
///
/// The dir must outlive the path.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Run playctl against an isolated config and capture output.
pub fn run_playctl_with_config(config: &str, args: &[&str]) -> (String, String, i32) {
    let (_dir, path) = temp_config(config);
    let output = Command::new(env!("CARGO_BIN_EXE_playctl"))
        .arg("--config")
        .arg(&path)
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute playctl");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Run playctl with an empty config.
pub fn run_playctl(args: &[&str]) -> (String, String, i32) {
    run_playctl_with_config("", args)
}
