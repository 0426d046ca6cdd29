//! Binary-level tests for slowsum

use std::time::{Duration, Instant};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn slowsum() -> Command {
    Command::cargo_bin("slowsum").expect("slowsum binary should build")
}

#[test]
fn test_default_run_prints_two_lines_and_honors_throttle() {
    // Config files in the working directory or config home do not apply
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("slowsum.yml"), "inputs: [1, 2, 3]\ndelay_ms: 0\n").unwrap();
    let config_home = temp.path().join("config");
    std::fs::create_dir_all(config_home.join("slowsum")).unwrap();
    std::fs::write(config_home.join("slowsum").join("config.yml"), "inputs: [1, 2, 3]\n").unwrap();

    let start = Instant::now();

    slowsum()
        .current_dir(temp.path())
        .env("XDG_CONFIG_HOME", &config_home)
        .assert()
        .success()
        .stdout("11\n529\n");

    // 200ms after each of 4 + 32 steps
    assert!(start.elapsed() >= Duration::from_millis(200 * (4 + 32)));
}

#[test]
fn test_config_overrides_inputs_and_delay() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("slowsum.yml");
    std::fs::write(&path, "inputs: [0, 1, 10]\ndelay_ms: 0\n").unwrap();

    slowsum()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout("1\n2\n56\n");
}

#[test]
fn test_bad_config_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("slowsum.yml");
    std::fs::write(&path, "delay_ms: soon\n").unwrap();

    slowsum()
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_rejects_arguments() {
    slowsum().arg("4").assert().failure();
}
