//! Smoke tests to verify command wiring

use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--db-host"))
        .stdout(predicate::str::contains("DB_NAME"))
        .stdout(predicate::str::contains("APP_PORT"));
}

#[test]
fn test_serve_help_hides_password_value() {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.env("DB_PASSWORD", "hunter2").arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_serve_fails_without_database() {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    // Nothing listens on port 1
    cmd.timeout(Duration::from_secs(10))
        .arg("serve")
        .arg("--db-host")
        .arg("127.0.0.1")
        .arg("--db-port")
        .arg("1")
        .arg("--port")
        .arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"))
        .stderr(predicate::str::contains("error communicating with database"))
        .stderr(predicate::str::contains("pool timed out").not());
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rollcall"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.arg("enroll");

    cmd.assert().failure();
}
