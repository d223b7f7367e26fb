//! Integration tests for the `tprobe` CLI binary.
//!
//! assert_cmd captures stdout and stderr through pipes and gives the child a
//! null stdin, so none of the standard streams is a terminal here.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_no_args_shows_summary() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Width:  unknown"))
        .stdout(predicate::str::contains("stderr: not a tty"));
}

#[test]
fn test_json_report_has_null_width() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    let output = cmd.arg("--json").assert().success().get_output().stdout.clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(report["width"].is_null());
    assert_eq!(report["stdin_tty"], false);
    assert_eq!(report["stdout_tty"], false);
    assert_eq!(report["stderr_tty"], false);
}

#[test]
fn test_width_with_piped_stderr_is_zero() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.arg("width")
        .assert()
        .success()
        .stdout(predicate::eq("0\n"));
}

#[test]
fn test_width_is_stable_across_runs() {
    let run = || {
        Command::cargo_bin("tprobe")
            .unwrap()
            .arg("width")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_width_fallback_applies_when_unknown() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.args(["width", "--fallback", "100"])
        .assert()
        .success()
        .stdout(predicate::eq("100\n"));
}

#[test]
fn test_width_json() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.args(["width", "--json", "--fallback", "72"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"width\": null"))
        .stdout(predicate::str::contains("\"fallback\": 72"));
}

#[test]
fn test_width_verbose_explains_on_stderr() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.args(["width", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("width unknown"));
}

#[test]
fn test_tty_on_piped_stderr_is_false_and_fails() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.args(["tty", "2"])
        .assert()
        .code(1)
        .stdout(predicate::eq("false\n"));
}

#[test]
fn test_tty_on_null_stdin_is_false() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.args(["tty", "0"]).assert().code(1).stdout("false\n");
}

#[test]
fn test_tty_negative_descriptor_is_false() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.args(["tty", "-1"]).assert().code(1).stdout("false\n");
}

#[test]
fn test_tty_unopened_descriptor_is_false() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.args(["tty", "4096"]).assert().code(1).stdout("false\n");
}

#[test]
fn test_tty_json() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.args(["--json", "tty", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"fd\": 1"))
        .stdout(predicate::str::contains("\"is_tty\": false"));
}

#[test]
fn test_tty_rejects_non_numeric_fd() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.args(["tty", "stdout"]).assert().failure().code(2);
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tprobe"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report terminal width and TTY status"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("tprobe").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tprobe"));
}
