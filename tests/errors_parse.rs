//! End-to-end tests for the parse-error surface of `monkey run`.

mod common;

use common::{run_fail, run_script};

#[test]
fn test_parse_error_exits_nonzero() {
    let output = run_script("let x 5;");
    assert!(!output.status.success());
}

#[test]
fn test_parse_error_report_names_the_problem() {
    let stderr = run_fail("let x 5;");
    assert!(
        stderr.contains("expected '='"),
        "stderr did not name the missing '=':\n{}",
        stderr
    );
}

#[test]
fn test_parse_error_skips_evaluation() {
    // The puts must never run when parsing failed.
    let output = run_script("puts(\"ran\"); let = ;");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("ran"),
        "evaluation ran despite parse errors:\n{}",
        stdout
    );
}

#[test]
fn test_illegal_character_is_reported() {
    let stderr = run_fail("1 @ 2;");
    assert!(
        stderr.contains("illegal character '@'"),
        "stderr did not mention the illegal character:\n{}",
        stderr
    );
}

#[test]
fn test_missing_file_is_reported() {
    let output = std::process::Command::new(common::monkey_binary())
        .arg("run")
        .arg("does-not-exist.monkey")
        .output()
        .expect("Failed to execute monkey binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("could not read"),
        "stderr did not report the unreadable file:\n{}",
        stderr
    );
}
