//! End-to-end tests for the runtime-error surface of `monkey run`.

mod common;

use common::{run_fail, run_script};

fn assert_error(source: &str, expected: &str) {
    let stderr = run_fail(source);
    assert_eq!(
        stderr.trim_end(),
        expected,
        "unexpected stderr for source:\n{}",
        source
    );
}

#[test]
fn test_type_mismatch() {
    assert_error("5 + true;", "ERROR: type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn test_identifier_not_found() {
    assert_error("foobar;", "ERROR: identifier not found: foobar");
}

#[test]
fn test_unknown_string_operator() {
    assert_error(
        "\"Hello\" - \"World\";",
        "ERROR: unknown operator: STRING - STRING",
    );
}

#[test]
fn test_division_by_zero() {
    assert_error("10 / 0;", "ERROR: division by zero");
}

#[test]
fn test_output_before_the_error_still_prints() {
    let output = run_script("puts(\"before\"); missing;");
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "before\n");
}
