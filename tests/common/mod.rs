//! Common test utilities for Monkey integration tests.
//!
//! This module provides shared helper functions used across all
//! integration test files. Scripts are written to a temporary directory
//! and executed through the compiled `monkey` binary.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

/// Returns the path to the monkey binary built by cargo.
pub fn monkey_binary() -> String {
    env!("CARGO_BIN_EXE_monkey").to_string()
}

/// Writes `source` to a temporary script file and runs `monkey run` on it.
pub fn run_script(source: &str) -> Output {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("script.monkey");
    fs::write(&path, source)
        .unwrap_or_else(|e| panic!("Failed to write script {}: {}", path.display(), e));

    Command::new(monkey_binary())
        .arg("run")
        .arg(&path)
        .output()
        .expect("Failed to execute monkey binary")
}

/// Runs a script expected to succeed and returns its stdout.
pub fn run_ok(source: &str) -> String {
    let output = run_script(source);
    assert!(
        output.status.success(),
        "script failed.\nsource:\n{}\nstderr:\n{}",
        source,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Runs a script expected to succeed and asserts its final printed value.
pub fn assert_result(source: &str, expected: &str) {
    let stdout = run_ok(source);
    assert_eq!(
        stdout.trim_end(),
        expected,
        "unexpected result.\nsource:\n{}",
        source
    );
}

/// Runs a script expected to fail and returns its stderr.
pub fn run_fail(source: &str) -> String {
    let output = run_script(source);
    assert!(
        !output.status.success(),
        "script unexpectedly succeeded.\nsource:\n{}\nstdout:\n{}",
        source,
        String::from_utf8_lossy(&output.stdout)
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}
