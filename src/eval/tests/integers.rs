//! Integer literal and arithmetic tests.

use super::*;

#[test]
fn test_integer_literals() {
    assert_int("5", 5);
    assert_int("10;", 10);
    assert_int("-5", -5);
    assert_int("-10", -10);
}

#[test]
fn test_integer_arithmetic() {
    assert_int("5 + 5 + 5 + 5 - 10", 10);
    assert_int("2 * 2 * 2 * 2 * 2", 32);
    assert_int("-50 + 100 + -50;", 0);
    assert_int("5 * 2 + 10", 20);
    assert_int("5 + 2 * 10", 25);
    assert_int("20 + 2 * -10", 0);
    assert_int("50 / 2 * 2 + 10", 60);
    assert_int("2 * (5 + 10)", 30);
    assert_int("3 * 3 * 3 + 10", 37);
    assert_int("3 * (3 * 3) + 10", 37);
    assert_int("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50);
}

#[test]
fn test_precedence_over_sum() {
    assert_int("5 + 5 * 2;", 15);
}

#[test]
fn test_integer_division_truncates() {
    assert_int("7 / 2", 3);
    assert_int("-7 / 2", -3);
}

#[test]
fn test_division_by_zero_is_an_error() {
    assert_eq!(run_err("5 / 0"), "division by zero");
    assert_eq!(run_err("let x = 0; 10 / x;"), "division by zero");
}

#[test]
fn test_arithmetic_wraps_instead_of_panicking() {
    assert_int("9223372036854775807 + 1", i64::MIN);
    assert_int("-9223372036854775807 - 2", i64::MAX);
}

#[test]
fn test_double_negation() {
    assert_int("--5", 5);
}
