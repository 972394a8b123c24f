//! Return statement and propagation tests.

use super::*;

#[test]
fn test_top_level_return() {
    assert_int("return 10;", 10);
    assert_int("return 10; 9;", 10);
    assert_int("return 2 * 5; 9;", 10);
    assert_int("9; return 2 * 5; 9;", 10);
}

#[test]
fn test_return_stops_remaining_statements() {
    // The binding after the return must never run.
    assert_int("return 1; let x = 5 / 0; x;", 1);
}

#[test]
fn test_return_propagates_through_nested_blocks() {
    let input = "
if (10 > 1) {
  if (10 > 1) {
    return 10;
  }
  return 1;
}";
    assert_int(input, 10);
}

#[test]
fn test_return_inside_function_stops_at_function() {
    let input = "
let f = fn() {
  if (true) {
    return 1;
  }
  return 2;
};
f() + 10;";
    assert_int(input, 11);
}

#[test]
fn test_function_without_return_yields_last_value() {
    assert_int("let f = fn() { 1; 2; 3 }; f();", 3);
}
