//! Unit tests for the evaluator.
//!
//! Tests are organized by language area:
//! - [`integers`]: Integer literals and arithmetic
//! - [`booleans`]: Boolean literals, comparisons, and `!`
//! - [`conditionals`]: `if`/`else` and truthiness
//! - [`returns`]: Return propagation through nested blocks
//! - [`bindings`]: `let` statements and identifier resolution
//! - [`functions`]: Function values, calls, closures, and recursion
//! - [`strings`]: String literals, concatenation, and equality
//! - [`arrays`]: Array literals and index expressions
//! - [`hashes`]: Hash literals and key lookup
//! - [`builtins`]: The built-in function table
//! - [`errors`]: Runtime error messages and short-circuiting

use super::*;
use crate::lexer::Lexer;
use crate::object::{Environment, Object};
use crate::parser::Parser;

mod integers;
mod returns;

/// Parses and evaluates input in a fresh environment.
pub(super) fn run(input: &str) -> Result<Object, RuntimeError> {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "parse errors for input {:?}: {:?}",
        input,
        parser.errors()
    );
    eval_program(&program, &Environment::new_shared())
}

/// Evaluates input that is expected to succeed.
pub(super) fn run_ok(input: &str) -> Object {
    run(input).unwrap_or_else(|e| panic!("evaluation of {:?} failed: {}", input, e))
}

/// Evaluates input that is expected to fail and returns the error message.
pub(super) fn run_err(input: &str) -> String {
    match run(input) {
        Ok(value) => panic!(
            "expected evaluation of {:?} to fail, got {:?}",
            input, value
        ),
        Err(err) => err.message().to_string(),
    }
}

/// Asserts that the input evaluates to the given integer.
pub(super) fn assert_int(input: &str, expected: i64) {
    assert_eq!(run_ok(input), Object::Integer(expected), "input: {:?}", input);
}

/// Asserts that the input evaluates to the given boolean.
pub(super) fn assert_bool(input: &str, expected: bool) {
    assert_eq!(run_ok(input), Object::Boolean(expected), "input: {:?}", input);
}

/// Asserts that the input evaluates to null.
pub(super) fn assert_null(input: &str) {
    assert_eq!(run_ok(input), Object::Null, "input: {:?}", input);
}
