//! Behavior of the built-in functions.
//!
//! The [`Builtin`] enum itself lives with the other runtime values in
//! [`crate::object`]; this module implements what each built-in does when
//! called. Every built-in validates its own argument count and types and
//! reports violations as runtime errors.

use super::error::RuntimeError;
use crate::object::{Builtin, Object};

impl Builtin {
    /// Invokes the built-in with already-evaluated arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`RuntimeError`] when the argument count is wrong or an
    /// argument has a type the built-in does not support.
    pub fn apply(&self, args: Vec<Object>) -> Result<Object, RuntimeError> {
        match self {
            Builtin::Len => apply_len(args),
            Builtin::First => apply_first(args),
            Builtin::Last => apply_last(args),
            Builtin::Rest => apply_rest(args),
            Builtin::Push => apply_push(args),
            Builtin::Puts => apply_puts(args),
        }
    }
}

/// Checks the exact argument count shared by the single-argument built-ins.
fn expect_args(args: &[Object], want: usize) -> Result<(), RuntimeError> {
    if args.len() != want {
        return Err(RuntimeError::builtin_wrong_arguments(args.len(), want));
    }
    Ok(())
}

/// `len(x)`: the number of elements of an array or bytes of a string.
fn apply_len(args: Vec<Object>) -> Result<Object, RuntimeError> {
    expect_args(&args, 1)?;
    match &args[0] {
        Object::Str(value) => Ok(Object::Integer(value.len() as i64)),
        Object::Array(elements) => Ok(Object::Integer(elements.len() as i64)),
        other => Err(RuntimeError::builtin_argument_not_supported(
            "len",
            other.type_name(),
        )),
    }
}

/// `first(array)`: the first element, or null for an empty array.
fn apply_first(args: Vec<Object>) -> Result<Object, RuntimeError> {
    expect_args(&args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(elements.first().cloned().unwrap_or(Object::Null)),
        other => Err(RuntimeError::builtin_argument_must_be_array(
            "first",
            other.type_name(),
        )),
    }
}

/// `last(array)`: the last element, or null for an empty array.
fn apply_last(args: Vec<Object>) -> Result<Object, RuntimeError> {
    expect_args(&args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(elements.last().cloned().unwrap_or(Object::Null)),
        other => Err(RuntimeError::builtin_argument_must_be_array(
            "last",
            other.type_name(),
        )),
    }
}

/// `rest(array)`: a new array holding all but the first element, or null
/// for an empty array.
fn apply_rest(args: Vec<Object>) -> Result<Object, RuntimeError> {
    expect_args(&args, 1)?;
    match &args[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                Ok(Object::Null)
            } else {
                Ok(Object::Array(elements[1..].to_vec()))
            }
        }
        other => Err(RuntimeError::builtin_argument_must_be_array(
            "rest",
            other.type_name(),
        )),
    }
}

/// `push(array, value)`: a new array with `value` appended. The original
/// array is untouched; arrays are value-semantic in user programs.
fn apply_push(args: Vec<Object>) -> Result<Object, RuntimeError> {
    expect_args(&args, 2)?;
    match &args[0] {
        Object::Array(elements) => {
            let mut elements = elements.clone();
            elements.push(args[1].clone());
            Ok(Object::Array(elements))
        }
        other => Err(RuntimeError::builtin_argument_must_be_array(
            "push",
            other.type_name(),
        )),
    }
}

/// `puts(...)`: prints each argument's Inspect form on its own line and
/// returns null.
fn apply_puts(args: Vec<Object>) -> Result<Object, RuntimeError> {
    for arg in &args {
        println!("{}", arg);
    }
    Ok(Object::Null)
}
