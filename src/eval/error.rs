//! Runtime error types.

use crate::ast::{InfixOperator, PrefixOperator};

/// An error raised while evaluating a program.
///
/// Runtime errors are first-class results of evaluation, not panics: they
/// travel up the evaluator on the `Err` side of its `Result`, so every
/// sub-evaluation short-circuits on the first error. The interpreter never
/// aborts the process for user code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    /// A human-readable description of the error.
    message: String,
}

impl RuntimeError {
    /// Returns the error message, without the `ERROR: ` prefix the drivers
    /// add when printing.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// An infix operator was applied to operands of different types.
    pub(super) fn type_mismatch(left: &str, op: InfixOperator, right: &str) -> Self {
        RuntimeError {
            message: format!("type mismatch: {} {} {}", left, op, right),
        }
    }

    /// A prefix operator was applied to an unsupported operand type.
    pub(super) fn unknown_prefix_operator(op: PrefixOperator, right: &str) -> Self {
        RuntimeError {
            message: format!("unknown operator: {}{}", op, right),
        }
    }

    /// An infix operator was applied to same-typed operands that do not
    /// support it.
    pub(super) fn unknown_infix_operator(left: &str, op: InfixOperator, right: &str) -> Self {
        RuntimeError {
            message: format!("unknown operator: {} {} {}", left, op, right),
        }
    }

    /// An identifier is bound neither in the environment chain nor in the
    /// built-in table.
    pub(super) fn identifier_not_found(name: &str) -> Self {
        RuntimeError {
            message: format!("identifier not found: {}", name),
        }
    }

    /// A call expression's callee evaluated to something that cannot be
    /// called.
    pub(super) fn not_a_function(type_name: &str) -> Self {
        RuntimeError {
            message: format!("not a function: {}", type_name),
        }
    }

    /// A user function was called with the wrong number of arguments.
    pub(super) fn wrong_number_of_arguments(want: usize, got: usize) -> Self {
        RuntimeError {
            message: format!("wrong number of arguments: want={}, got={}", want, got),
        }
    }

    /// A built-in function was called with the wrong number of arguments.
    pub(super) fn builtin_wrong_arguments(got: usize, want: usize) -> Self {
        RuntimeError {
            message: format!("wrong number of arguments. got={}, want={}", got, want),
        }
    }

    /// A built-in was given an argument type it does not support.
    pub(super) fn builtin_argument_not_supported(name: &str, type_name: &str) -> Self {
        RuntimeError {
            message: format!("argument to `{}` not supported, got {}", name, type_name),
        }
    }

    /// A built-in that only works on arrays was given something else.
    pub(super) fn builtin_argument_must_be_array(name: &str, type_name: &str) -> Self {
        RuntimeError {
            message: format!("argument to `{}` must be ARRAY, got {}", name, type_name),
        }
    }

    /// Integer division with a zero divisor.
    pub(super) fn division_by_zero() -> Self {
        RuntimeError {
            message: "division by zero".to_string(),
        }
    }

    /// The index operator was applied to a type that does not support it.
    pub(super) fn index_not_supported(type_name: &str) -> Self {
        RuntimeError {
            message: format!("index operator not supported: {}", type_name),
        }
    }

    /// A hash key (in a literal or an index) is not a hashable type.
    pub(super) fn unusable_as_hash_key(type_name: &str) -> Self {
        RuntimeError {
            message: format!("unusable as hash key: {}", type_name),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuntimeError {}
