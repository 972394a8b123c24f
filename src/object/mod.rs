//! Runtime values for the Monkey interpreter.
//!
//! This module defines [`Object`], the sum of every value a Monkey program
//! can produce, together with the [`HashKey`] type that makes integers,
//! booleans, and strings usable as hash keys, the [`Environment`] that
//! holds variable bindings, and the [`Builtin`] table of native functions.
//!
//! # Module Structure
//!
//! - [`environment`] - Chained name-to-value bindings ([`Environment`])
//! - [`builtins`] - The built-in function table ([`Builtin`])
//!
//! # See Also
//!
//! * [`crate::eval`] - Produces and consumes these values

mod builtins;
mod environment;

pub use builtins::Builtin;
pub use environment::{Environment, SharedEnv};

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::Block;

/// A user-defined function value.
///
/// Function values are created by evaluating `fn(...) { ... }` literals.
/// They carry their parameter names, their body, and the environment they
/// were defined in — calls extend that captured environment, which is what
/// makes closures work.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The parameter names, in order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body: Block,
    /// The environment captured at definition time.
    pub env: SharedEnv,
}

/// A key in a Monkey hash.
///
/// Only integers, booleans, and strings are hashable. `HashKey` pairs the
/// type with the primitive value, so equal primitive values map to the
/// same entry no matter where they were allocated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// An integer key.
    Integer(i64),
    /// A boolean key.
    Boolean(bool),
    /// A string key.
    Str(String),
}

/// An entry in a Monkey hash.
///
/// The original key object is stored alongside the value so that printing
/// a hash can show the keys as written, while lookup goes through the
/// [`HashKey`] index.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as the program wrote it.
    pub key: Object,
    /// The value bound to the key.
    pub value: Object,
}

/// A runtime value in the Monkey language.
///
/// Every expression evaluates to one of these. `ReturnValue` is not a
/// user-visible value: it is the control-flow wrapper that carries a
/// `return` out of nested blocks, and the evaluator unwraps it at the
/// nearest function or program boundary. Runtime errors travel on the
/// `Err` side of the evaluator's `Result` and can never appear in a data
/// position.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean.
    Boolean(bool),
    /// The null value.
    Null,
    /// A string.
    Str(String),
    /// An ordered list of values.
    Array(Vec<Object>),
    /// A mapping from hashable values to values.
    Hash(HashMap<HashKey, HashPair>),
    /// A user-defined function with its captured environment.
    Function(Rc<Function>),
    /// A built-in native function.
    Builtin(Builtin),
    /// The control-flow wrapper produced by `return`.
    ReturnValue(Box<Object>),
}

impl Object {
    /// Returns the type tag used in error messages (`INTEGER`, `BOOLEAN`,
    /// ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::Str(_) => "STRING",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::ReturnValue(_) => "RETURN_VALUE",
        }
    }

    /// Returns the hash key for this value, or `None` if the type is not
    /// hashable.
    ///
    /// Integers, booleans, and strings are the only valid hash keys.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(value) => Some(HashKey::Integer(*value)),
            Object::Boolean(value) => Some(HashKey::Boolean(*value)),
            Object::Str(value) => Some(HashKey::Str(value.clone())),
            _ => None,
        }
    }

    /// Returns `true` for every value except `false` and null.
    ///
    /// Note that `0`, `""`, and `[]` are all truthy; Monkey draws the line
    /// only at `false` and `null`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }
}

impl fmt::Display for Object {
    /// Writes the value's Inspect form, the representation the REPL prints.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{}", value),
            Object::Boolean(value) => write!(f, "{}", value),
            Object::Null => write!(f, "null"),
            Object::Str(value) => write!(f, "{}", value),
            Object::Array(elements) => {
                let elems: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elems.join(", "))
            }
            Object::Hash(pairs) => {
                let pairs: Vec<String> = pairs
                    .values()
                    .map(|pair| format!("{}: {}", pair.key, pair.value))
                    .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Object::Function(function) => {
                write!(
                    f,
                    "fn({}) {{\n{}\n}}",
                    function.parameters.join(", "),
                    function.body
                )
            }
            Object::Builtin(builtin) => write!(f, "builtin function {}", builtin),
            Object::ReturnValue(value) => write!(f, "{}", value),
        }
    }
}
