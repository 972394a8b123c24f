//! The Monkey programming language interpreter library.
//!
//! This library provides the core components of the Monkey interpreter:
//! lexical analysis, parsing, and tree-walking evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Pratt-style recursive descent parser
//! - [`object`] - Runtime values, environments, and built-in functions
//! - [`eval`] - The recursive tree-walking evaluator
//!
//! # Example
//!
//! ```
//! use monkey::eval::eval_program;
//! use monkey::lexer::Lexer;
//! use monkey::object::{Environment, Object};
//! use monkey::parser::Parser;
//!
//! let source = "let double = fn(x) { x * 2 }; double(21);";
//!
//! let mut parser = Parser::new(Lexer::new(source));
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//!
//! let env = Environment::new_shared();
//! let result = eval_program(&program, &env).expect("evaluation error");
//! assert_eq!(result, Object::Integer(42));
//! ```

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;
