//! Abstract Syntax Tree definitions for the Monkey programming language.
//!
//! This module defines the data structures that represent parsed Monkey
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::eval`] tree-walking evaluator. Trees are built once by the
//! parser and never mutated afterwards.
//!
//! # Structure
//!
//! - [`Program`] - The root node, an ordered list of statements
//! - [`Stmt`] / [`StmtKind`] - Statements (`let`, `return`, expression)
//! - [`Block`] - A braced statement list (bodies of `if`/`else` and `fn`)
//! - [`Expr`] / [`ExprKind`] - Expressions, from literals to calls
//! - [`PrefixOperator`] / [`InfixOperator`] - Operator enums
//!
//! Each AST node includes source location information
//! ([`Span`](crate::token::Span)) for error reporting.
//!
//! Every node implements [`Display`](std::fmt::Display) with a canonical
//! string form that makes operator grouping explicit (`(a + (b * c))`);
//! the parser tests assert against it.
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::eval`] - Walks the AST to produce runtime values

mod expr;
mod program;
mod stmt;

#[cfg(test)]
mod tests;

pub use expr::{Expr, ExprKind, InfixOperator, PrefixOperator};
pub use program::Program;
pub use stmt::{Block, Stmt, StmtKind};
