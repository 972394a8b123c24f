//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`stmt`]: Statement parsing (let, return, expression statements)
//! - [`literals`]: Identifier and literal expressions
//! - [`expr`]: Operator, if, function, call, and collection expressions
//! - [`precedence`]: Operator precedence via canonical string forms
//! - [`errors`]: Error accumulation and message quality

use super::*;
use crate::ast::{Expr, ExprKind, InfixOperator, PrefixOperator, Program, StmtKind};
use crate::lexer::Lexer;


/// Parses input that is expected to be well-formed and returns the program.
pub(super) fn parse(input: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "unexpected parse errors for input {:?}: {:?}",
        input,
        parser.errors()
    );
    program
}

/// Parses input that is expected to fail and returns the error messages.
pub(super) fn parse_errors(input: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(input));
    parser.parse_program();
    assert!(
        !parser.errors().is_empty(),
        "expected parse errors for input {:?}, got none",
        input
    );
    parser.errors().iter().map(|e| e.message.clone()).collect()
}

/// Parses a single-statement input and returns its expression.
pub(super) fn parse_expr(input: &str) -> Expr {
    let program = parse(input);
    assert_eq!(
        program.statements.len(),
        1,
        "input {:?} should parse to exactly one statement",
        input
    );
    match &program.statements[0].kind {
        StmtKind::Expr(expr) => expr.clone(),
        other => panic!("expected expression statement, got {:?}", other),
    }
}
