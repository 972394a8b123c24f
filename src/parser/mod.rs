//! Parser for the Monkey programming language.
//!
//! This module provides the [`Parser`] struct which transforms the lexer's
//! token stream into an Abstract Syntax Tree ([`Program`]).
//!
//! # Overview
//!
//! The parser implements Pratt-style recursive descent: statements are
//! parsed by plain recursive descent, and expressions by per-token prefix
//! and infix handlers driven by operator precedence. The parser pulls
//! tokens from the lexer on demand with exactly one token of lookahead
//! (`cur_token` / `peek_token`).
//!
//! # Grammar
//!
//! ```text
//! program     → stmt* EOF
//! stmt        → let_stmt | return_stmt | expr_stmt
//! let_stmt    → "let" IDENTIFIER "=" expr ";"
//! return_stmt → "return" expr ";"
//! expr_stmt   → expr ";"?
//! block       → "{" stmt* "}"
//! expr        → prefix (infix_op expr)*            // precedence-driven
//! prefix      → IDENTIFIER | INT | STRING | "true" | "false"
//!             | ("!" | "-") expr | "(" expr ")"
//!             | "if" "(" expr ")" block ("else" block)?
//!             | "fn" "(" params? ")" block
//!             | "[" expr_list? "]" | "{" pair_list? "}"
//! infix_op    → "+" | "-" | "*" | "/" | "<" | ">" | "==" | "!="
//!             | "(" args? ")" | "[" expr "]"
//! ```
//!
//! # Error Handling
//!
//! The parser never panics and always terminates. Errors are accumulated
//! on the parser ([`errors`](Parser::errors)); a statement that fails to
//! parse is discarded and parsing continues at the next token. A non-empty
//! error list after [`parse_program`](Parser::parse_program) means the AST
//! may be partial and should not be evaluated.
//!
//! # Examples
//!
//! ```
//! use monkey::lexer::Lexer;
//! use monkey::parser::Parser;
//!
//! let mut parser = Parser::new(Lexer::new("let x = 1 + 2;"));
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + 2);");
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `helpers` - Token navigation and basic parsing operations
//! - `stmt` - Statement and block parsing
//! - `expr` - Pratt expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::eval`] - Consumes the AST to produce runtime values

mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use crate::ast::Program;
use crate::lexer::Lexer;
use crate::token::Token;

/// A Pratt-style recursive descent parser for the Monkey language.
///
/// The parser owns the lexer and maintains one token of lookahead. Create
/// it with [`Parser::new`], then call [`Parser::parse_program`] and inspect
/// [`Parser::errors`] before using the result.
pub struct Parser<'a> {
    /// The lexer tokens are pulled from on demand.
    lexer: Lexer<'a>,
    /// The token currently being parsed.
    cur_token: Token,
    /// The next token (one-token lookahead).
    peek_token: Token,
    /// Errors accumulated while parsing.
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser over the given lexer.
    ///
    /// Both lookahead slots are primed immediately, so `cur_token` is the
    /// first token of the input.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Parser {
            lexer,
            cur_token,
            peek_token,
            errors: Vec::new(),
        }
    }

    /// Parses the entire input into a [`Program`].
    ///
    /// Statements that fail to parse are discarded; their errors are
    /// recorded and parsing resumes at the following token. The returned
    /// program therefore contains every statement that could be parsed,
    /// even when [`errors`](Parser::errors) is non-empty.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.is_eof() {
            match self.parse_stmt() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => self.errors.push(err),
            }
            self.advance();
        }

        Program { statements }
    }

    /// Returns the errors accumulated so far.
    ///
    /// A non-empty slice after [`parse_program`](Parser::parse_program)
    /// means the AST may be partial; callers conventionally skip
    /// evaluation in that case.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}
