//! Parse error types.

use crate::token::{Span, TokenKind};

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting. The parser
/// accumulates these instead of stopping at the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl ParseError {
    /// The peek token did not match what the grammar requires next.
    pub(super) fn expected_token(expected: &TokenKind, found: &TokenKind, span: Span) -> Self {
        ParseError {
            message: format!("expected {}, found {}", expected, found),
            span,
        }
    }

    /// An identifier was required (let binding name, function parameter).
    pub(super) fn expected_identifier(found: &TokenKind, span: Span) -> Self {
        ParseError {
            message: format!("expected identifier, found {}", found),
            span,
        }
    }

    /// No expression can start with the current token.
    pub(super) fn no_prefix_parse_fn(found: &TokenKind, span: Span) -> Self {
        ParseError {
            message: format!("no prefix parse function for {}", found),
            span,
        }
    }

    /// An integer literal did not fit in an `i64`.
    pub(super) fn invalid_integer_literal(text: &str, span: Span) -> Self {
        ParseError {
            message: format!("could not parse '{}' as integer", text),
            span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
