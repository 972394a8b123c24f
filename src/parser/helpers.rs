//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, TokenKind};

impl<'a> Parser<'a> {
    /// Returns the kind of the current token.
    pub(super) fn cur_kind(&self) -> &TokenKind {
        &self.cur_token.kind
    }

    /// Returns the kind of the peek (lookahead) token.
    pub(super) fn peek_kind(&self) -> &TokenKind {
        &self.peek_token.kind
    }

    /// Returns the span of the current token.
    pub(super) fn cur_span(&self) -> Span {
        self.cur_token.span
    }

    /// Returns the span of the peek token.
    pub(super) fn peek_span(&self) -> Span {
        self.peek_token.span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.cur_kind(), TokenKind::Eof)
    }

    /// Returns `true` if the current token has the given kind.
    pub(super) fn cur_is(&self, kind: &TokenKind) -> bool {
        self.cur_kind() == kind
    }

    /// Returns `true` if the peek token has the given kind.
    pub(super) fn peek_is(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Advances by one token: the peek token becomes current and a fresh
    /// token is pulled from the lexer.
    ///
    /// Past the end of input the lexer keeps yielding `Eof`, so advancing
    /// is always safe.
    pub(super) fn advance(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// If the peek token matches `expected`, advances onto it.
    ///
    /// This is the parser's workhorse for grammar requirements: `let` must
    /// be followed by an identifier, `if` by `(`, and so on.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the expected and found kinds when
    /// the peek token does not match. The parser does not advance in that
    /// case.
    pub(super) fn expect_peek(&mut self, expected: &TokenKind) -> Result<(), ParseError> {
        if self.peek_is(expected) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::expected_token(
                expected,
                self.peek_kind(),
                self.peek_span(),
            ))
        }
    }

    /// If the peek token is an identifier, advances onto it and returns its
    /// name.
    pub(super) fn expect_peek_identifier(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Identifier(name) = self.peek_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::expected_identifier(
                self.peek_kind(),
                self.peek_span(),
            ))
        }
    }
}
