//! Statement and block parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Block, Stmt, StmtKind};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a single statement.
    ///
    /// On return the current token is the last token of the statement, so
    /// the caller's advance lands on the start of the next one.
    ///
    /// # Grammar
    ///
    /// ```text
    /// stmt → let_stmt | return_stmt | expr_stmt
    /// ```
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.cur_kind() {
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            _ => self.parse_expr_stmt(),
        }
    }

    /// Parses a let statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// let_stmt → "let" IDENTIFIER "=" expr ";"
    /// ```
    fn parse_let_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.cur_span();

        let name = self.expect_peek_identifier()?;
        self.expect_peek(&TokenKind::Assign)?;
        self.advance();

        let value = self.parse_expr_lowest()?;
        let span = start_span.to(value.span);

        self.skip_to_semicolon();

        Ok(Stmt::new(StmtKind::Let { name, value }, span))
    }

    /// Parses a return statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return_stmt → "return" expr ";"
    /// ```
    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.cur_span();
        self.advance();

        let value = self.parse_expr_lowest()?;
        let span = start_span.to(value.span);

        self.skip_to_semicolon();

        Ok(Stmt::new(StmtKind::Return(value), span))
    }

    /// Parses an expression statement.
    ///
    /// The trailing semicolon is optional, which is what lets a REPL line
    /// like `5 + 5` evaluate without ceremony.
    fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expr_lowest()?;
        let span = expr.span;

        if self.peek_is(&TokenKind::Semicolon) {
            self.advance();
        }

        Ok(Stmt::new(StmtKind::Expr(expr), span))
    }

    /// Consumes tokens up to and including the terminating `;`.
    ///
    /// Stops at end of input so a missing semicolon cannot loop forever.
    fn skip_to_semicolon(&mut self) {
        while !self.cur_is(&TokenKind::Semicolon) && !self.is_eof() {
            self.advance();
        }
    }

    /// Parses a braced block of statements.
    ///
    /// The current token must be `{` on entry; on success the current
    /// token is the closing `}`.
    ///
    /// # Grammar
    ///
    /// ```text
    /// block → "{" stmt* "}"
    /// ```
    pub(super) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let start_span = self.cur_span();
        self.advance();

        let mut statements = Vec::new();
        while !self.cur_is(&TokenKind::RightBrace) && !self.is_eof() {
            let stmt = self.parse_stmt()?;
            statements.push(stmt);
            self.advance();
        }

        if !self.cur_is(&TokenKind::RightBrace) {
            return Err(ParseError::expected_token(
                &TokenKind::RightBrace,
                self.cur_kind(),
                self.cur_span(),
            ));
        }

        let span = start_span.to(self.cur_span());
        Ok(Block::new(statements, span))
    }
}
