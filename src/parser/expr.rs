//! Expression parsing using the Pratt algorithm.
//!
//! Every token kind that can start an expression has a prefix handler, and
//! every operator that can follow one has an infix handler. The core loop
//! in [`Parser::parse_expr`] keeps folding infix handlers into the left
//! operand for as long as the lookahead operator binds tighter than the
//! precedence the caller passed in, which yields correct precedence and
//! left-associativity without a grammar level per operator.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, InfixOperator, PrefixOperator};
use crate::token::TokenKind;

/// Operator precedence levels, from loosest to tightest binding.
///
/// The derived `Ord` follows declaration order, so `Lowest < Equals < ... <
/// Index` holds and the Pratt loop can compare levels directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    /// Starting precedence; binds nothing.
    Lowest,
    /// `==` and `!=`.
    Equals,
    /// `<` and `>`.
    LessGreater,
    /// `+` and binary `-`.
    Sum,
    /// `*` and `/`.
    Product,
    /// Prefix `!` and `-`.
    Prefix,
    /// The `(` of a call expression.
    Call,
    /// The `[` of an index expression.
    Index,
}

/// Returns the precedence a token has when it appears in operator position.
///
/// Tokens that are not infix operators get [`Precedence::Lowest`], which
/// makes the Pratt loop stop in front of them.
fn token_precedence(kind: &TokenKind) -> Precedence {
    match kind {
        TokenKind::EqualEqual | TokenKind::BangEqual => Precedence::Equals,
        TokenKind::LessThan | TokenKind::GreaterThan => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Star | TokenKind::Slash => Precedence::Product,
        TokenKind::LeftParen => Precedence::Call,
        TokenKind::LeftBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

/// Converts a token kind to an infix operator, if it is one.
fn token_to_infix_op(kind: &TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Star => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::LessThan => Some(InfixOperator::Lt),
        TokenKind::GreaterThan => Some(InfixOperator::Gt),
        TokenKind::EqualEqual => Some(InfixOperator::Eq),
        TokenKind::BangEqual => Some(InfixOperator::NotEq),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    /// Parses an expression starting at the lowest precedence.
    pub(super) fn parse_expr_lowest(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr(Precedence::Lowest)
    }

    /// Parses an expression with the Pratt algorithm.
    ///
    /// The current token must be the first token of the expression; on
    /// return the current token is its last token.
    ///
    /// # Arguments
    ///
    /// * `precedence` - The binding power of the context. The loop only
    ///   consumes operators that bind tighter than this.
    pub(super) fn parse_expr(&mut self, precedence: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&TokenKind::Semicolon)
            && precedence < token_precedence(self.peek_kind())
        {
            left = match self.peek_kind() {
                TokenKind::LeftParen => {
                    self.advance();
                    self.parse_call(left)?
                }
                TokenKind::LeftBracket => {
                    self.advance();
                    self.parse_index(left)?
                }
                kind => match token_to_infix_op(kind) {
                    Some(op) => {
                        self.advance();
                        self.parse_infix(left, op)?
                    }
                    None => return Ok(left),
                },
            };
        }

        Ok(left)
    }

    /// Dispatches on the current token to the matching prefix handler.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let span = self.cur_span();

        match self.cur_kind() {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                Ok(Expr::new(ExprKind::Identifier(name), span))
            }
            TokenKind::Int(text) => {
                let value: i64 = text
                    .parse()
                    .map_err(|_| ParseError::invalid_integer_literal(text, span))?;
                Ok(Expr::new(ExprKind::IntLiteral(value), span))
            }
            TokenKind::StringLiteral(value) => {
                let value = value.clone();
                Ok(Expr::new(ExprKind::StringLiteral(value), span))
            }
            TokenKind::True => Ok(Expr::new(ExprKind::BoolLiteral(true), span)),
            TokenKind::False => Ok(Expr::new(ExprKind::BoolLiteral(false), span)),
            TokenKind::Bang => self.parse_prefix_op(PrefixOperator::Not),
            TokenKind::Minus => self.parse_prefix_op(PrefixOperator::Neg),
            TokenKind::LeftParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LeftBracket => self.parse_array_literal(),
            TokenKind::LeftBrace => self.parse_hash_literal(),
            kind => Err(ParseError::no_prefix_parse_fn(kind, span)),
        }
    }

    /// Parses a prefix operation; the current token is the operator.
    fn parse_prefix_op(&mut self, op: PrefixOperator) -> Result<Expr, ParseError> {
        let start_span = self.cur_span();
        self.advance();

        let right = self.parse_expr(Precedence::Prefix)?;
        let span = start_span.to(right.span);

        Ok(Expr::new(
            ExprKind::Prefix {
                op,
                right: Box::new(right),
            },
            span,
        ))
    }

    /// Parses the right-hand side of a binary operation.
    ///
    /// The current token is the operator. Parsing the right side at the
    /// operator's own precedence makes operators of equal precedence
    /// left-associative: in `a - b - c` the second `-` does not bind into
    /// the first one's right operand.
    fn parse_infix(&mut self, left: Expr, op: InfixOperator) -> Result<Expr, ParseError> {
        let precedence = token_precedence(self.cur_kind());
        self.advance();

        let right = self.parse_expr(precedence)?;
        let span = left.span.to(right.span);

        Ok(Expr::new(
            ExprKind::Infix {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            span,
        ))
    }

    /// Parses a parenthesized expression; the current token is `(`.
    ///
    /// Grouping leaves no node behind: the inner expression is returned
    /// with its span widened to cover the parentheses.
    fn parse_grouped(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.cur_span();
        self.advance();

        let inner = self.parse_expr_lowest()?;
        self.expect_peek(&TokenKind::RightParen)?;

        let span = start_span.to(self.cur_span());
        Ok(Expr::new(inner.kind, span))
    }

    /// Parses an if expression; the current token is `if`.
    ///
    /// # Grammar
    ///
    /// ```text
    /// if_expr → "if" "(" expr ")" block ("else" block)?
    /// ```
    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.cur_span();

        self.expect_peek(&TokenKind::LeftParen)?;
        self.advance();
        let condition = self.parse_expr_lowest()?;
        self.expect_peek(&TokenKind::RightParen)?;

        self.expect_peek(&TokenKind::LeftBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(&TokenKind::Else) {
            self.advance();
            self.expect_peek(&TokenKind::LeftBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        let end_span = alternative
            .as_ref()
            .map(|block| block.span)
            .unwrap_or(consequence.span);
        let span = start_span.to(end_span);

        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            span,
        ))
    }

    /// Parses a function literal; the current token is `fn`.
    ///
    /// # Grammar
    ///
    /// ```text
    /// fn_literal → "fn" "(" (IDENTIFIER ("," IDENTIFIER)*)? ")" block
    /// ```
    fn parse_function_literal(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.cur_span();

        self.expect_peek(&TokenKind::LeftParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(&TokenKind::LeftBrace)?;
        let body = self.parse_block()?;

        let span = start_span.to(body.span);
        Ok(Expr::new(ExprKind::Function { parameters, body }, span))
    }

    /// Parses a comma-separated parameter list; the current token is `(`.
    /// On return the current token is `)`.
    fn parse_function_parameters(&mut self) -> Result<Vec<String>, ParseError> {
        let mut parameters = Vec::new();

        if self.peek_is(&TokenKind::RightParen) {
            self.advance();
            return Ok(parameters);
        }

        parameters.push(self.expect_peek_identifier()?);

        while self.peek_is(&TokenKind::Comma) {
            self.advance();
            parameters.push(self.expect_peek_identifier()?);
        }

        self.expect_peek(&TokenKind::RightParen)?;
        Ok(parameters)
    }

    /// Parses a call expression; the current token is the `(` following
    /// the callee.
    fn parse_call(&mut self, function: Expr) -> Result<Expr, ParseError> {
        let arguments = self.parse_expr_list(&TokenKind::RightParen)?;
        let span = function.span.to(self.cur_span());

        Ok(Expr::new(
            ExprKind::Call {
                function: Box::new(function),
                arguments,
            },
            span,
        ))
    }

    /// Parses an array literal; the current token is `[`.
    fn parse_array_literal(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.cur_span();
        let elements = self.parse_expr_list(&TokenKind::RightBracket)?;
        let span = start_span.to(self.cur_span());

        Ok(Expr::new(ExprKind::Array(elements), span))
    }

    /// Parses a comma-separated expression list terminated by `end`.
    ///
    /// The current token is the opening delimiter; on return it is `end`.
    /// Shared by call arguments and array literals.
    fn parse_expr_list(&mut self, end: &TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.advance();
            return Ok(list);
        }

        self.advance();
        list.push(self.parse_expr_lowest()?);

        while self.peek_is(&TokenKind::Comma) {
            self.advance();
            self.advance();
            list.push(self.parse_expr_lowest()?);
        }

        self.expect_peek(end)?;
        Ok(list)
    }

    /// Parses an index expression; the current token is the `[` following
    /// the indexed expression.
    fn parse_index(&mut self, left: Expr) -> Result<Expr, ParseError> {
        self.advance();
        let index = self.parse_expr_lowest()?;
        self.expect_peek(&TokenKind::RightBracket)?;

        let span = left.span.to(self.cur_span());
        Ok(Expr::new(
            ExprKind::Index {
                left: Box::new(left),
                index: Box::new(index),
            },
            span,
        ))
    }

    /// Parses a hash literal; the current token is `{`.
    ///
    /// # Grammar
    ///
    /// ```text
    /// hash_literal → "{" (expr ":" expr ("," expr ":" expr)* ","?)? "}"
    /// ```
    fn parse_hash_literal(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.cur_span();
        let mut pairs = Vec::new();

        while !self.peek_is(&TokenKind::RightBrace) {
            self.advance();
            let key = self.parse_expr_lowest()?;

            self.expect_peek(&TokenKind::Colon)?;
            self.advance();
            let value = self.parse_expr_lowest()?;

            pairs.push((key, value));

            if !self.peek_is(&TokenKind::RightBrace) {
                self.expect_peek(&TokenKind::Comma)?;
            }
        }

        self.expect_peek(&TokenKind::RightBrace)?;

        let span = start_span.to(self.cur_span());
        Ok(Expr::new(ExprKind::Hash(pairs), span))
    }
}
