//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the various token types from the
//! input: identifiers, keywords, integer and string literals, operators, and
//! punctuation. Unrecognized bytes become [`TokenKind::Illegal`] tokens.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Creates an operator token that is either one or two characters long,
    /// depending on whether the next character is `=` (`=`/`==`, `!`/`!=`).
    fn one_or_two_char_token(
        &mut self,
        single: TokenKind,
        double: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        let kind = if self.peek_char() == Some('=') {
            self.advance();
            self.advance();
            double
        } else {
            self.advance();
            single
        };
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Reads and returns the next token from the input.
    ///
    /// This method is called by [`next_token`](super::Lexer::next_token)
    /// after whitespace and comments have been skipped, with at least one
    /// character remaining.
    pub(super) fn read_token(&mut self) -> Token {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        let c = match self.current_char() {
            Some(c) => c,
            None => {
                let span = Span::new(start_pos, start_pos, start_line, start_column);
                return Token::new(TokenKind::Eof, span);
            }
        };

        match c {
            '=' => self.one_or_two_char_token(
                TokenKind::Assign,
                TokenKind::EqualEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '!' => self.one_or_two_char_token(
                TokenKind::Bang,
                TokenKind::BangEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '+' => self.single_char_token(TokenKind::Plus, start_pos, start_line, start_column),
            '-' => self.single_char_token(TokenKind::Minus, start_pos, start_line, start_column),
            '*' => self.single_char_token(TokenKind::Star, start_pos, start_line, start_column),
            '/' => self.single_char_token(TokenKind::Slash, start_pos, start_line, start_column),
            '<' => self.single_char_token(TokenKind::LessThan, start_pos, start_line, start_column),
            '>' => {
                self.single_char_token(TokenKind::GreaterThan, start_pos, start_line, start_column)
            }
            ',' => self.single_char_token(TokenKind::Comma, start_pos, start_line, start_column),
            ';' => {
                self.single_char_token(TokenKind::Semicolon, start_pos, start_line, start_column)
            }
            ':' => self.single_char_token(TokenKind::Colon, start_pos, start_line, start_column),
            '(' => {
                self.single_char_token(TokenKind::LeftParen, start_pos, start_line, start_column)
            }
            ')' => {
                self.single_char_token(TokenKind::RightParen, start_pos, start_line, start_column)
            }
            '{' => {
                self.single_char_token(TokenKind::LeftBrace, start_pos, start_line, start_column)
            }
            '}' => {
                self.single_char_token(TokenKind::RightBrace, start_pos, start_line, start_column)
            }
            '[' => {
                self.single_char_token(TokenKind::LeftBracket, start_pos, start_line, start_column)
            }
            ']' => {
                self.single_char_token(TokenKind::RightBracket, start_pos, start_line, start_column)
            }
            '"' => self.read_string(start_pos, start_line, start_column),
            _ if c.is_ascii_digit() => self.read_number(start_pos, start_line, start_column),
            _ if c.is_ascii_alphabetic() || c == '_' => {
                self.read_identifier(start_pos, start_line, start_column)
            }
            _ => self.single_char_token(TokenKind::Illegal(c), start_pos, start_line, start_column),
        }
    }

    /// Reads a string literal from the input.
    ///
    /// The opening double quote is at the current position. The token's
    /// value is everything up to (but not including) the next `"`; the
    /// closing quote is consumed but not included. Monkey strings have no
    /// escape sequences. An unterminated string simply takes the remainder
    /// of the input as its content — the lexer never fails.
    fn read_string(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        self.advance(); // skip opening "
        let content_start = self.pos;

        while let Some(c) = self.current_char() {
            if c == '"' {
                break;
            }
            self.advance();
        }

        let value = self.input[content_start..self.pos].to_string();

        // Consume the closing quote if there is one.
        if self.current_char() == Some('"') {
            self.advance();
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::StringLiteral(value), span)
    }

    /// Reads an identifier or keyword from the input.
    ///
    /// Identifiers consist of an ASCII letter or underscore followed by any
    /// number of ASCII letters, digits, or underscores. If the text matches
    /// a keyword (`fn`, `let`, `true`, `false`, `if`, `else`, `return`), the
    /// corresponding keyword token is returned instead.
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let value = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = match value.as_str() {
            "fn" => TokenKind::Function,
            "let" => TokenKind::Let,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            _ => TokenKind::Identifier(value),
        };

        Token::new(kind, span)
    }

    /// Reads an integer literal from the input.
    ///
    /// The token carries the raw digit run; conversion to `i64` (and the
    /// associated out-of-range error) is the parser's job.
    fn read_number(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let text = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Int(text), span)
    }
}
