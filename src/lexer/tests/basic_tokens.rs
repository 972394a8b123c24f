//! Tests for basic token recognition (punctuation and delimiters).

use super::*;

#[test]
fn test_empty_input() {
    let kinds = tokenize_kinds("");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_parens() {
    let kinds = tokenize_kinds("()");
    assert_eq!(
        kinds,
        vec![TokenKind::LeftParen, TokenKind::RightParen, TokenKind::Eof]
    );
}

#[test]
fn test_braces() {
    let kinds = tokenize_kinds("{}");
    assert_eq!(
        kinds,
        vec![TokenKind::LeftBrace, TokenKind::RightBrace, TokenKind::Eof]
    );
}

#[test]
fn test_brackets() {
    let kinds = tokenize_kinds("[]");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_separators() {
    let kinds = tokenize_kinds(",;:");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_punctuation_with_spaces() {
    let kinds = tokenize_kinds("( , )");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftParen,
            TokenKind::Comma,
            TokenKind::RightParen,
            TokenKind::Eof
        ]
    );
}
