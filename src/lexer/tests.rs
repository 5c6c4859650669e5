//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//!
//! - Numeric literals and their decoded payloads
//! - Identifiers
//! - One- and two-character operators
//! - The permissive skipping policy
//! - Absence of an end-of-input token

use super::{lexer::scan, tokens::TokenKind};

#[test]
fn test_scan_simple_expression() {
    let tokens = scan("1 + 2 * 3");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Star,
            TokenKind::Number,
        ]
    );
}

#[test]
fn test_scan_integers() {
    let tokens = scan("12345");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "12345");
    assert_eq!(tokens[0].number_value(), Some(12345.0));
}

#[test]
fn test_scan_floats() {
    let tokens = scan("123.456");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "123.456");
    assert_eq!(tokens[0].number_value(), Some(123.456));
}

#[test]
fn test_scan_trailing_dot_number() {
    // A digit run followed by a bare dot is one numeric token.
    let tokens = scan("1.");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme, "1.");
    assert_eq!(tokens[0].number_value(), Some(1.0));
}

#[test]
fn test_scan_leading_dot_is_skipped() {
    let tokens = scan(".5");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "5");
}

#[test]
fn test_scan_identifiers() {
    let tokens = scan("foo bar baz_123 _underscore CamelCase");

    for (token, expected) in tokens
        .iter()
        .zip(["foo", "bar", "baz_123", "_underscore", "CamelCase"])
    {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, expected);
        assert_eq!(token.name(), expected);
    }
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_scan_operators() {
    let tokens = scan("+ - * ** / % == != < > <= >= && || ~ !");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::StarStar,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Tilde,
            TokenKind::Not,
        ]
    );
}

#[test]
fn test_scan_operator_lexemes() {
    for (source, kind) in [
        ("+", TokenKind::Plus),
        ("-", TokenKind::Dash),
        ("~", TokenKind::Tilde),
        ("!", TokenKind::Not),
        ("*", TokenKind::Star),
        ("**", TokenKind::StarStar),
        ("/", TokenKind::Slash),
        ("%", TokenKind::Percent),
        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
    ] {
        let tokens = scan(source);
        assert_eq!(tokens.len(), 1, "scanning {:?}", source);
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].lexeme, source);
    }
}

#[test]
fn test_scan_maximal_munch() {
    // Two-character operators win over their one-character prefixes.
    let tokens = scan("**=="); // StarStar then Equals
    assert_eq!(tokens[0].kind, TokenKind::StarStar);
    assert_eq!(tokens[1].kind, TokenKind::Equals);

    let tokens = scan("***");
    assert_eq!(tokens[0].kind, TokenKind::StarStar);
    assert_eq!(tokens[1].kind, TokenKind::Star);

    let tokens = scan("<=>=");
    assert_eq!(tokens[0].kind, TokenKind::LessEquals);
    assert_eq!(tokens[1].kind, TokenKind::GreaterEquals);
}

#[test]
fn test_scan_bare_assignment_produces_no_token() {
    // `=` only forms a token when doubled.
    assert!(scan("=").is_empty());

    let tokens = scan("a = b");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, "a");
    assert_eq!(tokens[1].lexeme, "b");
}

#[test]
fn test_scan_bare_ampersand_and_pipe_produce_no_token() {
    assert!(scan("&").is_empty());
    assert!(scan("|").is_empty());

    let tokens = scan("1 & 2");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Number);
}

#[test]
fn test_scan_skips_unrecognized_characters() {
    // Permissive scanning: anything no pattern claims is dropped without
    // an error.
    let tokens = scan("1 @ # $ 2");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, "1");
    assert_eq!(tokens[1].lexeme, "2");
}

#[test]
fn test_scan_skips_non_ascii_characters() {
    let tokens = scan("1 é 2");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, "1");
    assert_eq!(tokens[1].lexeme, "2");
}

#[test]
fn test_scan_whitespace_handling() {
    let tokens = scan("  1   +\t\n  2  ");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Number);
}

#[test]
fn test_scan_empty_input() {
    assert!(scan("").is_empty());
}

#[test]
fn test_scan_appends_no_eof_token() {
    let tokens = scan("1");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
}

#[test]
fn test_scan_mixed_expression() {
    let tokens = scan("x + 5 * (y - 3)");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Star,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::CloseParen,
        ]
    );
}

#[test]
fn test_scan_no_sign_on_numbers() {
    // Leading sign is grammar, not lexing: `-1` is two tokens.
    let tokens = scan("-1");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Dash);
    assert_eq!(tokens[1].kind, TokenKind::Number);
}

#[test]
fn test_number_value_is_none_for_operators() {
    let tokens = scan("+");
    assert_eq!(tokens[0].number_value(), None);
}

#[test]
fn test_scan_unary_operators_before_identifier() {
    let tokens = scan("~x");
    assert_eq!(tokens[0].kind, TokenKind::Tilde);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);

    let tokens = scan("!ready");
    assert_eq!(tokens[0].kind, TokenKind::Not);
    assert_eq!(tokens[1].lexeme, "ready");
}
