//! Integration tests for the public surface.
//!
//! These tests exercise the crate exactly as an external consumer would:
//! `exparse::parse` for trees, `exparse::scan` for raw token sequences, and
//! the re-exported types for matching on the result.

use exparse::{parse, scan, Expr, SyntaxError, TokenKind};

#[test]
fn test_parse_simple_expression() {
    let expr = parse("1 + 2 * 3").unwrap();
    assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
}

#[test]
fn test_parse_produces_owned_tree() {
    let expr = parse("(a + 1) * -b").unwrap();

    match expr {
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            assert_eq!(operator.kind, TokenKind::Star);
            assert_eq!(left.to_string(), "(+ a 1)");
            assert_eq!(right.to_string(), "(- b)");
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_parse_value_payload() {
    let expr = parse("3.25").unwrap();

    match expr {
        Expr::Value { token, value } => {
            assert_eq!(token.lexeme, "3.25");
            assert_eq!(value, 3.25);
        }
        other => panic!("expected a value expression, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_input_fails() {
    assert_eq!(parse(""), Err(SyntaxError::UnexpectedEndOfInput));
}

#[test]
fn test_parse_error_carries_offending_lexeme() {
    let error = parse("|| 1").unwrap_err();
    assert_eq!(
        error,
        SyntaxError::UnexpectedToken {
            lexeme: String::from("||")
        }
    );
    assert_eq!(error.to_string(), "unexpected token: \"||\"");
}

#[test]
fn test_scan_is_exposed_for_testing() {
    let tokens = scan("x ** 2");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier, TokenKind::StarStar, TokenKind::Number]
    );
}

#[test]
fn test_parse_is_pure_across_calls() {
    // No state persists between calls; identical inputs give identical
    // trees.
    let first = parse("1 && 2 || 3").unwrap();
    let second = parse("1 && 2 || 3").unwrap();
    assert_eq!(first, second);

    parse("").unwrap_err();
    let third = parse("1 && 2 || 3").unwrap();
    assert_eq!(first, third);
}

#[test]
fn test_both_engines_reachable_and_agree() {
    let source = "1 ** 2 ** 3 + -x";
    let pratt = exparse::parser::parser::parse(source).unwrap();
    let descent = exparse::parser::descent::parse(source).unwrap();
    assert_eq!(pratt, descent);
}

#[test]
fn test_deeply_nested_grouping() {
    let mut source = String::new();
    for _ in 0..64 {
        source.push('(');
    }
    source.push('1');
    for _ in 0..64 {
        source.push(')');
    }

    let expr = parse(&source).unwrap();
    assert_eq!(expr.to_string(), "1");
}
