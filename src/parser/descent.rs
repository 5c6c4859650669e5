//! A hand-written recursive-descent parser for the same grammar.
//!
//! One function per precedence level, from loosest (`logical_or`) to
//! tightest (`primary`). Kept as an independently implemented cross-check
//! of the rule-table engine: both must accept the identical language and
//! produce structurally identical trees.

use crate::{
    ast::expressions::Expr,
    errors::errors::SyntaxError,
    lexer::{lexer::scan, tokens::TokenKind},
};

use super::cursor::TokenCursor;

/// Parses a source string with the recursive-descent engine.
pub fn parse(source: &str) -> Result<Expr, SyntaxError> {
    let mut cursor = TokenCursor::new(scan(source));
    expression(&mut cursor)
}

fn expression(cursor: &mut TokenCursor) -> Result<Expr, SyntaxError> {
    logical_or(cursor)
}

fn logical_or(cursor: &mut TokenCursor) -> Result<Expr, SyntaxError> {
    binary(cursor, &[TokenKind::Or], logical_and)
}

fn logical_and(cursor: &mut TokenCursor) -> Result<Expr, SyntaxError> {
    binary(cursor, &[TokenKind::And], equality)
}

fn equality(cursor: &mut TokenCursor) -> Result<Expr, SyntaxError> {
    binary(cursor, &[TokenKind::Equals, TokenKind::NotEquals], relational)
}

fn relational(cursor: &mut TokenCursor) -> Result<Expr, SyntaxError> {
    binary(
        cursor,
        &[
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
        ],
        addition,
    )
}

fn addition(cursor: &mut TokenCursor) -> Result<Expr, SyntaxError> {
    binary(cursor, &[TokenKind::Plus, TokenKind::Dash], multiplication)
}

fn multiplication(cursor: &mut TokenCursor) -> Result<Expr, SyntaxError> {
    binary(
        cursor,
        &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
        exponent,
    )
}

/// Folds a left-associative run of `operators`, parsing each operand one
/// precedence level tighter.
fn binary(
    cursor: &mut TokenCursor,
    operators: &[TokenKind],
    higher_precedence: fn(&mut TokenCursor) -> Result<Expr, SyntaxError>,
) -> Result<Expr, SyntaxError> {
    let mut left = higher_precedence(cursor)?;

    while cursor.check(operators) {
        let operator = match cursor.advance() {
            Some(token) => token.clone(),
            None => break,
        };

        left = Expr::binary(left, operator, higher_precedence(cursor)?);
    }

    Ok(left)
}

/// Right-associative: the right-hand side recurses back into this level,
/// so an equal-precedence operator to the right nests inward.
fn exponent(cursor: &mut TokenCursor) -> Result<Expr, SyntaxError> {
    let left = unary(cursor)?;

    if cursor.check(&[TokenKind::StarStar]) {
        if let Some(token) = cursor.advance() {
            let operator = token.clone();
            return Ok(Expr::binary(left, operator, exponent(cursor)?));
        }
    }

    Ok(left)
}

fn unary(cursor: &mut TokenCursor) -> Result<Expr, SyntaxError> {
    if cursor.check(&[TokenKind::Dash, TokenKind::Tilde, TokenKind::Not]) {
        if let Some(token) = cursor.advance() {
            let operator = token.clone();
            // Operand is a full expression, matching the Pratt engine's
            // loose unary binding.
            return Ok(Expr::unary(operator, expression(cursor)?));
        }
    }

    primary(cursor)
}

fn primary(cursor: &mut TokenCursor) -> Result<Expr, SyntaxError> {
    if cursor.check(&[TokenKind::OpenParen]) {
        cursor.advance();
        let inner = expression(cursor)?;
        // Closing token consumed blindly, same as the Pratt engine.
        cursor.advance();
        return Ok(inner);
    }

    let token = match cursor.advance() {
        Some(token) => token.clone(),
        None => return Err(SyntaxError::UnexpectedEndOfInput),
    };

    match token.kind {
        TokenKind::Number => {
            let value = match token.number_value() {
                Some(value) => value,
                None => {
                    return Err(SyntaxError::InvalidNumber {
                        lexeme: token.lexeme,
                    })
                }
            };

            Ok(Expr::Value { token, value })
        }
        TokenKind::Identifier => Ok(Expr::Identifier { token }),
        _ => Err(SyntaxError::UnexpectedToken {
            lexeme: token.lexeme,
        }),
    }
}
