use std::collections::HashMap;

use crate::{ast::expressions::Expr, errors::errors::SyntaxError, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator precedence, higher binds tighter.
///
/// Plain integers so that associativity can be expressed as arithmetic on
/// the right-hand-side threshold. Levels are spaced apart to leave room for
/// new operators between them.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct BindingPower(pub u8);

impl BindingPower {
    pub const DEFAULT: BindingPower = BindingPower(0);
    pub const LOGICAL_OR: BindingPower = BindingPower(10);
    pub const LOGICAL_AND: BindingPower = BindingPower(20);
    pub const EQUALITY: BindingPower = BindingPower(30);
    pub const RELATIONAL: BindingPower = BindingPower(40);
    pub const ADDITIVE: BindingPower = BindingPower(50);
    pub const MULTIPLICATIVE: BindingPower = BindingPower(60);
    pub const EXPONENT: BindingPower = BindingPower(70);
}

/// Whether a chain of same-precedence operators groups left-to-right or
/// right-to-left.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

pub type NudHandler = fn(&mut Parser) -> Result<Expr, SyntaxError>;
pub type LedHandler =
    fn(&mut Parser, Expr, BindingPower, Associativity) -> Result<Expr, SyntaxError>;

/// An infix rule: precedence, associativity and the construction function
/// that extends an already-parsed left expression.
#[derive(Clone, Copy)]
pub struct InfixRule {
    pub bp: BindingPower,
    pub assoc: Associativity,
    pub handler: LedHandler,
}

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.led(TokenKind::Or, BindingPower::LOGICAL_OR, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::And, BindingPower::LOGICAL_AND, Associativity::Left, parse_binary_expr);

    // Equality
    parser.led(TokenKind::Equals, BindingPower::EQUALITY, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::EQUALITY, Associativity::Left, parse_binary_expr);

    // Relational
    parser.led(TokenKind::Less, BindingPower::RELATIONAL, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::RELATIONAL, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::RELATIONAL, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::RELATIONAL, Associativity::Left, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::ADDITIVE, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::ADDITIVE, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::MULTIPLICATIVE, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::MULTIPLICATIVE, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::MULTIPLICATIVE, Associativity::Left, parse_binary_expr);

    // Exponentiation, the one right-associative level
    parser.led(TokenKind::StarStar, BindingPower::EXPONENT, Associativity::Right, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Prefix operators
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Tilde, parse_prefix_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NudLookup = HashMap<TokenKind, NudHandler>;
pub type LedLookup = HashMap<TokenKind, InfixRule>;
