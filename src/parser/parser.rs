//! The table-driven Pratt parser.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser holds the token cursor plus the rule tables the engine
//! dispatches through:
//!
//! - NUD (null denotation) handlers for tokens that can start an expression
//! - LED (left denotation) rules, each carrying a binding power and an
//!   associativity, for tokens that can extend one
//!
//! All state is created fresh per `parse` call; nothing persists across
//! calls.

use crate::{
    ast::expressions::Expr,
    errors::errors::SyntaxError,
    lexer::{
        lexer::scan,
        tokens::{Token, TokenKind},
    },
};

use super::{
    cursor::TokenCursor,
    expr::parse_expr,
    lookups::{
        create_token_lookups, Associativity, BindingPower, InfixRule, LedHandler, LedLookup,
        NudHandler, NudLookup,
    },
};

/// Parsing state for one `parse` call: the token cursor and the rule
/// tables expression parsing dispatches through.
pub struct Parser {
    cursor: TokenCursor,
    nud_lookup: NudLookup,
    led_lookup: LedLookup,
}

impl Parser {
    /// Creates a parser over a token sequence with empty rule tables.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens),
            nud_lookup: NudLookup::new(),
            led_lookup: LedLookup::new(),
        }
    }

    /// Returns the kind of the current token, or `None` at the end.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.cursor.peek(0).map(|token| token.kind)
    }

    /// Returns the lexeme of the current token for error reporting.
    /// Empty at the end of input.
    pub fn peek_lexeme(&self) -> String {
        self.cursor
            .peek(0)
            .map(|token| token.lexeme.clone())
            .unwrap_or_default()
    }

    /// Consumes and returns the current token; running out of tokens is a
    /// syntax error.
    pub fn advance(&mut self) -> Result<Token, SyntaxError> {
        self.cursor
            .advance()
            .cloned()
            .ok_or(SyntaxError::UnexpectedEndOfInput)
    }

    /// Consumes the current token without inspecting it. Does nothing at
    /// the end of input.
    pub fn discard(&mut self) {
        self.cursor.advance();
    }

    /// Looks up the prefix rule registered for a token kind.
    pub fn nud_handler(&self, kind: TokenKind) -> Option<NudHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    /// Looks up the infix rule registered for a token kind.
    pub fn infix_rule(&self, kind: TokenKind) -> Option<InfixRule> {
        self.led_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) rule for a token kind.
    pub fn led(
        &mut self,
        kind: TokenKind,
        bp: BindingPower,
        assoc: Associativity,
        led_fn: LedHandler,
    ) {
        self.led_lookup.insert(
            kind,
            InfixRule {
                bp,
                assoc,
                handler: led_fn,
            },
        );
    }

    /// Registers a null denotation (prefix) handler for a token kind.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NudHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }
}

/// Parses a source string with the Pratt engine.
///
/// Scans the source, registers the rule tables and parses one expression
/// at the default binding power. Input left over after the expression is
/// complete is ignored.
pub fn parse(source: &str) -> Result<Expr, SyntaxError> {
    let tokens = scan(source);

    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    parse_expr(&mut parser, BindingPower::DEFAULT)
}
