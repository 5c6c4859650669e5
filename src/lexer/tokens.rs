use std::fmt::Display;

/// The closed set of lexical categories the scanner can produce.
///
/// This enumeration is the wire contract between the lexer and the parser:
/// every rule table is keyed by it, and third parties extending the grammar
/// register new rules against it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Identifier,

    OpenParen,
    CloseParen,

    Equals,    // ==
    Not,       // !
    NotEquals, // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Plus,
    Dash,
    Star,
    StarStar,
    Slash,
    Percent,

    Tilde,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One lexical unit, immutable once produced.
///
/// `lexeme` is always the exact non-empty source substring that was
/// consumed to produce this token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, lexeme: {} }}", self.kind, self.lexeme)
    }
}

impl Token {
    /// Returns whether the token's kind is one of the given kinds.
    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Decoded numeric payload, equal to the floating-point parse of the
    /// lexeme. `None` unless this is a `Number` token.
    pub fn number_value(&self) -> Option<f64> {
        if self.kind != TokenKind::Number {
            return None;
        }
        self.lexeme.parse().ok()
    }

    /// Identifier name, equal to the lexeme.
    pub fn name(&self) -> &str {
        &self.lexeme
    }
}
