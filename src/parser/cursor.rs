use crate::lexer::tokens::{Token, TokenKind};

/// A forward-only cursor over a token sequence.
///
/// Owns the sequence produced by the lexer and a position counter; parsing
/// functions read through it instead of sharing a mutable index. There is
/// no pushback: once a token is consumed the cursor never returns to it.
#[derive(Debug)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> TokenCursor {
        TokenCursor { tokens, pos: 0 }
    }

    /// Returns whether every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Returns the token `offset` positions ahead of the current one
    /// without consuming anything, or `None` past the end.
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Consumes and returns the current token, or `None` at the end.
    pub fn advance(&mut self) -> Option<&Token> {
        if self.is_at_end() {
            return None;
        }

        self.pos += 1;
        self.tokens.get(self.pos - 1)
    }

    /// Returns whether the current token's kind is one of `kinds`.
    /// Always false at the end.
    pub fn check(&self, kinds: &[TokenKind]) -> bool {
        match self.peek(0) {
            Some(token) => token.is_one_of(kinds),
            None => false,
        }
    }
}
