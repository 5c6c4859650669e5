//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the lexer implementation:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-lexeme tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's source text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
        }
    };
}

/// Creates a default lexer handler for tokens with a fixed lexeme.
///
/// Generates a handler function that pushes a token with the given kind
/// and advances the lexer position by the lexeme's length.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$lexeme` - The literal source text (also used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $lexeme:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            lexer.push(MK_TOKEN!($kind, String::from($lexeme)));
            lexer.advance_n($lexeme.len());
        }
    };
}
