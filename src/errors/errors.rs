use thiserror::Error;

/// The single error type of the crate.
///
/// All variants are unrecoverable for the current `parse` call: the parser
/// stops at the first failure and propagates it to the caller without
/// producing a partial tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A token appeared where no expression can start, or where none was
    /// allowed.
    #[error("unexpected token: {lexeme:?}")]
    UnexpectedToken { lexeme: String },
    /// The token sequence ran out while an expression was still expected.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A numeric token whose lexeme does not decode to a float.
    #[error("invalid number literal: {lexeme:?}")]
    InvalidNumber { lexeme: String },
}
