#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use ast::expressions::Expr;
pub use errors::errors::SyntaxError;
pub use lexer::lexer::scan;
pub use lexer::tokens::{Token, TokenKind};

/// Parses a source string into an expression tree.
///
/// This is the crate's public entry point. The source is scanned into a
/// token sequence and handed to the table-driven Pratt parser; the result
/// is either a complete [`Expr`] or the first [`SyntaxError`] encountered.
///
/// Each call allocates its own token sequence and AST, so independent
/// calls may run on separate threads without coordination. Recursion depth
/// is bounded by the nesting depth of the source expression; pathologically
/// deep grouping or unary chains can exhaust the call stack.
///
/// # Example
///
/// ```
/// let expr = exparse::parse("1 + 2 * 3").unwrap();
/// assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
/// ```
pub fn parse(source: &str) -> Result<Expr, SyntaxError> {
    parser::parser::parse(source)
}
