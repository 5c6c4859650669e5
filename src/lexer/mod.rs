//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts an expression
//! string into a flat sequence of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered regex pattern table
//! - Recognition of numbers, identifiers and operators
//! - Maximal munch for two-character operators (`**`, `<=`, `&&`, ...)
//! - Permissive skipping of whitespace and unrecognized characters

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
