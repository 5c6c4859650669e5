//! Error types for expression parsing.
//!
//! This module defines the error type raised while turning a source string
//! into an expression tree. Scanning itself never fails (unrecognized
//! characters are discarded by policy); every error here is produced by the
//! parsing stage and carries the offending lexeme where one exists.

pub mod errors;
