//! Parsing module for building the expression tree.
//!
//! Two engines accept the identical grammar and produce structurally
//! identical trees:
//!
//! - A Pratt parser (`parser` + `expr` + `lookups`): a precedence-climbing
//!   engine driven by per-token-kind rule tables. NUD (null denotation)
//!   handlers start an expression, LED (left denotation) handlers extend
//!   one, and a numeric binding power threaded through recursive calls
//!   encodes precedence and associativity. Adding an operator is one table
//!   entry, not a new grammar function.
//! - A recursive-descent parser (`descent`): one function per precedence
//!   level, kept as an independent cross-check of the rule tables.
//!
//! Both consume tokens through the forward-only `TokenCursor`.

pub mod cursor;
pub mod descent;
pub mod expr;
pub mod lookups;
pub mod parser;
