/// AST (Abstract Syntax Tree) module
/// Contains the expression tree produced by both parsing engines
///
/// Submodules:
/// - expressions: The expression node type and its symbolic rendering
pub mod expressions;
