use std::fmt::Display;

use crate::lexer::tokens::Token;

/// An expression tree node.
///
/// The closed set of variants an expression is built from. Every node
/// exclusively owns its sub-expressions, and operator nodes retain the
/// original operator token so a consumer can recover the exact source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal. `value` is the decoded payload of `token`.
    Value { token: Token, value: f64 },
    /// A name reference.
    Identifier { token: Token },
    /// A prefix operator applied to one sub-expression.
    Unary { operator: Token, operand: Box<Expr> },
    /// An infix operator applied to two sub-expressions.
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn unary(operator: Token, operand: Expr) -> Expr {
        Expr::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

/// Renders the tree as a symbolic expression: leaves print their lexeme,
/// operator nodes print `(op operand...)` with the operator first.
/// `1 + 2 * 3` renders as `(+ 1 (* 2 3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Value { token, .. } => write!(f, "{}", token.lexeme),
            Expr::Identifier { token } => write!(f, "{}", token.lexeme),
            Expr::Unary { operator, operand } => {
                write!(f, "({} {})", operator.lexeme, operand)
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.lexeme, left, right),
        }
    }
}
