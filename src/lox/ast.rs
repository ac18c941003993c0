//! Expression tree
//!
//!     The parser builds a strict tree of [Expr] nodes: every child is owned through a `Box`, so
//!     there is no sharing and no cycles. Only the lowest grammar levels exist (literals,
//!     parenthesized groups and unary operators); adding a node kind means updating the
//!     printer's exhaustive match in [printer].

pub mod printer;

pub use printer::print;

use crate::lox::token::Token;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Literal(Literal),
    /// A parenthesized sub-expression
    Grouping(Box<Expr>),
    /// `!` or `-` applied to one operand
    Unary { operator: Token, right: Box<Expr> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Boolean(bool),
    Number(f64),
    String(String),
    Nil,
}

impl Expr {
    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Expr::Literal(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lox::token::TokenKind;

    #[test]
    fn test_constructors_box_children() {
        let expr = Expr::grouping(Expr::unary(
            Token::new(TokenKind::Minus, "-", 1),
            Literal::Number(3.0).into(),
        ));
        match expr {
            Expr::Grouping(inner) => assert!(matches!(*inner, Expr::Unary { .. })),
            other => panic!("Expected grouping, got {:?}", other),
        }
    }

    #[test]
    fn test_serialize_tree() {
        let expr = Expr::grouping(Literal::Boolean(true).into());
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json, serde_json::json!({"grouping": {"literal": {"boolean": true}}}));

        let nil = serde_json::to_value(Expr::from(Literal::Nil)).unwrap();
        assert_eq!(nil, serde_json::json!({"literal": "nil"}));
    }
}
