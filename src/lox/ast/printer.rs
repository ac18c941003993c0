//! Canonical parenthesized-prefix printer
//!
//! Each tree shape has exactly one rendering:
//!
//! | node            | output                  |
//! |-----------------|-------------------------|
//! | `Boolean(b)`    | `true` / `false`        |
//! | `Nil`           | `nil`                   |
//! | `Number(n)`     | `3.0`, `123.45`         |
//! | `String(s)`     | raw content, unquoted   |
//! | `Grouping(e)`   | `(group e)`             |
//! | `Unary(op, e)`  | `(op e)`                |

use super::{Expr, Literal};
use crate::lox::token::format_number;

/// Render an expression tree. Pure: the same tree always yields the same string.
pub fn print(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(expr, &mut out);
    out
}

fn write_expr(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Literal(literal) => write_literal(literal, out),
        Expr::Grouping(inner) => {
            out.push_str("(group ");
            write_expr(inner, out);
            out.push(')');
        }
        Expr::Unary { operator, right } => {
            out.push('(');
            out.push_str(&operator.lexeme);
            out.push(' ');
            write_expr(right, out);
            out.push(')');
        }
    }
}

fn write_literal(literal: &Literal, out: &mut String) {
    match literal {
        Literal::Boolean(true) => out.push_str("true"),
        Literal::Boolean(false) => out.push_str("false"),
        Literal::Nil => out.push_str("nil"),
        Literal::Number(n) => out.push_str(&format_number(*n)),
        Literal::String(s) => out.push_str(s),
    }
}
