//! Treeviz formatter for expression trees
//!
//! One line per node, with 2 white spaces of indentation per level of nesting:
//!
//!     Grouping
//!       Unary -
//!         Number 3.0

use super::registry::{FormatError, Formatter, Output};
use crate::lox::ast::{Expr, Literal};
use crate::lox::token::format_number;

pub fn to_treeviz_str(expr: &Expr) -> String {
    let mut lines = Vec::new();
    collect_lines(expr, 0, &mut lines);
    lines.join("\n")
}

fn collect_lines(expr: &Expr, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match expr {
        Expr::Literal(literal) => lines.push(format!("{}{}", indent, label(literal))),
        Expr::Grouping(inner) => {
            lines.push(format!("{}Grouping", indent));
            collect_lines(inner, depth + 1, lines);
        }
        Expr::Unary { operator, right } => {
            lines.push(format!("{}Unary {}", indent, operator.lexeme));
            collect_lines(right, depth + 1, lines);
        }
    }
}

fn label(literal: &Literal) -> String {
    match literal {
        Literal::Boolean(b) => format!("Boolean {}", b),
        Literal::Number(n) => format!("Number {}", format_number(*n)),
        Literal::String(s) => format!("String {:?}", s),
        Literal::Nil => "Nil".to_string(),
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "ast-treeviz"
    }

    fn serialize(&self, output: &Output) -> Result<String, FormatError> {
        match output {
            Output::Expr(expr) => Ok(to_treeviz_str(expr)),
            Output::Tokens(_) => Err(self.unsupported(output)),
        }
    }

    fn description(&self) -> &str {
        "One line per node, indented by depth"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lox::lexing::scan;
    use crate::lox::parsing::parse_expression;

    fn treeviz(source: &str) -> String {
        let tokens = scan(source).tokens;
        to_treeviz_str(&parse_expression(&tokens).unwrap())
    }

    #[test]
    fn test_nesting() {
        assert_eq!(treeviz("(-3)"), "Grouping\n  Unary -\n    Number 3.0");
    }

    #[test]
    fn test_leaves() {
        assert_eq!(treeviz("nil"), "Nil");
        assert_eq!(treeviz("true"), "Boolean true");
        assert_eq!(treeviz("\"a b\""), "String \"a b\"");
    }
}
