//! Canonical parenthesized-prefix rendering of expression trees

use super::registry::{FormatError, Formatter, Output};
use crate::lox::ast::print;

pub struct SexpFormatter;

impl Formatter for SexpFormatter {
    fn name(&self) -> &str {
        "ast-sexp"
    }

    fn serialize(&self, output: &Output) -> Result<String, FormatError> {
        match output {
            Output::Expr(expr) => Ok(print(expr)),
            Output::Tokens(_) => Err(self.unsupported(output)),
        }
    }

    fn description(&self) -> &str {
        "Canonical prefix form, e.g. (group (- 3.0))"
    }
}
