//! Plain token listing
//!
//! One line per token in the form `<KIND> <lexeme> <literal-or-null>`, ending with the
//! `EOF  null` line contributed by the EOF token itself.

use super::registry::{FormatError, Formatter, Output};
use crate::lox::token::Token;

pub fn to_token_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct TokenTextFormatter;

impl Formatter for TokenTextFormatter {
    fn name(&self) -> &str {
        "token-text"
    }

    fn serialize(&self, output: &Output) -> Result<String, FormatError> {
        match output {
            Output::Tokens(tokens) => Ok(to_token_text(tokens)),
            Output::Expr(_) => Err(self.unsupported(output)),
        }
    }

    fn description(&self) -> &str {
        "One line per token: KIND lexeme literal"
    }
}
