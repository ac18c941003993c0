//! Parser
//!
//! Recursive descent over the token sequence produced by [scan](crate::lox::lexing::scan).
//! The parser never looks at source text: everything it needs (kinds, lexemes, literal values
//! and lines) is on the tokens.
//!
//! Only the unary level of the expression grammar and below is implemented:
//!
//!     expression → unary
//!     unary      → ( "!" | "-" ) unary | primary
//!     primary    → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
//!
//! Errors are fail-fast: the first violation aborts the parse and is returned as a
//! [ParseError]. There is no synchronisation or multi-error recovery.
//!
//! Prefix operators are read iteratively and only groups recurse. Nesting deeper than
//! [MAX_NESTING] unary or group levels is rejected with [ParseError::NestingTooDeep] instead of
//! exhausting the stack.

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{Parser, MAX_NESTING};

use crate::lox::ast::Expr;
use crate::lox::token::Token;

/// Parse a single expression from the start of `tokens`
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse_expression()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lox::ast::print;
    use crate::lox::lexing::scan;

    #[test]
    fn test_scan_parse_print() {
        let tokens = scan("(-3)").tokens;
        assert_eq!(print(&parse_expression(&tokens).unwrap()), "(group (- 3.0))");
    }

    #[test]
    fn test_error_is_returned_not_printed() {
        let tokens = scan("(1").tokens;
        let err = parse_expression(&tokens).unwrap_err();
        assert_eq!(err.to_string(), "[line 1] Error at end: Expect ')' after expression.");
    }
}
