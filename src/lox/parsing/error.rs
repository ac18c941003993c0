//! Syntax errors raised by the parser

use std::fmt;

/// The first grammar violation found; parsing stops there
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that cannot start a primary expression
    UnsupportedPrimary { line: usize, lexeme: String },
    /// A group was not closed. `found` is the offending lexeme, or `None` at end of input.
    MissingClosingParen { line: usize, found: Option<String> },
    /// The tokens ran out where an expression was required
    UnexpectedEof { line: usize },
    /// `lexeme` opened one more unary or group level than the parser allows
    NestingTooDeep { line: usize, lexeme: String },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnsupportedPrimary { line, .. }
            | ParseError::MissingClosingParen { line, .. }
            | ParseError::UnexpectedEof { line }
            | ParseError::NestingTooDeep { line, .. } => *line,
        }
    }

    /// The message without location
    pub fn message(&self) -> &'static str {
        match self {
            ParseError::UnsupportedPrimary { .. } | ParseError::UnexpectedEof { .. } => {
                "Expect expression."
            }
            ParseError::MissingClosingParen { .. } => "Expect ')' after expression.",
            ParseError::NestingTooDeep { .. } => "Expression nested too deeply.",
        }
    }

    fn location(&self) -> String {
        match self {
            ParseError::UnsupportedPrimary { lexeme, .. }
            | ParseError::NestingTooDeep { lexeme, .. }
            | ParseError::MissingClosingParen {
                found: Some(lexeme),
                ..
            } => format!(" at '{}'", lexeme),
            ParseError::MissingClosingParen { found: None, .. }
            | ParseError::UnexpectedEof { .. } => " at end".to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line(),
            self.location(),
            self.message()
        )
    }
}

impl std::error::Error for ParseError {}
