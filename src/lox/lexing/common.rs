//! Scanner output and error types

use crate::lox::token::Token;
use std::fmt;

/// What went wrong at a scan error site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// A character outside the language; scanning resumes right after it
    UnexpectedCharacter(char),
    /// A string with no closing quote before the end of its line or of the input
    UnterminatedString,
}

/// A recoverable scan error, reported at the line where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, line: usize) -> Self {
        ScanError { kind, line }
    }

    /// The message without the `[line N] Error:` prefix
    pub fn message(&self) -> String {
        match &self.kind {
            ScanErrorKind::UnexpectedCharacter(c) => format!("Unexpected character: {}", c),
            ScanErrorKind::UnterminatedString => "Unterminated string.".to_string(),
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message())
    }
}

impl std::error::Error for ScanError {}

/// Everything a scan produces: the token sequence (always EOF-terminated) and the errors met
/// along the way, both in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl ScanOutput {
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Split into `(tokens, had_error)`
    pub fn into_parts(self) -> (Vec<Token>, bool) {
        let had_error = self.had_error();
        (self.tokens, had_error)
    }
}
