//! The token value produced by the scanner

use super::kind::TokenKind;
use serde::Serialize;
use std::fmt;

/// Literal payload carried by STRING and NUMBER tokens
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// Raw string content, quotes stripped
    Text(String),
    Number(f64),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Text(text) => f.write_str(text),
            LiteralValue::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

/// A single lexeme with its kind, optional literal value and 1-based line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<LiteralValue>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: LiteralValue,
        line: usize,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
            line,
        }
    }

    /// The synthetic end-of-input marker
    pub fn eof(line: usize) -> Self {
        Token::new(TokenKind::Eof, "", line)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders `<KIND> <lexeme> <literal-or-null>`, e.g. `NUMBER 42 42.0` or `EOF  null`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{}", literal),
            None => f.write_str("null"),
        }
    }
}

/// Canonical decimal form for numbers: shortest round-trip digits, and always at least one
/// fractional digit (`3` renders as `3.0`).
pub fn format_number(n: f64) -> String {
    let text = n.to_string();
    if n.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}
