//! Scanner
//!
//! This module turns lox source text into the token sequence consumed by the parser.
//!
//! Structure:
//!     Matching is done by the logos lexer in [raw]. Single-character punctuation, the
//!     one/two-character operators (maximal munch), strings, numbers and identifiers are all
//!     logos patterns; whitespace and `//` comments are skipped there too, and newlines bump the
//!     line counter. This module then walks the raw stream once:
//!     - identifiers are resolved against the keyword table
//!     - STRING and NUMBER tokens get their literal values
//!     - anything logos could not match becomes a [ScanError] and scanning carries on
//!     - a single EOF token is appended at the end
//!
//! Error Recovery
//!
//!     The scanner never stops on bad input. An unexpected character is reported and skipped; an
//!     unterminated string is reported at the line it started on and the scan resumes right
//!     after it, at the newline or end of input that cut it short. Tokens scanned before and
//!     after an error are kept.

pub mod common;
pub mod raw;

pub use common::{ScanError, ScanErrorKind, ScanOutput};
pub use raw::{RawError, RawToken};

use crate::lox::token::Token;
use logos::Logos;
use std::io::{self, Read};

/// Scan source text into tokens plus the recoverable errors met along the way
pub fn scan(source: &str) -> ScanOutput {
    let mut lexer = RawToken::lexer_with_extras(source, 1);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras;
        let lexeme = lexer.slice();
        let error = match result {
            Ok(raw) => match raw.into_token(lexeme, line) {
                Some(token) => {
                    tokens.push(token);
                    continue;
                }
                None => unexpected(lexeme),
            },
            Err(RawError::UnexpectedCharacter) => unexpected(lexeme),
            Err(RawError::UnterminatedString) => ScanErrorKind::UnterminatedString,
        };
        errors.push(ScanError::new(error, line));
    }

    tokens.push(Token::eof(lexer.extras));
    ScanOutput { tokens, errors }
}

/// Scan raw bytes. Invalid UTF-8 is replaced with U+FFFD and reported as unexpected characters.
pub fn scan_bytes(source: &[u8]) -> ScanOutput {
    scan(&String::from_utf8_lossy(source))
}

/// Read the whole input before scanning, so no token is ever split across reads
pub fn scan_reader<R: Read>(mut reader: R) -> io::Result<ScanOutput> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(scan_bytes(&buffer))
}

fn unexpected(lexeme: &str) -> ScanErrorKind {
    ScanErrorKind::UnexpectedCharacter(lexeme.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lox::token::{LiteralValue, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_single_char_tokens() {
        use TokenKind::*;
        assert_eq!(
            kinds("(){},.+-*/;"),
            vec![
                LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Plus, Minus, Star, Slash,
                Semicolon, Eof
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let output = scan("");
        assert_eq!(output.tokens, vec![Token::eof(1)]);
        assert!(!output.had_error());
    }

    #[test]
    fn test_string_literal() {
        let output = scan("\"abc\"");
        assert_eq!(output.tokens.len(), 2);
        assert_eq!(output.tokens[0].kind, TokenKind::String);
        assert_eq!(output.tokens[0].lexeme, "\"abc\"");
        assert_eq!(
            output.tokens[0].literal,
            Some(LiteralValue::Text("abc".to_string()))
        );
        assert!(output.tokens[1].is_eof());
    }

    #[test]
    fn test_unterminated_string() {
        let output = scan("\"abc");
        assert_eq!(output.tokens, vec![Token::eof(1)]);
        assert_eq!(
            output.errors,
            vec![ScanError::new(ScanErrorKind::UnterminatedString, 1)]
        );
    }

    #[test]
    fn test_unterminated_string_resumes_on_next_line() {
        let output = scan("\"open\n\"closed\"");
        assert_eq!(
            output.errors,
            vec![ScanError::new(ScanErrorKind::UnterminatedString, 1)]
        );
        assert_eq!(output.tokens[0].kind, TokenKind::String);
        assert_eq!(output.tokens[0].line, 2);
    }

    #[test]
    fn test_unexpected_character_keeps_other_tokens() {
        let output = scan(",.$(#");
        assert_eq!(
            output.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Comma, TokenKind::Dot, TokenKind::LeftParen, TokenKind::Eof]
        );
        assert_eq!(
            output.errors,
            vec![
                ScanError::new(ScanErrorKind::UnexpectedCharacter('$'), 1),
                ScanError::new(ScanErrorKind::UnexpectedCharacter('#'), 1),
            ]
        );
    }

    #[test]
    fn test_non_ascii_is_one_error_per_character() {
        let output = scan("é(");
        assert_eq!(
            output.errors,
            vec![ScanError::new(ScanErrorKind::UnexpectedCharacter('é'), 1)]
        );
        assert_eq!(output.tokens[0].kind, TokenKind::LeftParen);
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let output = scan_bytes(b"(\xff)");
        assert_eq!(
            output.errors,
            vec![ScanError::new(
                ScanErrorKind::UnexpectedCharacter(char::REPLACEMENT_CHARACTER),
                1
            )]
        );
        assert_eq!(output.tokens.len(), 3);
    }

    #[test]
    fn test_scan_reader() {
        let output = scan_reader("var x\n= 1;".as_bytes()).unwrap();
        assert_eq!(output.tokens.len(), 6);
        assert_eq!(output.tokens[2].line, 2);
        assert_eq!(output.tokens[5].line, 2);
    }

    #[test]
    fn test_eof_line_counts_trailing_newline() {
        let output = scan("1\n2\n");
        assert_eq!(output.tokens.last().unwrap().line, 3);
    }

    #[test]
    fn test_comment_advances_line() {
        let output = scan("// comment\n(");
        assert_eq!(output.tokens[0].kind, TokenKind::LeftParen);
        assert_eq!(output.tokens[0].line, 2);
    }
}
