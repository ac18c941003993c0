//! Raw token definitions for the lox scanner
//!
//! The tokens are defined using the logos derive macro. Whitespace and line comments are skipped
//! inside logos itself, and newlines bump the line counter kept in the lexer extras, so every
//! raw token comes out already tagged with the line it starts on.
//!
//! Raw tokens are not the public token model: identifiers are not yet split into keywords and
//! the non-ASCII catch-all still has to be turned into a scan error. See
//! [scan](crate::lox::lexing::scan) for that step.

use crate::lox::token::{keyword, LiteralValue, Token, TokenKind};
use logos::{Lexer, Logos, Skip};

/// Failures logos can report while matching
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawError {
    /// Nothing matched at the current position
    #[default]
    UnexpectedCharacter,
    /// A `"` with no closing quote before the end of the line or input
    UnterminatedString,
}

/// Raw lexemes recognised by logos. The extras hold the current 1-based line.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = usize)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"//[^\n]*")]
pub enum RawToken {
    #[token("\n", newline)]
    Newline,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,

    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,

    // Content between the quotes
    #[regex(r#""[^"\n]*"#, string)]
    Str(String),

    #[regex(r"[0-9]+", number)]
    Number(f64),

    // Keywords are resolved afterwards
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    // One whole character, so that errors never split a UTF-8 sequence
    #[regex(r"[^\x00-\x7F]")]
    NonAscii,
}

fn newline(lex: &mut Lexer<RawToken>) -> Skip {
    lex.extras += 1;
    Skip
}

/// The regex stops right before the closing quote, the newline, or the end of input.
fn string(lex: &mut Lexer<RawToken>) -> Result<String, RawError> {
    if !lex.remainder().starts_with('"') {
        return Err(RawError::UnterminatedString);
    }
    lex.bump(1);
    let slice = lex.slice();
    Ok(slice[1..slice.len() - 1].to_string())
}

/// Integer part comes from the regex; a fraction is taken only when a digit follows the dot,
/// so `123.` leaves the dot for the next token.
fn number(lex: &mut Lexer<RawToken>) -> Option<f64> {
    let rest = lex.remainder().as_bytes();
    if rest.first() == Some(&b'.') && rest.get(1).is_some_and(u8::is_ascii_digit) {
        let fraction = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + fraction);
    }
    lex.slice().parse().ok()
}

impl RawToken {
    /// Convert into a public token. Returns `None` for lexemes that are errors, not tokens.
    pub fn into_token(self, lexeme: &str, line: usize) -> Option<Token> {
        let kind = match self {
            RawToken::Newline | RawToken::NonAscii => return None,
            RawToken::Str(content) => {
                return Some(Token::with_literal(
                    TokenKind::String,
                    lexeme,
                    LiteralValue::Text(content),
                    line,
                ))
            }
            RawToken::Number(value) => {
                return Some(Token::with_literal(
                    TokenKind::Number,
                    lexeme,
                    LiteralValue::Number(value),
                    line,
                ))
            }
            RawToken::Identifier => keyword(lexeme).unwrap_or(TokenKind::Identifier),
            RawToken::LeftParen => TokenKind::LeftParen,
            RawToken::RightParen => TokenKind::RightParen,
            RawToken::LeftBrace => TokenKind::LeftBrace,
            RawToken::RightBrace => TokenKind::RightBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Star => TokenKind::Star,
            RawToken::Bang => TokenKind::Bang,
            RawToken::BangEqual => TokenKind::BangEqual,
            RawToken::Equal => TokenKind::Equal,
            RawToken::EqualEqual => TokenKind::EqualEqual,
            RawToken::Greater => TokenKind::Greater,
            RawToken::GreaterEqual => TokenKind::GreaterEqual,
            RawToken::Less => TokenKind::Less,
            RawToken::LessEqual => TokenKind::LessEqual,
        };
        Some(Token::new(kind, lexeme, line))
    }
}
