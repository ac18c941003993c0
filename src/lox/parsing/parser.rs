// expression     → unary ;
// unary          → ( "!" | "-" ) unary | primary ;
// primary        → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")" ;

use super::error::ParseError;
use crate::lox::ast::{Expr, Literal};
use crate::lox::token::{LiteralValue, Token, TokenKind};

/// Stands in for the missing EOF of an empty token slice
static END: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    literal: None,
    line: 1,
};

/// Deepest chain of unary operators and groups one expression may nest
pub const MAX_NESTING: usize = 256;

/// Recursive descent over a borrowed token sequence, with one token of lookahead.
///
/// The cursor only moves forward and stops on EOF, so every rule terminates. A run of prefix
/// operators is read in a loop; only groups recurse, and nesting of either kind is capped at
/// [MAX_NESTING], which keeps the tree shallow enough for the recursive printers.
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parse one expression from the current position
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.depth = 0;
        self.expression()
    }

    /// Tokens left before EOF
    pub fn remaining(&self) -> usize {
        self.tokens
            .iter()
            .skip(self.current)
            .take_while(|t| !t.is_eof())
            .count()
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        self.unary()
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let mut operators = Vec::new();
        while let Some(operator) = self.match_kinds(&[TokenKind::Bang, TokenKind::Minus]) {
            self.nest(operator)?;
            operators.push(operator);
        }

        let operand = self.primary();
        self.depth -= operators.len();

        // Innermost operator is the last one read
        let mut expr = operand?;
        for operator in operators.into_iter().rev() {
            expr = Expr::unary(operator.clone(), expr);
        }
        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        if let Some(paren) = self.match_kinds(&[TokenKind::LeftParen]) {
            self.nest(paren)?;
            let expr = self.expression()?;
            self.depth -= 1;
            self.consume_closing_paren()?;
            return Ok(Expr::grouping(expr));
        }

        let token = self.peek();
        let literal = match (token.kind, &token.literal) {
            (TokenKind::False, _) => Literal::Boolean(false),
            (TokenKind::True, _) => Literal::Boolean(true),
            (TokenKind::Nil, _) => Literal::Nil,
            (TokenKind::Number, Some(LiteralValue::Number(n))) => Literal::Number(*n),
            (TokenKind::String, Some(LiteralValue::Text(s))) => Literal::String(s.clone()),
            (TokenKind::Eof, _) => return Err(ParseError::UnexpectedEof { line: token.line }),
            _ => {
                return Err(ParseError::UnsupportedPrimary {
                    line: token.line,
                    lexeme: token.lexeme.clone(),
                })
            }
        };
        self.advance();
        Ok(Expr::Literal(literal))
    }

    fn consume_closing_paren(&mut self) -> Result<&'a Token, ParseError> {
        if let Some(token) = self.match_kinds(&[TokenKind::RightParen]) {
            return Ok(token);
        }
        let token = self.peek();
        Err(ParseError::MissingClosingParen {
            line: token.line,
            found: (!token.is_eof()).then(|| token.lexeme.clone()),
        })
    }

    /// Account for one more level of nesting opened by `token`
    fn nest(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep {
                line: token.line,
                lexeme: token.lexeme.clone(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Consume the current token if it has one of `kinds`
    fn match_kinds(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        if kinds.iter().any(|kind| self.check(*kind)) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        let token = self.peek();
        !token.is_eof() && token.kind == kind
    }

    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !token.is_eof() {
            self.current += 1;
        }
        token
    }

    fn peek(&self) -> &'a Token {
        self.tokens.get(self.current).unwrap_or(&END)
    }
}
