//! JSON renderings of token sequences and expression trees, via serde_json

use super::registry::{FormatError, Formatter, Output};
use serde::Serialize;

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, FormatError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Array of `{kind, lexeme, literal, line}` objects
pub struct TokenJsonFormatter {
    pub pretty: bool,
}

impl Formatter for TokenJsonFormatter {
    fn name(&self) -> &str {
        "token-json"
    }

    fn serialize(&self, output: &Output) -> Result<String, FormatError> {
        match output {
            Output::Tokens(tokens) => to_json(*tokens, self.pretty),
            Output::Expr(_) => Err(self.unsupported(output)),
        }
    }

    fn description(&self) -> &str {
        "Tokens as a JSON array"
    }
}

/// Externally tagged tree, e.g. `{"grouping": {"literal": {"number": 1.0}}}`
pub struct AstJsonFormatter {
    pub pretty: bool,
}

impl Formatter for AstJsonFormatter {
    fn name(&self) -> &str {
        "ast-json"
    }

    fn serialize(&self, output: &Output) -> Result<String, FormatError> {
        match output {
            Output::Expr(expr) => to_json(*expr, self.pretty),
            Output::Tokens(_) => Err(self.unsupported(output)),
        }
    }

    fn description(&self) -> &str {
        "Expression tree as JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lox::lexing::scan;
    use crate::lox::parsing::parse_expression;

    #[test]
    fn test_compact_tokens() {
        let tokens = scan("(").tokens;
        let json = TokenJsonFormatter { pretty: false }
            .serialize(&Output::Tokens(&tokens))
            .unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"LEFT_PAREN","lexeme":"(","literal":null,"line":1},{"kind":"EOF","lexeme":"","literal":null,"line":1}]"#
        );
    }

    #[test]
    fn test_pretty_tree_parses_back() {
        let tokens = scan("!\"yes\"").tokens;
        let expr = parse_expression(&tokens).unwrap();
        let json = AstJsonFormatter { pretty: true }
            .serialize(&Output::Expr(&expr))
            .unwrap();
        assert!(json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["unary"]["operator"]["kind"], "BANG");
        assert_eq!(value["unary"]["right"]["literal"]["string"], "yes");
    }

    #[test]
    fn test_wrong_output_kind() {
        let tokens = scan("1").tokens;
        assert!(matches!(
            AstJsonFormatter { pretty: false }.serialize(&Output::Tokens(&tokens)),
            Err(FormatError::Unsupported { .. })
        ));
    }
}
