//! Format registry for token and tree serialization
//!
//! This module provides a pluggable registry of output formats. Each format implements the
//! `Formatter` trait and can be registered with `FormatRegistry`. A formatter handles either
//! token sequences or expression trees; handing it the other kind is a `FormatError::Unsupported`.

use crate::lox::ast::Expr;
use crate::lox::config::OutputConfig;
use crate::lox::token::Token;
use std::collections::HashMap;
use std::fmt;

/// What a formatter is asked to render
#[derive(Debug, Clone, Copy)]
pub enum Output<'a> {
    Tokens(&'a [Token]),
    Expr(&'a Expr),
}

impl Output<'_> {
    pub fn describe(&self) -> &'static str {
        match self {
            Output::Tokens(_) => "tokens",
            Output::Expr(_) => "expression",
        }
    }
}

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// The format does not render this kind of output
    Unsupported { format: String, output: &'static str },
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::Unsupported { format, output } => {
                write!(f, "Format '{format}' cannot render {output}")
            }
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}

/// Trait for output formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "token-text", "ast-sexp")
    fn name(&self) -> &str;

    /// Serialize tokens or a tree to this format
    fn serialize(&self, output: &Output) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Shorthand for the `Unsupported` error
    fn unsupported(&self, output: &Output) -> FormatError {
        FormatError::Unsupported {
            format: self.name().to_string(),
            output: output.describe(),
        }
    }
}

/// Registry of output formatters, looked up by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize using the named format
    pub fn serialize(&self, output: &Output, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(output)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        Self::with_json_style(true)
    }

    /// Create a registry with the built-in formatters, honouring the output settings
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_json_style(config.pretty_json)
    }

    fn with_json_style(pretty: bool) -> Self {
        let mut registry = Self::new();

        registry.register(super::TokenTextFormatter);
        registry.register(super::TokenJsonFormatter { pretty });
        registry.register(super::SexpFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::AstJsonFormatter { pretty });

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lox::ast::Literal;

    // Test formatter
    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, output: &Output) -> Result<String, FormatError> {
            match output {
                Output::Tokens(tokens) => Ok(format!("{} tokens", tokens.len())),
                Output::Expr(_) => Err(self.unsupported(output)),
            }
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formatters.len(), 0);
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert!(!registry.has("nonexistent"));
        assert_eq!(registry.get("test").map(|f| f.description()), Some("Test formatter"));
        assert_eq!(registry.list_formats(), vec!["test"]);
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        let tokens = vec![Token::eof(1)];
        assert_eq!(
            registry.serialize(&Output::Tokens(&tokens), "test"),
            Ok("1 tokens".to_string())
        );
    }

    #[test]
    fn test_registry_serialize_unsupported() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        let expr = Expr::Literal(Literal::Nil);
        assert_eq!(
            registry.serialize(&Output::Expr(&expr), "test"),
            Err(FormatError::Unsupported {
                format: "test".to_string(),
                output: "expression"
            })
        );
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        let tokens: Vec<Token> = vec![];

        match registry.serialize(&Output::Tokens(&tokens), "nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected FormatNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["ast-json", "ast-sexp", "ast-treeviz", "token-json", "token-text"]
        );
    }

    #[test]
    fn test_registry_replace_formatter() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);
        registry.register(TestFormatter);

        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::FormatNotFound("test".to_string());
        assert_eq!(format!("{err}"), "Format 'test' not found");

        let err = FormatError::Unsupported {
            format: "ast-sexp".to_string(),
            output: "tokens",
        };
        assert_eq!(format!("{err}"), "Format 'ast-sexp' cannot render tokens");

        let err = FormatError::SerializationError("error".to_string());
        assert_eq!(format!("{err}"), "Serialization error: error");
    }
}
