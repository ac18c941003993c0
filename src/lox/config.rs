//! Configuration loader for the lox toolchain.
//!
//! `defaults/lox.default.toml` is embedded into the binary so that docs and runtime behavior
//! stay in sync. Callers layer user-specific files and CLI overrides on top of those defaults
//! via [`Loader`] before deserializing into [`LoxConfig`]. The configured format names are
//! checked against the built-in registry when the loader is built, so a typo or a tree format
//! named for token output is reported as a configuration error.

use crate::lox::ast::{Expr, Literal};
use crate::lox::formats::{FormatRegistry, Output};
use crate::lox::token::Token;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/lox.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoxConfig {
    pub output: OutputConfig,
}

/// Which registered formats the CLI renders with
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub token_format: String,
    pub ast_format: String,
    pub pretty_json: bool,
}

impl OutputConfig {
    /// Render a minimal sample with each configured format, so that unknown names and
    /// token/tree mix-ups surface before any source is read.
    pub fn check_formats(&self, registry: &FormatRegistry) -> Result<(), ConfigError> {
        let tokens = [Token::eof(1)];
        let expr = Expr::Literal(Literal::Nil);
        check_format(registry, "token_format", &self.token_format, &Output::Tokens(&tokens))?;
        check_format(registry, "ast_format", &self.ast_format, &Output::Expr(&expr))
    }
}

fn check_format(
    registry: &FormatRegistry,
    key: &str,
    name: &str,
    sample: &Output,
) -> Result<(), ConfigError> {
    registry
        .serialize(sample, name)
        .map(|_| ())
        .map_err(|err| ConfigError::Message(format!("output.{}: {}", key, err)))
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize the resulting configuration and check that both
    /// output formats exist and render the right kind of output.
    pub fn build(self) -> Result<LoxConfig, ConfigError> {
        let config: LoxConfig = self.builder.build()?.try_deserialize()?;
        config.output.check_formats(&FormatRegistry::with_defaults())?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LoxConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.token_format, "token-text");
        assert_eq!(config.output.ast_format, "ast-sexp");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.ast_format", "ast-json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.ast_format, "ast-json");
        assert_eq!(config.output.token_format, "token-text");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\npretty_json = false").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert!(!config.output.pretty_json);
        assert_eq!(config.output.ast_format, "ast-sexp");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/lox.toml")
            .build()
            .unwrap();
        assert_eq!(config.output.token_format, "token-text");
    }

    #[test]
    fn rejects_unknown_format_name() {
        let err = Loader::new()
            .set_override("output.token_format", "yaml")
            .expect("override to apply")
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "output.token_format: Format 'yaml' not found"
        );
    }

    #[test]
    fn rejects_format_for_the_wrong_output() {
        let err = Loader::new()
            .set_override("output.ast_format", "token-text")
            .expect("override to apply")
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "output.ast_format: Format 'token-text' cannot render expression"
        );
    }

    #[test]
    fn every_default_format_passes_the_check() {
        let registry = FormatRegistry::with_defaults();
        for (token_format, ast_format) in [
            ("token-text", "ast-sexp"),
            ("token-json", "ast-treeviz"),
            ("token-json", "ast-json"),
        ] {
            let output = OutputConfig {
                token_format: token_format.to_string(),
                ast_format: ast_format.to_string(),
                pretty_json: false,
            };
            assert!(output.check_formats(&registry).is_ok());
        }
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new().with_file("/nonexistent/lox.toml").build().is_err());
    }
}
