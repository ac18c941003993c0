//! Pipeline executor used by the `lox` binary
//!
//! Chains scan → parse → format for one source text, using the formats named in the
//! configuration, and maps every failure onto a [PipelineError] with a process exit status:
//! 65 for malformed input (scan or syntax errors) and 1 for everything else.

use crate::lox::config::{ConfigError, LoxConfig};
use crate::lox::formats::{FormatError, FormatRegistry, Output};
use crate::lox::lexing::{scan, scan_reader, ScanError, ScanOutput};
use crate::lox::parsing::{parse_expression, ParseError};
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

/// Exit status for malformed input
pub const EXIT_DATA_ERROR: i32 = 65;
/// Exit status for every other failure
pub const EXIT_FAILURE: i32 = 1;

/// Errors during pipeline execution
#[derive(Debug)]
pub enum PipelineError {
    /// The source could not be read
    Io(io::Error),
    /// The scan reported errors; all of them, in source order
    Scan(Vec<ScanError>),
    /// The first syntax error
    Parse(ParseError),
    Format(FormatError),
    Config(ConfigError),
}

impl PipelineError {
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Scan(_) | PipelineError::Parse(_) => EXIT_DATA_ERROR,
            PipelineError::Io(_) | PipelineError::Format(_) | PipelineError::Config(_) => {
                EXIT_FAILURE
            }
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Io(err) => write!(f, "Error reading file: {}", err),
            PipelineError::Scan(errors) => {
                let lines: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                f.write_str(&lines.join("\n"))
            }
            PipelineError::Parse(err) => write!(f, "{}", err),
            PipelineError::Format(err) => write!(f, "{}", err),
            PipelineError::Config(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<io::Error> for PipelineError {
    fn from(err: io::Error) -> Self {
        PipelineError::Io(err)
    }
}

impl From<ParseError> for PipelineError {
    fn from(err: ParseError) -> Self {
        PipelineError::Parse(err)
    }
}

impl From<FormatError> for PipelineError {
    fn from(err: FormatError) -> Self {
        PipelineError::Format(err)
    }
}

impl From<ConfigError> for PipelineError {
    fn from(err: ConfigError) -> Self {
        PipelineError::Config(err)
    }
}

/// Result of tokenizing: the rendered tokens are produced even when the scan had errors
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizeReport {
    pub rendered: String,
    pub errors: Vec<ScanError>,
}

impl TokenizeReport {
    pub fn exit_code(&self) -> i32 {
        if self.errors.is_empty() {
            0
        } else {
            EXIT_DATA_ERROR
        }
    }
}

fn scan_file(path: impl AsRef<Path>) -> Result<ScanOutput, PipelineError> {
    let file = File::open(path)?;
    Ok(scan_reader(file)?)
}

/// Runs the scan/parse stages and renders their output
pub struct PipelineExecutor {
    config: LoxConfig,
    registry: FormatRegistry,
}

impl PipelineExecutor {
    /// Create executor with the built-in formats, honouring the output settings
    pub fn new(config: LoxConfig) -> Self {
        let registry = FormatRegistry::from_config(&config.output);
        Self { config, registry }
    }

    /// Create executor with custom registry
    pub fn with_registry(config: LoxConfig, registry: FormatRegistry) -> Self {
        Self { config, registry }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Scan and render the tokens with the configured token format
    pub fn tokenize(&self, source: &str) -> Result<TokenizeReport, PipelineError> {
        self.render_tokens(scan(source))
    }

    /// [tokenize](Self::tokenize) a file. Invalid UTF-8 is reported as unexpected characters.
    pub fn tokenize_file(&self, path: impl AsRef<Path>) -> Result<TokenizeReport, PipelineError> {
        self.render_tokens(scan_file(path)?)
    }

    /// Scan, parse one expression and render it with the configured tree format.
    /// Scan errors stop the pipeline before parsing.
    pub fn parse(&self, source: &str) -> Result<String, PipelineError> {
        self.render_tree(scan(source))
    }

    /// [parse](Self::parse) a file
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<String, PipelineError> {
        self.render_tree(scan_file(path)?)
    }

    fn render_tokens(&self, output: ScanOutput) -> Result<TokenizeReport, PipelineError> {
        let rendered = self.registry.serialize(
            &Output::Tokens(&output.tokens),
            &self.config.output.token_format,
        )?;
        Ok(TokenizeReport {
            rendered,
            errors: output.errors,
        })
    }

    fn render_tree(&self, output: ScanOutput) -> Result<String, PipelineError> {
        if output.had_error() {
            return Err(PipelineError::Scan(output.errors));
        }
        let expr = parse_expression(&output.tokens)?;
        let rendered = self
            .registry
            .serialize(&Output::Expr(&expr), &self.config.output.ast_format)?;
        Ok(rendered)
    }

    /// Registered formats as `(name, description)` pairs, sorted by name
    pub fn list_formats(&self) -> Vec<(String, String)> {
        self.registry
            .list_formats()
            .into_iter()
            .map(|name| {
                let description = self
                    .registry
                    .get(&name)
                    .map(|f| f.description().to_string())
                    .unwrap_or_default();
                (name, description)
            })
            .collect()
    }
}
