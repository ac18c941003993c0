//! Output format implementations for token streams and expression trees
//!
//! This module contains the format implementations for serializing:
//! - Token sequences (token-text, token-json)
//! - Expression trees (ast-sexp, ast-treeviz, ast-json)

pub mod json;
pub mod registry;
pub mod sexp;
pub mod text;
pub mod treeviz;

pub use json::{AstJsonFormatter, TokenJsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter, Output};
pub use sexp::SexpFormatter;
pub use text::{to_token_text, TokenTextFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
