//! # lox
//!
//! Scanner and expression parser for the lox scripting language.
//!
//! File Layout
//!
//! Source text flows through two stages that only share the token sequence:
//!
//! src/lox
//!   ├── token      Token model shared by scanner and parser
//!   ├── lexing     Scanner: source text -> tokens, with error recovery
//!   ├── parsing    Recursive descent: tokens -> expression tree
//!   ├── ast        Expression tree and its canonical printer
//!   ├── formats    Named output formats for tokens and trees
//!   ├── config     Layered settings (embedded defaults + user files)
//!   └── pipeline   Host-facing executor used by the `lox` binary

pub mod lox;
