//! Main module for lox library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod token;
