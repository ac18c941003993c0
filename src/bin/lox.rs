//! Command-line interface for lox
//! This binary tokenizes lox files or parses them into an expression tree.
//!
//! Usage:
//!   lox tokenize `<path>` [--format `<format>`] [--config `<file>`]  - Print the token stream
//!   lox parse `<path>` [--format `<format>`] [--config `<file>`]     - Print the parsed expression
//!   lox list-formats                                           - List all available formats
//!
//! Exit status is 65 when the source is malformed (scan or syntax errors) and 1 for any other
//! failure, such as an unreadable file.

use clap::{Arg, ArgMatches, Command};
use lox::lox::config::{LoxConfig, Loader};
use lox::lox::pipeline::{PipelineError, PipelineExecutor};

fn source_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("path")
                .help("Path to the lox source file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see `lox list-formats`)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
}

fn main() {
    let matches = Command::new("lox")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scanner and expression parser for lox source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(source_args(
            Command::new("tokenize").about("Print one line per token"),
        ))
        .subcommand(source_args(
            Command::new("parse").about("Parse one expression and print its tree"),
        ))
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("tokenize", sub_matches)) => {
            let config = load_config(sub_matches, "output.token_format");
            handle_tokenize_command(sub_matches, config);
        }
        Some(("parse", sub_matches)) => {
            let config = load_config(sub_matches, "output.ast_format");
            handle_parse_command(sub_matches, config);
        }
        Some(("list-formats", _)) => {
            let config = load_config_or_exit(Loader::new());
            handle_list_formats_command(config);
        }
        _ => unreachable!(),
    }
}

/// Layer `--config` and map `--format` onto `format_key`
fn load_config(matches: &ArgMatches, format_key: &str) -> LoxConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .set_override(format_key, format.as_str())
            .unwrap_or_else(|e| fail(PipelineError::Config(e)));
    }
    load_config_or_exit(loader)
}

fn load_config_or_exit(loader: Loader) -> LoxConfig {
    loader
        .build()
        .unwrap_or_else(|e| fail(PipelineError::Config(e)))
}

fn source_path(matches: &ArgMatches) -> &String {
    matches
        .get_one::<String>("path")
        .expect("path is a required argument")
}

/// Handle the tokenize command: tokens go to stdout even when the scan had errors
fn handle_tokenize_command(matches: &ArgMatches, config: LoxConfig) {
    let executor = PipelineExecutor::new(config);
    let report = executor
        .tokenize_file(source_path(matches))
        .unwrap_or_else(|e| fail(e));

    for error in &report.errors {
        eprintln!("{}", error);
    }
    println!("{}", report.rendered);

    let code = report.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches, config: LoxConfig) {
    let executor = PipelineExecutor::new(config);
    let rendered = executor
        .parse_file(source_path(matches))
        .unwrap_or_else(|e| fail(e));
    println!("{}", rendered);
}

/// Handle the list-formats command
fn handle_list_formats_command(config: LoxConfig) {
    let executor = PipelineExecutor::new(config);
    println!("Available output formats:\n");

    for (name, description) in executor.list_formats() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}

fn fail(error: PipelineError) -> ! {
    eprintln!("{}", error);
    std::process::exit(error.exit_code())
}
