//! Command-line interface for noweb
//! This binary inspects noweb literate-programming files: it dumps the
//! presentation tokens or folding ranges, and checks chunk references.
//!
//! Usage:
//!   noweb `<path>`                        - Emit the token sequence as JSON
//!   noweb `<path>` --emit folds           - Emit the folding ranges
//!   noweb `<path>` --emit check           - Report undefined chunk references
//!   noweb `<path>` --format yaml          - Switch the output format

use clap::{Arg, Command};
use noweb_parser::noweb::{compute_folds, parse, CancellationToken, Token, TokenKind};

fn main() {
    let matches = Command::new("noweb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting noweb literate-programming files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the noweb file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .short('e')
                .help("What to emit: 'tokens', 'folds' or 'check'")
                .default_value("tokens"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format for tokens/folds: 'json' or 'yaml'")
                .default_value("json"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let emit = matches.get_one::<String>("emit").unwrap();
    let format = matches.get_one::<String>("format").unwrap();

    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {}", path, e);
        std::process::exit(1);
    });

    match emit.as_str() {
        "tokens" => {
            let tokens = parse(&text, &CancellationToken::new());
            print!("{}", serialize(&tokens, format));
        }
        "folds" => {
            let ranges = compute_folds(&text, &CancellationToken::new());
            print!("{}", serialize(&ranges, format));
        }
        "check" => handle_check_command(path, &text),
        other => {
            eprintln!("Unknown emit target '{}'", other);
            eprintln!("Available targets: tokens, folds, check");
            std::process::exit(1);
        }
    }
}

fn serialize<T: serde::Serialize>(value: &T, format: &str) -> String {
    let result = match format {
        "json" => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        "yaml" => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        other => {
            eprintln!("Unknown format '{}'", other);
            eprintln!("Available formats: json, yaml");
            std::process::exit(1);
        }
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    })
}

/// Report every undefined chunk reference, one diagnostic per line.
fn handle_check_command(path: &str, text: &str) {
    let tokens = parse(text, &CancellationToken::new());
    let undefined: Vec<&Token> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::UndefinedReference)
        .collect();

    if undefined.is_empty() {
        println!("{}: no undefined chunk references", path);
        return;
    }
    for token in &undefined {
        let name = token.keyword.as_deref().unwrap_or_default();
        eprintln!(
            "{}:{}:{}: undefined chunk reference <<{}>>",
            path,
            token.line + 1,
            token.start + 1,
            name
        );
    }
    std::process::exit(1);
}
