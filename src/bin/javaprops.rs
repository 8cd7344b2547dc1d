//! Command-line interface for javaprops
//! This binary parses `.properties` files and prints their tokens, document tree or re-serialized text.
//!
//! Usage:
//!   javaprops `<path>` [--format `<format>`]  - Process a file (default format: ast-treeviz)
//!   javaprops `<path>` --check               - Verify the file parses and round-trips unchanged
//!   javaprops --list-formats                 - List all available formats
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use clap::{Arg, ArgAction, Command};
use javaprops::properties::ast::RawText;
use javaprops::properties::parser::parse_document;
use javaprops::properties::processor::{available_formats, process_file, ProcessingSpec};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("javaprops")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Java .properties files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the .properties file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'token-simple', 'ast-tag', 'raw')")
                .default_value("ast-treeviz"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Parse the file and verify it serializes back unchanged")
                .action(ArgAction::SetTrue)
                .conflicts_with("format"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("Error: a path is required");
        std::process::exit(1);
    };

    if matches.get_flag("check") {
        handle_check_command(path);
    } else {
        let format = matches
            .get_one::<String>("format")
            .map(String::as_str)
            .unwrap_or("ast-treeviz");
        handle_process_command(path, format);
    }
}

/// Handle processing a file with a format
fn handle_process_command(path: &str, format: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available formats: {}", available_formats().join(", "));
        std::process::exit(1);
    });

    match process_file(path, &spec) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the check flag
fn handle_check_command(path: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let doc = parse_document(&source).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        std::process::exit(1);
    });

    if doc.raw_text() != source {
        eprintln!("{}: serialized document differs from the input", path);
        std::process::exit(1);
    }

    println!(
        "{}: ok ({} pairs, {} expressions)",
        path,
        doc.iter_pairs().count(),
        doc.len()
    );
}

/// Handle the list-formats flag
fn handle_list_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}
