//! cryss CLI
//!
//! Interactive on stdin with no arguments, batch on a file otherwise.

use cryss_diagnostic::emitter::ColorMode;
use cryssc::commands::{lex_file, parse_file, run_file, run_interactive, Options, Outcome};
use cryssc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let mut options = Options::default();
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = match mode {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => {
                    eprintln!("Unknown color mode '{mode}' (expected auto, always or never)");
                    std::process::exit(1);
                }
            };
        } else {
            args.push(arg);
        }
    }

    let result = match args.first().map(String::as_str) {
        None => run_interactive(options),
        Some("help" | "--help" | "-h") => {
            print_usage();
            return;
        }
        Some("version" | "--version" | "-V") => {
            println!("cryss {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Some(command @ ("lex" | "parse")) => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: cryss {command} <file.cryss>");
                std::process::exit(1);
            };
            if command == "lex" {
                lex_file(path, options)
            } else {
                parse_file(path, options)
            }
        }
        Some(flag) if flag.starts_with('-') => {
            eprintln!("Unknown option '{flag}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
        Some(path) => run_file(path, options),
    };

    match result {
        Ok(Outcome::Clean) => {}
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("cryss {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: cryss [options] [command] [file]");
    println!();
    println!("Commands:");
    println!("  <file.cryss>        Lex, parse and type-annotate a file");
    println!("  lex <file.cryss>    Print the token stream");
    println!("  parse <file.cryss>  Print the syntax tree");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("With no file, statements are read interactively from stdin.");
    println!();
    println!("Options:");
    println!("  --color=<mode>      Diagnostic colors: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable tracing (e.g. RUST_LOG=cryss_parse=debug)");
    println!("  CRYSS_LOG_TREE      Show tracing as an indented tree");
}
