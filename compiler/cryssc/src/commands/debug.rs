//! Debug commands: `lex` and `parse` for inspecting front end output.

use std::io::{self, Write};

use cryss_diagnostic::emitter::DiagnosticEmitter;
use cryss_ir::dump;
use cryss_lexer::{Lexer, TokenStream};

use super::{read_file, CliError, Options, Outcome};

/// Lex a file and print the token stream.
pub fn lex_file(path: &str, options: Options) -> Result<Outcome, CliError> {
    let source = read_file(path)?;
    write_tokens(path, &source, &mut io::stdout().lock(), &mut options.emitter())
}

/// Parse a file and print the AST dump.
pub fn parse_file(path: &str, options: Options) -> Result<Outcome, CliError> {
    let source = read_file(path)?;
    write_ast(path, &source, &mut io::stdout().lock(), &mut options.emitter())
}

/// Write the tokens of `source` to `out`, up to the first lexical error.
pub fn write_tokens<W: Write, E: DiagnosticEmitter>(
    name: &str,
    source: &str,
    out: &mut W,
    emitter: &mut E,
) -> Result<Outcome, CliError> {
    let mut lexer = Lexer::new(source.as_bytes());
    let mut tokens = Vec::new();
    let error = loop {
        match lexer.next() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break None,
            Err(err) => break Some(err),
        }
    };

    writeln!(out, "Tokens for '{name}' ({} tokens):", tokens.len())?;
    for token in &tokens {
        writeln!(out, "  {token:?}")?;
    }
    out.flush()?;

    match error {
        Some(err) => {
            emitter.emit(&err.to_diagnostic(), lexer.log());
            emitter.emit_summary(1);
            emitter.flush();
            Ok(Outcome::Failed)
        }
        None => Ok(Outcome::Clean),
    }
}

/// Write the AST dump of `source` to `out`, up to the first syntax error.
pub fn write_ast<W: Write, E: DiagnosticEmitter>(
    name: &str,
    source: &str,
    out: &mut W,
    emitter: &mut E,
) -> Result<Outcome, CliError> {
    let parsed = cryss_parse::parse(source);

    writeln!(out, "Parse result for '{name}' ({} items):", parsed.items.len())?;
    for item in &parsed.items {
        write!(out, "{}", dump::top_level(item))?;
    }
    out.flush()?;

    match &parsed.error {
        Some(err) => {
            emitter.emit(&err.to_diagnostic(), &parsed.log);
            emitter.emit_summary(1);
            emitter.flush();
            Ok(Outcome::Failed)
        }
        None => Ok(Outcome::Clean),
    }
}
