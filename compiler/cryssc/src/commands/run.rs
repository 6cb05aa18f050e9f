//! Run commands: a file in batch mode, or stdin interactively.

use std::io::{self, Write};

use cryss_diagnostic::emitter::DiagnosticEmitter;
use cryss_lexer::Lexer;

use super::{read_file, CliError, Options, Outcome};
use crate::{Mode, Session, SessionOutput};

/// Run a file in batch mode.
pub fn run_file(path: &str, options: Options) -> Result<Outcome, CliError> {
    let source = read_file(path)?;
    let output = run_source(&source, options.emitter());
    Ok(Outcome::from_error_count(output.error_count))
}

/// Run `source` in batch mode, reporting through `emitter`.
pub fn run_source<E: DiagnosticEmitter>(source: &str, emitter: E) -> SessionOutput {
    let mut lexer = Lexer::new(source.as_bytes());
    Session::new(Mode::Batch, emitter).run(&mut lexer)
}

/// Read statements from stdin until end of input, prompting on stdout.
///
/// Errors are reported and skipped, so this always ends clean.
pub fn run_interactive(options: Options) -> Result<Outcome, CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lexer = Lexer::interactive(stdin.lock(), &mut stdout);
    Session::new(Mode::Interactive, options.emitter()).run(&mut lexer);

    // Leave the shell prompt on a fresh line after ^D
    writeln!(stdout)?;
    Ok(Outcome::Clean)
}
