//! Shared test utilities for phase tests.
//!
//! Everything renders without color so output can be compared as text.

use cryss_diagnostic::emitter::{ColorMode, TerminalEmitter};
use cryss_lexer::Lexer;
use cryssc::commands::{run_source, write_ast, write_tokens, CliError, Outcome};
use cryssc::{Mode, Session, SessionOutput};

/// File name shown in dump headers.
pub const NAME: &str = "test.cryss";

/// A finished session plus everything it wrote.
pub struct Captured {
    pub output: SessionOutput,
    pub diagnostics: String,
    pub prompts: String,
}

fn plain(buf: &mut Vec<u8>) -> PlainEmitter<'_> {
    TerminalEmitter::with_color_mode(buf, ColorMode::Never, false)
}

/// Run `source` the way `cryss <file>` does.
pub fn batch(source: &str) -> Captured {
    let mut diagnostics = Vec::new();
    let output = run_source(source, plain(&mut diagnostics));
    Captured {
        output,
        diagnostics: String::from_utf8(diagnostics).unwrap(),
        prompts: String::new(),
    }
}

/// Feed `input` to an interactive session, as if typed on stdin.
pub fn interactive(input: &str) -> Captured {
    let mut diagnostics = Vec::new();
    let mut prompts = Vec::new();
    let output = {
        let mut lexer = Lexer::interactive(input.as_bytes(), &mut prompts);
        Session::new(Mode::Interactive, plain(&mut diagnostics)).run(&mut lexer)
    };
    Captured {
        output,
        diagnostics: String::from_utf8(diagnostics).unwrap(),
        prompts: String::from_utf8(prompts).unwrap(),
    }
}

/// What a debug command printed.
pub struct Dump {
    pub outcome: Outcome,
    pub stdout: String,
    pub stderr: String,
}

/// Output of `cryss lex`.
pub fn lex_dump(source: &str) -> Dump {
    dump_with(|out, emitter| write_tokens(NAME, source, out, emitter))
}

/// Output of `cryss parse`.
pub fn parse_dump(source: &str) -> Dump {
    dump_with(|out, emitter| write_ast(NAME, source, out, emitter))
}

type PlainEmitter<'a> = TerminalEmitter<&'a mut Vec<u8>>;

fn dump_with(
    command: impl FnOnce(&mut Vec<u8>, &mut PlainEmitter<'_>) -> Result<Outcome, CliError>,
) -> Dump {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let outcome = command(&mut stdout, &mut plain(&mut stderr)).unwrap();
    Dump {
        outcome,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}
