//! Command handlers for the `cryss` CLI.
//!
//! Each submodule implements one way of running the front end. Shared
//! pieces (options, outcome, `read_file`) live here in the module root.

use std::io::{self, IsTerminal};

use cryss_diagnostic::emitter::{ColorMode, TerminalEmitter};
use thiserror::Error;

mod debug;
mod run;

pub use debug::{lex_file, parse_file, write_ast, write_tokens};
pub use run::{run_file, run_interactive, run_source};

/// Flags shared by every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub color: ColorMode,
}

impl Options {
    /// Emitter for diagnostics on stderr.
    pub fn emitter(self) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter::stderr(self.color, io::stderr().is_terminal())
    }
}

/// How a command finished, for the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Input consumed without diagnostics (or interactive end of input).
    Clean,
    /// At least one diagnostic was emitted.
    Failed,
}

impl Outcome {
    pub fn from_error_count(errors: usize) -> Self {
        if errors == 0 {
            Outcome::Clean
        } else {
            Outcome::Failed
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::Failed => 1,
        }
    }
}

/// Failure of the driver itself, outside the language.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

/// Read a source file, mapping I/O failures to a message that names it.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| {
        let path = path.to_owned();
        match e.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: e },
        }
    })
}
