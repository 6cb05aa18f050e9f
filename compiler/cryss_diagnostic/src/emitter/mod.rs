//! Diagnostic emitters.
//!
//! An emitter turns a [`Diagnostic`] into output. Source lines are looked up
//! in the [`SourceLog`] at emit time. In interactive sessions the log grows
//! between emits, so the emitter holds no copy of it.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use cryss_ir::SourceLog;

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic, quoting source lines from `log`.
    fn emit(&mut self, diagnostic: &Diagnostic, log: &SourceLog);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Close a run that reported `error_count` diagnostics. Nothing is
    /// written for a clean run.
    fn emit_summary(&mut self, error_count: usize);
}
