//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E1006]: mismatched brackets: `(` closed by `]`
//!  --> 1:6
//!   |
//! 1 | (1, 2];
//!   | - opened here
//! 1 | (1, 2];
//!   |      ^ does not match `(`
//!
//! ```

use std::io::{self, Write};

use cryss_ir::SourceLog;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Labels spanning more lines than this show only their first two and last.
const MAX_LABEL_LINES: u32 = 4;

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter writing to `writer`.
    ///
    /// `is_tty` says whether `writer` is a terminal, for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }


    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_primary(&mut self, text: &str) {
        self.write_colored(text, colors::ERROR);
    }

    fn write_secondary(&mut self, text: &str) {
        self.write_colored(text, colors::SECONDARY);
    }

    /// `width` blanks then the gutter bar, no newline.
    fn write_gutter(&mut self, width: usize) {
        let _ = write!(self.writer, "{:width$} ", "");
        self.write_secondary("|");
    }

    fn write_source_line(&mut self, line: u32, text: &str, width: usize) {
        self.write_secondary(&format!("{:>width$} |", line + 1));
        let _ = writeln!(self.writer, " {text}");
    }

    /// Marks under `text[from..to]`, followed by `message` when given.
    fn write_underline(
        &mut self,
        text: &str,
        (from, to): (usize, usize),
        width: usize,
        label: &Label,
        message: Option<&str>,
    ) {
        let from = from.min(text.len());
        let to = to.clamp(from, text.len());
        // Tabs are kept so the marks line up under the source text.
        let pad: String = text
            .get(..from)
            .unwrap_or_default()
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let count = text.get(from..to).map_or(0, |s| s.chars().count()).max(1);
        let marks = (if label.is_primary { "^" } else { "-" }).repeat(count);

        self.write_gutter(width);
        let _ = write!(self.writer, " {pad}");
        if label.is_primary {
            self.write_primary(&marks);
        } else {
            self.write_secondary(&marks);
        }
        if let Some(message) = message.filter(|m| !m.is_empty()) {
            let _ = write!(self.writer, " ");
            if label.is_primary {
                self.write_primary(message);
            } else {
                self.write_secondary(message);
            }
        }
        let _ = writeln!(self.writer);
    }

    /// Every line the label covers, each with its underline.
    fn write_snippet(&mut self, label: &Label, log: &SourceLog, width: usize) {
        let (start, end) = (label.range.start, label.range.end);
        if log.line(start.line as usize).is_none() {
            // Not in the log (synthesized range); fall back to the bare range.
            let _ = write!(self.writer, "{:width$} = {}: ", "", label.range);
            self.write_secondary(&label.message);
            let _ = writeln!(self.writer);
            return;
        }

        let elide = end.line.saturating_sub(start.line) + 1 > MAX_LABEL_LINES;
        let mut line = start.line;
        while line <= end.line {
            if elide && line == start.line + 2 {
                let _ = writeln!(self.writer, "{:width$}...", "");
                line = end.line;
                continue;
            }
            let Some(text) = log.line(line as usize) else {
                break;
            };
            let from = if line == start.line { start.byte as usize } else { 0 };
            let to = if line == end.line {
                end.byte as usize
            } else {
                text.len()
            };
            let message = (line == end.line).then_some(label.message.as_str());
            self.write_source_line(line, text, width);
            self.write_underline(text, (from, to), width, label, message);
            line += 1;
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic, log: &SourceLog) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let width = diagnostic
            .labels
            .iter()
            .map(|label| (label.range.end.line + 1).to_string().len())
            .max()
            .unwrap_or(1);

        // Locator: --> line:col of the primary label
        if let Some(range) = diagnostic.primary_range() {
            let _ = write!(self.writer, "{:width$}", "");
            self.write_secondary("-->");
            let _ = writeln!(
                self.writer,
                " {}:{}",
                range.start.line + 1,
                range.start.column(log)
            );
        }

        if !diagnostic.labels.is_empty() {
            self.write_gutter(width);
            let _ = writeln!(self.writer);
            for label in &diagnostic.labels {
                self.write_snippet(label, log, width);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "{:width$} = ", "");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "{:width$} = ", "");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        let error_part = match error_count {
            0 => return,
            1 => "previous error".to_string(),
            n => format!("{n} previous errors"),
        };
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(self.writer, ": aborting due to {error_part}");
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
