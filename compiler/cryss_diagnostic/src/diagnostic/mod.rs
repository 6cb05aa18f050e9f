//! Core diagnostic types.

use cryss_ir::Range;
use std::fmt;

use crate::ErrorCode;

/// A source range with an explanatory message.
///
/// The primary label marks where the error is; secondary labels mark related
/// places, like the opening bracket of an unclosed list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub range: Range,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    pub fn primary(range: Range, message: impl Into<String>) -> Self {
        Label {
            range,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(range: Range, message: impl Into<String>) -> Self {
        Label {
            range,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A structured error report. Every cryss diagnostic is an error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main message, one line.
    pub message: String,
    /// Labeled ranges, in the order they should be rendered.
    pub labels: Vec<Label>,
    /// Additional context.
    pub notes: Vec<String>,
    /// Human-readable hints for fixing the error.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, range: Range, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(range, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, range: Range, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(range, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Range of the first primary label.
    pub fn primary_range(&self) -> Option<Range> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.range)
    }
}

impl fmt::Display for Diagnostic {
    /// Plain one-block rendering without source lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {} {}: {}", marker, label.range, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
