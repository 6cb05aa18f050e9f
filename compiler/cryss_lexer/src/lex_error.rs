//! Lexer error types.
//!
//! Each variant stores the positions needed to explain it and nothing
//! more. Rendering happens later, against the source log.

use cryss_diagnostic::{Diagnostic, ErrorCode};
use cryss_ir::{Pos, Range};
use thiserror::Error;

/// Range of a two-byte comment opener at `pos`.
fn opener(pos: Pos) -> Range {
    Range::on_line(pos.line, pos.byte, pos.byte + 2)
}

/// Range of the opening quote at `pos`.
fn quote(pos: Pos) -> Range {
    Range::on_line(pos.line, pos.byte, pos.byte + 1)
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// A character that starts no token. The range covers the whole
    /// UTF-8 character.
    #[error("unexpected character `{character}` at {range}")]
    UnexpectedCharacter { character: char, range: Range },

    /// End of input inside a block comment. `start` is the innermost open
    /// comment; `enclosing` lists the outer ones, outermost first.
    #[error("unterminated comment (started at {start})")]
    UnterminatedComment { start: Pos, enclosing: Vec<Pos> },

    /// End of input inside a string literal.
    #[error("unterminated string literal (started at {start})")]
    UnterminatedString { start: Pos },

    /// Exponent marker not followed by a digit. The range runs from the
    /// literal start up to the offending character.
    #[error("incomplete scientific notation `{text}` at {range}")]
    IncompleteScientificNotation { text: String, range: Range },

    /// `0b`, `0o` or `0x` with no digits after it.
    #[error("number prefix `{text}` without digits at {range}")]
    EmptyRadixLiteral { text: String, range: Range },

    /// The input source failed.
    #[error("failed to read input: {message}")]
    Io { message: String },
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnexpectedCharacter { .. } => ErrorCode::E0001,
            LexError::UnterminatedComment { .. } => ErrorCode::E0002,
            LexError::UnterminatedString { .. } => ErrorCode::E0003,
            LexError::IncompleteScientificNotation { .. } => ErrorCode::E0004,
            LexError::EmptyRadixLiteral { .. } => ErrorCode::E0005,
            LexError::Io { .. } => ErrorCode::E0006,
        }
    }

    /// Where the error is, if it has a location.
    pub fn range(&self) -> Option<Range> {
        match self {
            LexError::UnexpectedCharacter { range, .. }
            | LexError::IncompleteScientificNotation { range, .. }
            | LexError::EmptyRadixLiteral { range, .. } => Some(*range),
            LexError::UnterminatedComment { start, .. } => Some(opener(*start)),
            LexError::UnterminatedString { start } => Some(quote(*start)),
            LexError::Io { .. } => None,
        }
    }

    /// Convert to a renderable diagnostic.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LexError::UnexpectedCharacter { range, .. } => {
                diag.with_label(*range, "no token starts with this character")
            }
            LexError::UnterminatedComment { start, enclosing } => {
                let diag = diag
                    .with_label(opener(*start), "comment opened here is never closed")
                    .with_suggestion("close each `/*` with a matching `*/`");
                enclosing.iter().rev().fold(diag, |diag, outer| {
                    diag.with_secondary_label(opener(*outer), "inside this comment")
                })
            }
            LexError::UnterminatedString { start } => diag
                .with_label(quote(*start), "string opened here is never closed")
                .with_suggestion("add a closing `\"`"),
            LexError::IncompleteScientificNotation { range, .. } => diag
                .with_label(*range, "expected a digit after the exponent")
                .with_note("an exponent is written like `1e3` or `2.5e-4`"),
            LexError::EmptyRadixLiteral { range, text } => {
                let digits = match text.as_str() {
                    "0b" => "binary digits `0`-`1`",
                    "0o" => "octal digits `0`-`7`",
                    _ => "hexadecimal digits `0`-`9`, `a`-`f`",
                };
                diag.with_label(*range, format!("expected {digits}"))
            }
            LexError::Io { .. } => diag,
        }
    }
}
