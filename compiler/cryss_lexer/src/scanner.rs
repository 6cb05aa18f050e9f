//! Line scanner.
//!
//! Turns one line of text at a time into tokens. Block comments and string
//! literals may span lines, so the scanner carries two pieces of state from
//! one line to the next: the stack of open comments and the string literal
//! being read, if any.
//!
//! A lexical error ends the line: the error is queued after the tokens that
//! precede it and the remainder of the line is dropped.

use std::collections::VecDeque;

use cryss_ir::{Pos, Range, Token, TokenKind};
use logos::Logos;
use tracing::trace;

use crate::raw_token::RawToken;
use crate::LexError;

pub(crate) type Queued = Result<Token, LexError>;

/// A string literal still open at the end of a line.
#[derive(Clone, Debug, PartialEq)]
struct OpenString {
    start: Pos,
    value: String,
}

#[derive(Default, Debug)]
pub(crate) struct Scanner {
    /// Start of every open block comment, outermost first.
    comments: Vec<Pos>,
    string: Option<OpenString>,
}

#[inline]
fn pos(line: u32, byte: usize) -> Pos {
    Pos::new(line, u32::try_from(byte).unwrap_or(u32::MAX))
}

/// Decoded value of the character after a backslash.
fn escape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        '0' => '\0',
        other => other,
    }
}

impl Scanner {
    /// Neither a comment nor a string is open.
    pub(crate) fn is_idle(&self) -> bool {
        self.comments.is_empty() && self.string.is_none()
    }

    /// Forget any open comment or string.
    pub(crate) fn reset(&mut self) {
        self.comments.clear();
        self.string = None;
    }

    /// The error for whatever is still open at end of input.
    pub(crate) fn finish(&mut self) -> Option<LexError> {
        if let Some(string) = self.string.take() {
            return Some(LexError::UnterminatedString {
                start: string.start,
            });
        }
        let start = self.comments.pop()?;
        Some(LexError::UnterminatedComment {
            start,
            enclosing: std::mem::take(&mut self.comments),
        })
    }

    /// Scan line `line` (without its terminator), queueing tokens and at
    /// most one error into `out`.
    pub(crate) fn scan_line(&mut self, line: u32, text: &str, out: &mut VecDeque<Queued>) {
        let mut at = 0;
        while at <= text.len() {
            if !self.comments.is_empty() {
                match self.skip_comment(line, text, at) {
                    Some(next) => at = next,
                    None => return,
                }
            } else if self.string.is_some() {
                match self.read_string(line, text, at, out) {
                    Some(next) => at = next,
                    None => return,
                }
            } else {
                let rest = text.get(at..).unwrap_or_default();
                let trimmed = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
                at += rest.len() - trimmed.len();
                if trimmed.is_empty() || trimmed.starts_with("//") {
                    return;
                }
                if trimmed.starts_with("/*") {
                    self.comments.push(pos(line, at));
                    at += 2;
                } else if trimmed.starts_with('"') {
                    self.string = Some(OpenString {
                        start: pos(line, at),
                        value: String::new(),
                    });
                    at += 1;
                } else {
                    match next_token(line, trimmed, at) {
                        Ok(token) => {
                            trace!(kind = ?token.kind, range = %token.range, "token");
                            at = token.range.end.byte as usize;
                            out.push_back(Ok(token));
                        }
                        Err(err) => {
                            trace!(%err, "lex error");
                            out.push_back(Err(err));
                            return;
                        }
                    }
                }
            }
        }
    }

    /// Inside a comment: step past the next `/*` or `*/`, or return `None`
    /// when the line ends first.
    fn skip_comment(&mut self, line: u32, text: &str, at: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let mut i = at;
        while i + 1 < bytes.len() {
            match (bytes[i], bytes[i + 1]) {
                (b'/', b'*') => {
                    self.comments.push(pos(line, i));
                    return Some(i + 2);
                }
                (b'*', b'/') => {
                    self.comments.pop();
                    return Some(i + 2);
                }
                _ => i += 1,
            }
        }
        None
    }

    /// Inside a string: decode up to the closing quote and queue the
    /// literal. Returns `None` when the line ends first, after appending
    /// the line break to the value.
    fn read_string(
        &mut self,
        line: u32,
        text: &str,
        at: usize,
        out: &mut VecDeque<Queued>,
    ) -> Option<usize> {
        let string = self.string.as_mut()?;
        let rest = text.get(at..).unwrap_or_default();
        let mut chars = rest.char_indices();
        while let Some((offset, c)) = chars.next() {
            match c {
                '"' => {
                    let end = at + offset + 1;
                    let token = Token::new(
                        TokenKind::StringLit(std::mem::take(&mut string.value)),
                        Range::new(string.start, pos(line, end)),
                    );
                    trace!(kind = ?token.kind, range = %token.range, "token");
                    out.push_back(Ok(token));
                    self.string = None;
                    return Some(end);
                }
                // A backslash at end of line escapes the line break
                '\\' => match chars.next() {
                    Some((_, escaped)) => string.value.push(escape(escaped)),
                    None => break,
                },
                other => string.value.push(other),
            }
        }
        string.value.push('\n');
        None
    }
}

/// Match one token at the start of `rest`, which begins at byte `at` of
/// `line`.
fn next_token(line: u32, rest: &str, at: usize) -> Result<Token, LexError> {
    let mut lexer = RawToken::lexer(rest);
    let matched = lexer.next();
    let slice = lexer.slice();
    let range = Range::new(pos(line, at), pos(line, at + slice.len()));
    match matched {
        Some(Ok(raw)) => match raw.into_kind(slice) {
            Some(kind) => Ok(Token::new(kind, range)),
            None if raw == RawToken::EmptyRadix => Err(LexError::EmptyRadixLiteral {
                text: slice.to_owned(),
                range,
            }),
            None => Err(LexError::IncompleteScientificNotation {
                text: slice.to_owned(),
                range,
            }),
        },
        _ => {
            let character = rest.chars().next().unwrap_or('\u{fffd}');
            Err(LexError::UnexpectedCharacter {
                character,
                range: Range::new(pos(line, at), pos(line, at + character.len_utf8())),
            })
        }
    }
}
