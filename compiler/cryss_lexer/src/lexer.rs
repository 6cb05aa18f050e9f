//! Streaming lexer.
//!
//! Pulls lines from a [`BufRead`] on demand, records each one in the
//! [`SourceLog`] and hands it to the scanner. Tokens are queued and served
//! in source order through [`TokenStream`].

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use cryss_ir::{SourceLog, Token};
use tracing::debug;

use crate::scanner::{Queued, Scanner};
use crate::{LexError, TokenStream};

const PROMPT: &str = "> ";
const CONTINUATION_PROMPT: &str = "+ ";

pub struct Lexer<R, W = io::Sink> {
    reader: R,
    /// Where prompts go. `None` in batch mode.
    prompt: Option<W>,
    log: SourceLog,
    scanner: Scanner,
    queue: VecDeque<Queued>,
    /// The current statement has already consumed at least one line.
    continuation: bool,
    eof: bool,
}

impl<R: BufRead> Lexer<R, io::Sink> {
    /// Batch lexer: no prompts.
    pub fn new(reader: R) -> Self {
        Lexer::with_prompt(reader, None)
    }
}

impl<R: BufRead, W: Write> Lexer<R, W> {
    /// Interactive lexer that writes a prompt to `writer` before each line
    /// it reads.
    pub fn interactive(reader: R, writer: W) -> Self {
        Lexer::with_prompt(reader, Some(writer))
    }

    fn with_prompt(reader: R, prompt: Option<W>) -> Self {
        Lexer {
            reader,
            prompt,
            log: SourceLog::new(),
            scanner: Scanner::default(),
            queue: VecDeque::new(),
            continuation: false,
            eof: false,
        }
    }

    /// Mark a statement boundary: the next line read gets the primary
    /// prompt.
    pub fn begin_statement(&mut self) {
        self.continuation = false;
    }

    /// Drop queued tokens along with any open comment or string.
    pub fn discard_pending(&mut self) {
        if !self.queue.is_empty() || !self.scanner.is_idle() {
            debug!(dropped = self.queue.len(), "discarding pending input");
        }
        self.queue.clear();
        self.scanner.reset();
    }

    pub fn into_log(self) -> SourceLog {
        self.log
    }

    /// Read lines until something is queued or input runs out.
    fn fill(&mut self) {
        while self.queue.is_empty() && !self.eof {
            self.read_line();
        }
    }

    fn read_line(&mut self) {
        if let Some(out) = self.prompt.as_mut() {
            let prompt = if self.continuation {
                CONTINUATION_PROMPT
            } else {
                PROMPT
            };
            // A prompt that cannot be shown does not stop lexing
            if let Err(err) = out.write_all(prompt.as_bytes()).and_then(|()| out.flush()) {
                debug!(%err, "prompt write failed");
            }
        }

        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => {
                debug!(lines = self.log.len(), "end of input");
                self.eof = true;
                if let Some(err) = self.scanner.finish() {
                    self.queue.push_back(Err(err));
                }
            }
            Ok(_) => {
                let line = self.log.push_line(&buf);
                let text = self.log.line(line as usize).unwrap_or_default();
                debug!(line = line + 1, text, "read line");
                let queued = self.queue.len();
                self.scanner.scan_line(line, text, &mut self.queue);
                if self.queue.len() > queued || !self.scanner.is_idle() {
                    self.continuation = true;
                }
            }
            Err(err) => {
                debug!(%err, "read failed");
                self.eof = true;
                self.queue.push_back(Err(LexError::Io {
                    message: err.to_string(),
                }));
            }
        }
    }
}

impl<R: BufRead, W: Write> TokenStream for Lexer<R, W> {
    fn peek(&mut self) -> Result<Option<&Token>, LexError> {
        self.fill();
        match self.queue.front() {
            None => Ok(None),
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(err)) => Err(err.clone()),
        }
    }

    fn next(&mut self) -> Result<Option<Token>, LexError> {
        self.fill();
        self.queue.pop_front().transpose()
    }

    fn log(&self) -> &SourceLog {
        &self.log
    }
}

#[cfg(test)]
mod tests;
