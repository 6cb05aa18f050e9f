//! One front end session over one input.
//!
//! The loop reads a top-level item, lowers its type annotations into the
//! session's interner and keeps it. Every error becomes a [`Diagnostic`]
//! emitted against the lexer's [`SourceLog`](cryss_ir::SourceLog) as it
//! stands at that moment.
//!
//! What happens next depends on [`Mode`]: a batch session stops, an
//! interactive one drops the rest of the broken statement and reads on.

use std::io::{BufRead, Write};

use cryss_diagnostic::emitter::DiagnosticEmitter;
use cryss_diagnostic::Diagnostic;
use cryss_ir::TopLevel;
use cryss_lexer::{Lexer, TokenStream};
use cryss_parse::Parser;
use cryss_types::{lower_item_types, ItemTypes, SharedTypeInterner};
use tracing::{debug, info};

/// How a session reacts to an error.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Report, discard the rest of the statement and continue.
    Interactive,
    /// Stop at the first diagnostic.
    Batch,
}

/// What a finished session leaves behind.
#[derive(Debug)]
pub struct SessionOutput {
    /// Items that parsed and lowered cleanly, in input order.
    pub items: Vec<TopLevel>,
    /// Lowered types of each item in `items`, index for index.
    pub item_types: Vec<ItemTypes>,
    /// The interner every id in `item_types` points into.
    pub types: SharedTypeInterner,
    /// Number of diagnostics emitted.
    pub error_count: usize,
}

impl SessionOutput {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

pub struct Session<E> {
    mode: Mode,
    emitter: E,
    types: SharedTypeInterner,
}

impl<E: DiagnosticEmitter> Session<E> {
    /// A session with a fresh type interner.
    pub fn new(mode: Mode, emitter: E) -> Self {
        Session {
            mode,
            emitter,
            types: SharedTypeInterner::new(),
        }
    }

    /// Intern into `types` instead of a fresh interner.
    #[must_use]
    pub fn with_types(mut self, types: SharedTypeInterner) -> Self {
        self.types = types;
        self
    }

    /// Drive `lexer` to end of input.
    pub fn run<R: BufRead, W: Write>(mut self, lexer: &mut Lexer<R, W>) -> SessionOutput {
        info!(mode = ?self.mode, "session started");
        let mut items = Vec::new();
        let mut item_types = Vec::new();
        let mut error_count = 0;

        loop {
            lexer.begin_statement();
            let (diagnostic, parse_failed) = match Parser::new(&mut *lexer).parse_top_level() {
                Ok(None) => break,
                Ok(Some(item)) => match lower_item_types(&item, &self.types) {
                    Ok(types) => {
                        debug!(
                            range = %item.range,
                            annotations = types.annotations.len(),
                            "item accepted"
                        );
                        items.push(item);
                        item_types.push(types);
                        continue;
                    }
                    Err(err) => (err.to_diagnostic(), false),
                },
                Err(err) => (err.to_diagnostic(), true),
            };

            error_count += 1;
            self.report(&diagnostic, lexer);
            if self.mode == Mode::Batch {
                break;
            }
            if parse_failed {
                lexer.discard_pending();
            }
        }

        // Interactive errors are answered one by one; a batch run ends with a tally.
        if self.mode == Mode::Batch {
            self.emitter.emit_summary(error_count);
            self.emitter.flush();
        }

        info!(items = items.len(), errors = error_count, "session finished");
        SessionOutput {
            items,
            item_types,
            types: self.types,
            error_count,
        }
    }

    fn report<R: BufRead, W: Write>(&mut self, diagnostic: &Diagnostic, lexer: &Lexer<R, W>) {
        debug!(code = %diagnostic.code, "reporting");
        self.emitter.emit(diagnostic, lexer.log());
        self.emitter.flush();
    }
}
