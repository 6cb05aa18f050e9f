//! Recursive descent parser for cryss.
//!
//! Statements and definitions are parsed by recursive descent; binary
//! expressions by precedence climbing over the eleven levels of
//! [`BinaryOp::precedence`](cryss_ir::BinaryOp::precedence).
//!
//! The parser pulls tokens from any [`TokenStream`] and stops at the first
//! error. There is no recovery: an interactive driver discards the rest of
//! the statement and starts over.

mod cursor;
mod error;
mod grammar;

pub use error::{Construct, Expected, ParseError};

use cryss_ir::{Keyword, SourceLog, Stmt, TopLevel, TopLevelKind};
use cryss_lexer::{Lexer, TokenStream};
use cryss_stack::ensure_sufficient_stack;
use tracing::debug;

/// Parser state: just the token source.
///
/// Borrowing the stream lets a driver keep the lexer between items, to mark
/// statement boundaries and drop pending input after an error.
pub struct Parser<'s, S: ?Sized> {
    tokens: &'s mut S,
}

impl<'s, S: TokenStream + ?Sized> Parser<'s, S> {
    pub fn new(tokens: &'s mut S) -> Self {
        Parser { tokens }
    }

    /// Parse a definition or a statement. `Ok(None)` at end of input.
    pub fn parse_top_level(&mut self) -> Result<Option<TopLevel>, ParseError> {
        let item = if let Some(def) = self.bump_if(|t| t.is_keyword(Keyword::Def))? {
            self.definition(def.range)?
        } else {
            match self.parse_statement()? {
                Some(stmt) => {
                    let range = stmt.range;
                    TopLevel::new(TopLevelKind::Stmt(stmt), range)
                }
                None => return Ok(None),
            }
        };
        debug!(range = %item.range, "parsed item");
        Ok(Some(item))
    }

    /// Parse one statement. `Ok(None)` at end of input.
    pub fn parse_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        ensure_sufficient_stack(|| self.statement())
    }
}

/// Result of parsing a whole source text.
#[derive(Debug)]
pub struct ParseOutput {
    /// Items parsed before the first error.
    pub items: Vec<TopLevel>,
    pub error: Option<ParseError>,
    /// The lines read, for rendering `error`.
    pub log: SourceLog,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.error.is_some()
    }
}

/// Parse a complete source text, stopping at the first error.
pub fn parse(source: &str) -> ParseOutput {
    let mut lexer = Lexer::new(source.as_bytes());
    let mut items = Vec::new();
    let mut error = None;
    let mut parser = Parser::new(&mut lexer);
    loop {
        match parser.parse_top_level() {
            Ok(Some(item)) => items.push(item),
            Ok(None) => break,
            Err(err) => {
                error = Some(err);
                break;
            }
        }
    }
    ParseOutput {
        items,
        error,
        log: lexer.into_log(),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
