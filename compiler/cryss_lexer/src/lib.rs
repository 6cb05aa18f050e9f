//! Lexer for cryss.
//!
//! Source is read one line at a time. Block comments nest and, like string
//! literals, may span lines; everything else is matched per line by a
//! logos-derived raw token matcher with maximal munch.
//!
//! Keywords are not distinguished here. They come out as identifiers and
//! the parser asks [`Token::keyword`](cryss_ir::Token::keyword) when it
//! cares.

mod lex_error;
mod lexer;
mod raw_token;
mod scanner;

use cryss_ir::{SourceLog, Token};

pub use lex_error::LexError;
pub use lexer::Lexer;

/// The token source the parser consumes.
///
/// Both calls return `Ok(None)` at end of input. A lexical error is
/// returned in token order: tokens before it are served first.
pub trait TokenStream {
    /// Look at the next token without consuming it.
    fn peek(&mut self) -> Result<Option<&Token>, LexError>;

    /// Consume the next token.
    fn next(&mut self) -> Result<Option<Token>, LexError>;

    /// Every line read so far.
    fn log(&self) -> &SourceLog;
}

/// Lex a complete source text.
///
/// Stops at the first error.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source.as_bytes());
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next()? {
        tokens.push(token);
    }
    Ok(tokens)
}
