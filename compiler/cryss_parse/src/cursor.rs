//! Token navigation for the parser.
//!
//! Every helper either consumes a token or leaves the stream untouched. The
//! `expect` family consumes unconditionally: a wrong token is about to
//! become an error anyway.

use cryss_ir::{Ident, Keyword, Range, Token, TokenKind};
use cryss_lexer::TokenStream;
use tracing::trace;

use crate::{Construct, Expected, ParseError, Parser};

impl<S: TokenStream + ?Sized> Parser<'_, S> {
    /// Apply `f` to the next token without consuming it. `None` at end of
    /// input.
    pub(crate) fn peek_with<T>(
        &mut self,
        f: impl FnOnce(&Token) -> T,
    ) -> Result<Option<T>, ParseError> {
        Ok(self.tokens.peek()?.map(f))
    }

    pub(crate) fn bump(&mut self) -> Result<Option<Token>, ParseError> {
        let token = self.tokens.next()?;
        if let Some(token) = &token {
            trace!(?token, "consume");
        }
        Ok(token)
    }

    /// Consume the next token if `accept` holds for it.
    pub(crate) fn bump_if(
        &mut self,
        accept: impl FnOnce(&Token) -> bool,
    ) -> Result<Option<Token>, ParseError> {
        if self.peek_with(accept)? == Some(true) {
            self.bump()
        } else {
            Ok(None)
        }
    }

    /// Consume the next token, which must satisfy `accept`.
    pub(crate) fn expect(
        &mut self,
        context: Construct,
        keyword: Range,
        expected: Expected,
        accept: impl FnOnce(&Token) -> bool,
    ) -> Result<Token, ParseError> {
        match self.bump()? {
            Some(token) if accept(&token) => Ok(token),
            Some(found) => Err(ParseError::Expected {
                context,
                keyword,
                expected,
                found,
            }),
            None => Err(ParseError::ExpectedAtEof {
                context,
                keyword,
                expected,
            }),
        }
    }

    /// Consume a plain identifier.
    pub(crate) fn expect_ident(
        &mut self,
        context: Construct,
        keyword: Range,
    ) -> Result<Ident, ParseError> {
        match self.bump()? {
            Some(Token {
                kind: TokenKind::Identifier(name),
                range,
            }) if Keyword::lookup(&name).is_none() => Ok(Ident::new(name, range)),
            Some(found) => Err(ParseError::Expected {
                context,
                keyword,
                expected: Expected::Identifier,
                found,
            }),
            None => Err(ParseError::ExpectedAtEof {
                context,
                keyword,
                expected: Expected::Identifier,
            }),
        }
    }
}
