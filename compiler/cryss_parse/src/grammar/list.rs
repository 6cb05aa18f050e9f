//! Bracketed lists: call arguments, list and tuple literals, groups and
//! indices all share one loop.

use cryss_ir::{BracketType, Expr, Range, Token};
use cryss_lexer::TokenStream;

use super::expr::Want;
use crate::{ParseError, Parser};

/// Items of a bracketed list, opening bracket already consumed.
pub(crate) struct Bracketed {
    pub(crate) items: Vec<Expr>,
    /// The last item was followed by a comma: `(e,)`.
    pub(crate) trailing_comma: bool,
    /// From the opening to the closing bracket.
    pub(crate) range: Range,
}

impl<S: TokenStream + ?Sized> Parser<'_, S> {
    /// Parse items up to the bracket closing the one at `open`.
    pub(crate) fn list(
        &mut self,
        bracket: BracketType,
        open: Range,
    ) -> Result<Bracketed, ParseError> {
        let mut items = Vec::new();
        let mut trailing_comma = false;
        loop {
            let closing = self
                .peek_with(|t| t.closing_bracket_type().map(|close| (close, t.range)))?
                .flatten();
            if let Some((close, at)) = closing {
                if close != bracket {
                    return Err(ParseError::MismatchedBracket {
                        bracket,
                        open,
                        close: at,
                    });
                }
                self.bump()?;
                return Ok(Bracketed {
                    items,
                    trailing_comma,
                    range: Range::join(open, at),
                });
            }
            if let Some(comma) = self.bump_if(Token::is_comma)? {
                return Err(ParseError::EmptyListItem { comma: comma.range });
            }

            items.push(self.expr(Want::Item(bracket, open))?);
            trailing_comma = false;

            if self.bump_if(Token::is_comma)?.is_some() {
                trailing_comma = true;
            } else if self.peek_with(|t| t.closing_bracket_type().is_some())? != Some(true) {
                return Err(match self.bump()? {
                    Some(found) => ParseError::ExpectedListSeparator {
                        bracket,
                        open,
                        found,
                    },
                    None => ParseError::UnclosedBracket { bracket, open },
                });
            }
        }
    }
}
