//! Definition parsing.
//!
//! ```text
//! def name ( params ) [: type] = expr ;
//! def name ( params ) [: type] { stmts }
//! ```

use cryss_ir::{BracketType, Param, Range, Token, TopLevel, TopLevelKind};
use cryss_lexer::TokenStream;

use super::expr::Want;
use crate::{Construct, Expected, ParseError, Parser};

const DEF: Construct = Construct::Def;

impl<S: TokenStream + ?Sized> Parser<'_, S> {
    /// Everything after `def`, whose range is `keyword`.
    pub(crate) fn definition(&mut self, keyword: Range) -> Result<TopLevel, ParseError> {
        let name = self.expect_ident(DEF, keyword)?;
        self.expect(DEF, keyword, Expected::OpenParen, |t| {
            t.opening_bracket_type() == Some(BracketType::Round)
        })?;
        let params = self.params(keyword)?;
        let ret_type = match self.bump_if(Token::is_colon)? {
            Some(_) => Some(self.type_expr(DEF, keyword)?),
            None => None,
        };

        match self.bump()? {
            Some(token) if token.is_assign() => {
                let body = self.expr(Want::Construct(DEF, keyword))?;
                let semi = self.expect(DEF, keyword, Expected::Semicolon, Token::is_semicolon)?;
                Ok(TopLevel::new(
                    TopLevelKind::DefExpr {
                        name,
                        params,
                        ret_type,
                        body,
                    },
                    Range::join(keyword, semi.range),
                ))
            }
            Some(token) if token.is_opening_brace() => {
                let (body, range) = self.block(token.range)?;
                Ok(TopLevel::new(
                    TopLevelKind::DefBlock {
                        name,
                        params,
                        ret_type,
                        body,
                    },
                    Range::join(keyword, range),
                ))
            }
            Some(found) => Err(ParseError::Expected {
                context: DEF,
                keyword,
                expected: Expected::Body,
                found,
            }),
            None => Err(ParseError::ExpectedAtEof {
                context: DEF,
                keyword,
                expected: Expected::Body,
            }),
        }
    }

    /// `name [: type]` items up to `)`, opening `(` already consumed.
    fn params(&mut self, keyword: Range) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        if self
            .bump_if(|t| t.closing_bracket_type() == Some(BracketType::Round))?
            .is_some()
        {
            return Ok(params);
        }
        loop {
            let name = self.expect_ident(DEF, keyword)?;
            let ty = match self.bump_if(Token::is_colon)? {
                Some(_) => Some(self.type_expr(DEF, keyword)?),
                None => None,
            };
            let range = ty
                .as_ref()
                .map_or(name.range, |ty| Range::join(name.range, ty.range));
            params.push(Param { name, ty, range });

            let separator = self.expect(
                DEF,
                keyword,
                Expected::Separator(BracketType::Round),
                |t| t.is_comma() || t.closing_bracket_type() == Some(BracketType::Round),
            )?;
            if !separator.is_comma() {
                return Ok(params);
            }
        }
    }
}
