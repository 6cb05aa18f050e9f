//! Type annotation parsing: `name`, `name[T, ...]` and `(T, ...)`.

use cryss_ir::{BracketType, Ident, Keyword, Range, Token, TokenKind, TypeExpr, TypeExprKind};
use cryss_lexer::TokenStream;
use cryss_stack::ensure_sufficient_stack;

use crate::{Construct, Expected, ParseError, Parser};

impl<S: TokenStream + ?Sized> Parser<'_, S> {
    /// Parse a type inside the construct opened by `keyword`.
    pub(crate) fn type_expr(
        &mut self,
        context: Construct,
        keyword: Range,
    ) -> Result<TypeExpr, ParseError> {
        ensure_sufficient_stack(|| self.type_expr_inner(context, keyword))
    }

    fn type_expr_inner(
        &mut self,
        context: Construct,
        keyword: Range,
    ) -> Result<TypeExpr, ParseError> {
        match self.bump()? {
            Some(Token {
                kind: TokenKind::Identifier(name),
                range,
            }) if Keyword::lookup(&name).is_none() => {
                let applied = self
                    .bump_if(|t| t.opening_bracket_type() == Some(BracketType::Square))?
                    .is_some();
                if !applied {
                    return Ok(TypeExpr::new(TypeExprKind::Named(name), range));
                }
                let (args, close) = self.type_list(BracketType::Square, context, keyword)?;
                Ok(TypeExpr::new(
                    TypeExprKind::Applied {
                        name: Ident::new(name, range),
                        args,
                    },
                    Range::join(range, close),
                ))
            }
            Some(open) if open.opening_bracket_type() == Some(BracketType::Round) => {
                let (elems, close) = self.type_list(BracketType::Round, context, keyword)?;
                Ok(TypeExpr::new(
                    TypeExprKind::Tuple(elems),
                    Range::join(open.range, close),
                ))
            }
            Some(found) => Err(ParseError::Expected {
                context,
                keyword,
                expected: Expected::Type,
                found,
            }),
            None => Err(ParseError::ExpectedAtEof {
                context,
                keyword,
                expected: Expected::Type,
            }),
        }
    }

    /// Comma-separated types up to the closing `bracket`. Returns the
    /// closing bracket's range.
    fn type_list(
        &mut self,
        bracket: BracketType,
        context: Construct,
        keyword: Range,
    ) -> Result<(Vec<TypeExpr>, Range), ParseError> {
        let mut items = Vec::new();
        if let Some(close) = self.bump_if(|t| t.closing_bracket_type() == Some(bracket))? {
            return Ok((items, close.range));
        }
        loop {
            items.push(self.type_expr(context, keyword)?);
            let separator = self.expect(context, keyword, Expected::Separator(bracket), |t| {
                t.is_comma() || t.closing_bracket_type() == Some(bracket)
            })?;
            if !separator.is_comma() {
                return Ok((items, separator.range));
            }
        }
    }
}
