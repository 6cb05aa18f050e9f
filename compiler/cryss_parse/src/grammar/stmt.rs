//! Statement parsing.

use cryss_ir::{BracketType, Expr, Keyword, Range, Stmt, StmtKind, Token};
use cryss_lexer::TokenStream;

use super::expr::{Head, Want};
use crate::{Construct, Expected, ParseError, Parser};

impl<S: TokenStream + ?Sized> Parser<'_, S> {
    /// Dispatch on the first token. `Ok(None)` at end of input.
    pub(crate) fn statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        let Some(first) = self.bump()? else {
            return Ok(None);
        };
        let keyword = first.range;
        let stmt = match first.keyword() {
            Some(Keyword::If) => self.if_stmt(keyword)?,
            Some(Keyword::While) => self.while_stmt(keyword)?,
            Some(Keyword::Break) => self.jump(Construct::Break, keyword, StmtKind::Break)?,
            Some(Keyword::Continue) => {
                self.jump(Construct::Continue, keyword, StmtKind::Continue)?
            }
            Some(Keyword::Return) => self.return_stmt(keyword)?,
            Some(Keyword::Let) => self.let_stmt(keyword)?,
            Some(Keyword::Else | Keyword::Def) => {
                return Err(ParseError::ExpectedStatement { found: first });
            }
            None if first.is_semicolon() => Stmt::new(StmtKind::Expr(None), first.range),
            None if first.is_opening_brace() => {
                let (stmts, range) = self.block(first.range)?;
                Stmt::new(StmtKind::Block(stmts), range)
            }
            None => match Head::classify(first) {
                Ok(head) => self.expr_stmt(head)?,
                Err(found) => return Err(ParseError::ExpectedStatement { found }),
            },
        };
        Ok(Some(stmt))
    }

    /// Statements up to the `}` matching the `{` at `open`. Returns them
    /// with the range from brace to brace.
    pub(crate) fn block(&mut self, open: Range) -> Result<(Vec<Stmt>, Range), ParseError> {
        let mut stmts = Vec::new();
        loop {
            if let Some(close) = self.bump_if(Token::is_closing_brace)? {
                return Ok((stmts, Range::join(open, close.range)));
            }
            match self.parse_statement()? {
                Some(stmt) => stmts.push(stmt),
                None => return Err(ParseError::UnclosedBlock { open }),
            }
        }
    }

    fn expr_stmt(&mut self, head: Head) -> Result<Stmt, ParseError> {
        let expr = self.expr_from(head)?;
        match self.bump()? {
            Some(semi) if semi.is_semicolon() => {
                let range = Range::join(expr.range, semi.range);
                Ok(Stmt::new(StmtKind::Expr(Some(expr)), range))
            }
            Some(found) => Err(ParseError::ExpectedSemicolon {
                expr: expr.range,
                found,
            }),
            None => Err(ParseError::UnexpectedEofAfterExpression { expr: expr.range }),
        }
    }

    /// `( cond )` after `if` or `while`.
    fn condition(&mut self, context: Construct, keyword: Range) -> Result<Expr, ParseError> {
        self.expect(context, keyword, Expected::OpenParen, |t| {
            t.opening_bracket_type() == Some(BracketType::Round)
        })?;
        let cond = self.expr(Want::Construct(context, keyword))?;
        self.expect(context, keyword, Expected::CloseParen, |t| {
            t.closing_bracket_type() == Some(BracketType::Round)
        })?;
        Ok(cond)
    }

    /// The statement governed by `if`, `else` or `while`.
    fn body(&mut self, context: Construct, keyword: Range) -> Result<Stmt, ParseError> {
        self.parse_statement()?.ok_or(ParseError::ExpectedAtEof {
            context,
            keyword,
            expected: Expected::Statement,
        })
    }

    fn if_stmt(&mut self, keyword: Range) -> Result<Stmt, ParseError> {
        let cond = self.condition(Construct::If, keyword)?;
        let then = self.body(Construct::If, keyword)?;
        // `else` binds to the nearest `if`
        let else_ = match self.bump_if(|t| t.is_keyword(Keyword::Else))? {
            Some(_) => Some(Box::new(self.body(Construct::If, keyword)?)),
            None => None,
        };
        let end = else_.as_ref().map_or(then.range, |stmt| stmt.range);
        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then: Box::new(then),
                else_,
            },
            Range::join(keyword, end),
        ))
    }

    fn while_stmt(&mut self, keyword: Range) -> Result<Stmt, ParseError> {
        let cond = self.condition(Construct::While, keyword)?;
        let body = self.body(Construct::While, keyword)?;
        let range = Range::join(keyword, body.range);
        Ok(Stmt::new(
            StmtKind::While {
                cond,
                body: Box::new(body),
            },
            range,
        ))
    }

    /// `break ;` and `continue ;`
    fn jump(
        &mut self,
        context: Construct,
        keyword: Range,
        kind: StmtKind,
    ) -> Result<Stmt, ParseError> {
        let semi = self.expect(context, keyword, Expected::Semicolon, Token::is_semicolon)?;
        Ok(Stmt::new(kind, Range::join(keyword, semi.range)))
    }

    /// `return ;` or `return expr ;`
    fn return_stmt(&mut self, keyword: Range) -> Result<Stmt, ParseError> {
        if let Some(semi) = self.bump_if(Token::is_semicolon)? {
            return Ok(Stmt::new(
                StmtKind::Return(None),
                Range::join(keyword, semi.range),
            ));
        }
        let value = self.expr(Want::Construct(Construct::Return, keyword))?;
        let semi = self.expect(
            Construct::Return,
            keyword,
            Expected::Semicolon,
            Token::is_semicolon,
        )?;
        Ok(Stmt::new(
            StmtKind::Return(Some(value)),
            Range::join(keyword, semi.range),
        ))
    }

    /// `let name [: type] = init ;`
    fn let_stmt(&mut self, keyword: Range) -> Result<Stmt, ParseError> {
        let context = Construct::Let;
        let name = self.expect_ident(context, keyword)?;
        let ty = match self.bump_if(Token::is_colon)? {
            Some(_) => Some(self.type_expr(context, keyword)?),
            None => None,
        };
        self.expect(context, keyword, Expected::Assign, Token::is_assign)?;
        let init = self.expr(Want::Construct(context, keyword))?;
        let semi = self.expect(context, keyword, Expected::Semicolon, Token::is_semicolon)?;
        Ok(Stmt::new(
            StmtKind::Decl { name, ty, init },
            Range::join(keyword, semi.range),
        ))
    }
}
