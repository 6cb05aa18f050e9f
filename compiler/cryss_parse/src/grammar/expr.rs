//! Expression parsing.
//!
//! `binary(level)` parses operators of precedence `level` and tighter. Its
//! operands come from `binary(level - 1)`, bottoming out in `factor`. The
//! assignment level parses its right operand at the same level, which makes
//! it group to the right.

use cryss_ir::{BinaryOp, BracketType, Expr, ExprKind, Range, Token, UnaryOp};
use cryss_lexer::TokenStream;
use cryss_stack::ensure_sufficient_stack;

use crate::{Construct, Expected, ParseError, Parser};

/// Who asked for an operand. Decides the error when none is there.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Want {
    Prefix(UnaryOp, Range),
    Infix(BinaryOp, Range),
    /// An item of a list opened by the bracket at the range.
    Item(BracketType, Range),
    /// An expression inside a keyword construct.
    Construct(Construct, Range),
}

impl Want {
    fn unexpected(self, found: Token) -> ParseError {
        match self {
            Want::Prefix(op, operator) => ParseError::UnexpectedTokenAfterPrefix {
                op,
                operator,
                found,
            },
            Want::Infix(op, operator) => ParseError::UnexpectedTokenAfterInfix {
                op,
                operator,
                found,
            },
            Want::Item(bracket, open) => ParseError::ExpectedListItem {
                bracket,
                open,
                found,
            },
            Want::Construct(context, keyword) => ParseError::Expected {
                context,
                keyword,
                expected: Expected::Expression,
                found,
            },
        }
    }

    fn eof(self) -> ParseError {
        match self {
            Want::Prefix(op, operator) => ParseError::UnexpectedEofAfterPrefix { op, operator },
            Want::Infix(op, operator) => ParseError::UnexpectedEofAfterInfix { op, operator },
            Want::Item(bracket, open) => ParseError::UnclosedBracket { bracket, open },
            Want::Construct(context, keyword) => ParseError::ExpectedAtEof {
                context,
                keyword,
                expected: Expected::Expression,
            },
        }
    }
}

/// The first token of an expression, classified.
pub(crate) enum Head {
    Leaf(Expr),
    Prefix(UnaryOp, Range),
    Open(BracketType, Range),
}

impl Head {
    /// Classify `token`, handing it back if no expression starts with it.
    pub(crate) fn classify(token: Token) -> Result<Head, Token> {
        if let Some(op) = token.prefix() {
            return Ok(Head::Prefix(op, token.range));
        }
        if let Some(bracket) = token.opening_bracket_type() {
            return Ok(Head::Open(bracket, token.range));
        }
        token.factor().map(Head::Leaf).ok_or(token)
    }
}

/// What can follow a complete factor.
#[derive(Copy, Clone)]
enum Postfix {
    Suffix(UnaryOp),
    Open(BracketType),
}

impl<S: TokenStream + ?Sized> Parser<'_, S> {
    /// Parse an expression, assignment included. `Ok(None)` at end of
    /// input; a token that starts no expression is reported as
    /// [`ParseError::ExpectedStatement`].
    pub fn parse_expr(&mut self) -> Result<Option<Expr>, ParseError> {
        let Some(first) = self.bump()? else {
            return Ok(None);
        };
        match Head::classify(first) {
            Ok(head) => self.expr_from(head).map(Some),
            Err(found) => Err(ParseError::ExpectedStatement { found }),
        }
    }

    /// Parse an expression, reporting a missing one through `want`.
    pub(crate) fn expr(&mut self, want: Want) -> Result<Expr, ParseError> {
        let head = self.operand(want)?;
        self.expr_from(head)
    }

    /// Parse the rest of an expression whose first token is already
    /// consumed.
    pub(crate) fn expr_from(&mut self, head: Head) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.binary(BinaryOp::LOOSEST, head))
    }

    /// Consume the first token of an operand.
    fn operand(&mut self, want: Want) -> Result<Head, ParseError> {
        match self.bump()? {
            Some(token) => Head::classify(token).map_err(|found| want.unexpected(found)),
            None => Err(want.eof()),
        }
    }

    fn binary(&mut self, level: u8, head: Head) -> Result<Expr, ParseError> {
        if level < BinaryOp::TIGHTEST {
            return self.factor(head);
        }
        let mut left = self.binary(level - 1, head)?;
        while let Some((op, operator)) = self.infix_at(level)? {
            let head = self.operand(Want::Infix(op, operator))?;
            let right = if op.is_right_assoc() {
                ensure_sufficient_stack(|| self.binary(level, head))?
            } else {
                self.binary(level - 1, head)?
            };
            let range = Range::join(left.range, right.range);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                range,
            );
        }
        Ok(left)
    }

    /// Consume an infix operator of exactly precedence `level`.
    fn infix_at(&mut self, level: u8) -> Result<Option<(BinaryOp, Range)>, ParseError> {
        let found = self
            .peek_with(|t| {
                t.infix()
                    .filter(|op| op.precedence() == level)
                    .map(|op| (op, t.range))
            })?
            .flatten();
        if found.is_some() {
            self.bump()?;
        }
        Ok(found)
    }

    /// A leaf, a prefixed factor or a bracketed list, then any postfix
    /// forms.
    fn factor(&mut self, head: Head) -> Result<Expr, ParseError> {
        let base = match head {
            Head::Leaf(expr) => expr,
            Head::Prefix(op, operator) => {
                let operand = self.operand(Want::Prefix(op, operator))?;
                let operand = ensure_sufficient_stack(|| self.factor(operand))?;
                let range = Range::join(operator, operand.range);
                Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    range,
                )
            }
            Head::Open(bracket, open) => {
                let list = ensure_sufficient_stack(|| self.list(bracket, open))?;
                let kind = match bracket {
                    BracketType::Square => ExprKind::List(list.items),
                    // `(e)` groups; `()`, `(e,)` and `(a, b)` are tuples
                    BracketType::Round => match <[Expr; 1]>::try_from(list.items) {
                        Ok([inner]) if !list.trailing_comma => ExprKind::Group(Box::new(inner)),
                        Ok(single) => ExprKind::Tuple(Vec::from(single)),
                        Err(items) => ExprKind::Tuple(items),
                    },
                };
                Expr::new(kind, list.range)
            }
        };
        self.postfix(base)
    }

    /// Suffix operators, call arguments and indices, left to right.
    fn postfix(&mut self, mut expr: Expr) -> Result<Expr, ParseError> {
        loop {
            let next = self
                .peek_with(|t| match (t.suffix(), t.opening_bracket_type()) {
                    (Some(op), _) => Some((Postfix::Suffix(op), t.range)),
                    (None, Some(bracket)) => Some((Postfix::Open(bracket), t.range)),
                    (None, None) => None,
                })?
                .flatten();
            let Some((form, at)) = next else {
                return Ok(expr);
            };
            self.bump()?;
            expr = match form {
                Postfix::Suffix(op) => {
                    let range = Range::join(expr.range, at);
                    Expr::new(
                        ExprKind::Unary {
                            op,
                            operand: Box::new(expr),
                        },
                        range,
                    )
                }
                Postfix::Open(BracketType::Round) => {
                    let args = ensure_sufficient_stack(|| self.list(BracketType::Round, at))?;
                    let range = Range::join(expr.range, args.range);
                    Expr::new(
                        ExprKind::Call {
                            func: Box::new(expr),
                            args: args.items,
                        },
                        range,
                    )
                }
                Postfix::Open(BracketType::Square) => {
                    let list = ensure_sufficient_stack(|| self.list(BracketType::Square, at))?;
                    let index = match <[Expr; 1]>::try_from(list.items) {
                        Ok([index]) => index,
                        Err(items) if items.is_empty() => {
                            return Err(ParseError::EmptyIndex { range: list.range });
                        }
                        Err(items) => {
                            return Err(ParseError::MultipleIndices {
                                range: list.range,
                                count: items.len(),
                            });
                        }
                    };
                    let range = Range::join(expr.range, list.range);
                    Expr::new(
                        ExprKind::Index {
                            base: Box::new(expr),
                            index: Box::new(index),
                        },
                        range,
                    )
                }
            };
        }
    }
}
