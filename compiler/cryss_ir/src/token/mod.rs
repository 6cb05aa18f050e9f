//! Tokens and the query protocol the parser drives them through.
//!
//! The parser never matches on [`TokenKind`] directly. It asks a token what
//! role it can play: a factor, a prefix or suffix operator, an infix
//! operator, a keyword, a bracket or a separator.

mod kind;


pub use kind::{BracketType, Keyword, TokenKind};

use std::fmt;

use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::Range;

/// A token with its range in the source log.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub range: Range,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, range: Range) -> Self {
        Token { kind, range }
    }

    /// The leaf expression this token stands for, if it is a literal or a
    /// non-keyword identifier.
    pub fn factor(&self) -> Option<Expr> {
        let kind = match &self.kind {
            TokenKind::Identifier(name) if Keyword::lookup(name).is_none() => {
                ExprKind::Identifier(name.clone())
            }
            TokenKind::Number(raw) => ExprKind::Number(raw.clone()),
            TokenKind::StringLit(value) => ExprKind::String(value.clone()),
            _ => return None,
        };
        Some(Expr::new(kind, self.range))
    }

    /// Operator this token denotes in prefix position.
    pub fn prefix(&self) -> Option<UnaryOp> {
        match self.kind {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Minus),
            TokenKind::Slash => Some(UnaryOp::Recip),
            TokenKind::Bang => Some(UnaryOp::LogicalNot),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::PlusPlus => Some(UnaryOp::PreInc),
            TokenKind::MinusMinus => Some(UnaryOp::PreDec),
            _ => None,
        }
    }

    /// Operator this token denotes in suffix position.
    pub fn suffix(&self) -> Option<UnaryOp> {
        match self.kind {
            TokenKind::PlusPlus => Some(UnaryOp::PostInc),
            TokenKind::MinusMinus => Some(UnaryOp::PostDec),
            _ => None,
        }
    }

    /// Operator this token denotes between two operands.
    pub fn infix(&self) -> Option<BinaryOp> {
        let op = match self.kind {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Rem,
            TokenKind::Shl => BinaryOp::LeftShift,
            TokenKind::Shr => BinaryOp::RightShift,
            TokenKind::TripleGt => BinaryOp::ForwardShift,
            TokenKind::TripleLt => BinaryOp::BackwardShift,
            TokenKind::EqEq => BinaryOp::Equal,
            TokenKind::NotEq => BinaryOp::NotEqual,
            TokenKind::Lt => BinaryOp::Less,
            TokenKind::LtEq => BinaryOp::LessEqual,
            TokenKind::Gt => BinaryOp::Greater,
            TokenKind::GtEq => BinaryOp::GreaterEqual,
            TokenKind::AmpAmp => BinaryOp::LogicalAnd,
            TokenKind::PipePipe => BinaryOp::LogicalOr,
            TokenKind::Amp => BinaryOp::BitAnd,
            TokenKind::Pipe => BinaryOp::BitOr,
            TokenKind::Caret => BinaryOp::BitXor,
            TokenKind::Eq => BinaryOp::Assign,
            TokenKind::PlusEq => BinaryOp::AddAssign,
            TokenKind::MinusEq => BinaryOp::SubAssign,
            TokenKind::StarEq => BinaryOp::MulAssign,
            TokenKind::SlashEq => BinaryOp::DivAssign,
            TokenKind::PercentEq => BinaryOp::RemAssign,
            TokenKind::AmpEq => BinaryOp::BitAndAssign,
            TokenKind::PipeEq => BinaryOp::BitOrAssign,
            TokenKind::CaretEq => BinaryOp::BitXorAssign,
            TokenKind::ShlEq => BinaryOp::LeftShiftAssign,
            TokenKind::ShrEq => BinaryOp::RightShiftAssign,
            TokenKind::TripleGtEq => BinaryOp::ForwardShiftAssign,
            TokenKind::TripleLtEq => BinaryOp::BackwardShiftAssign,
            _ => return None,
        };
        Some(op)
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Identifier(name) => Keyword::lookup(name),
            _ => None,
        }
    }

    #[inline]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }

    pub fn opening_bracket_type(&self) -> Option<BracketType> {
        match self.kind {
            TokenKind::LParen => Some(BracketType::Round),
            TokenKind::LBracket => Some(BracketType::Square),
            _ => None,
        }
    }

    pub fn closing_bracket_type(&self) -> Option<BracketType> {
        match self.kind {
            TokenKind::RParen => Some(BracketType::Round),
            TokenKind::RBracket => Some(BracketType::Square),
            _ => None,
        }
    }

    #[inline]
    pub fn is_comma(&self) -> bool {
        self.kind == TokenKind::Comma
    }

    #[inline]
    pub fn is_semicolon(&self) -> bool {
        self.kind == TokenKind::Semicolon
    }

    #[inline]
    pub fn is_colon(&self) -> bool {
        self.kind == TokenKind::Colon
    }

    #[inline]
    pub fn is_assign(&self) -> bool {
        self.kind == TokenKind::Eq
    }

    #[inline]
    pub fn is_opening_brace(&self) -> bool {
        self.kind == TokenKind::LBrace
    }

    #[inline]
    pub fn is_closing_brace(&self) -> bool {
        self.kind == TokenKind::RBrace
    }

    /// Plain identifier that is not a keyword.
    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(name) if Keyword::lookup(name).is_none() => Some(name),
            _ => None,
        }
    }

    /// Can begin an expression: a factor, a prefix operator or an opening
    /// bracket.
    pub fn starts_expr(&self) -> bool {
        let leaf = match &self.kind {
            TokenKind::Identifier(name) => Keyword::lookup(name).is_none(),
            TokenKind::Number(_) | TokenKind::StringLit(_) => true,
            _ => false,
        };
        leaf || self.prefix().is_some() || self.opening_bracket_type().is_some()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.range)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
