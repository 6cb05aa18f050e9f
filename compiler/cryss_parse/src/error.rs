//! Parse error types.
//!
//! Every variant names the one expectation that failed and keeps the
//! ranges that explain it: the offending token plus whatever opened the
//! construct (an operator, a bracket, a keyword). The parser stops at the
//! first error, so there is no recovery state here.

use std::fmt;

use cryss_diagnostic::{Diagnostic, ErrorCode};
use cryss_ir::{BinaryOp, BracketType, Range, Token, UnaryOp};
use cryss_lexer::LexError;
use thiserror::Error;

/// Keyword-led construct being parsed when an expectation failed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Construct {
    If,
    While,
    Break,
    Continue,
    Return,
    Let,
    Def,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Construct::If => "`if` statement",
            Construct::While => "`while` loop",
            Construct::Break => "`break` statement",
            Construct::Continue => "`continue` statement",
            Construct::Return => "`return` statement",
            Construct::Let => "`let` declaration",
            Construct::Def => "definition",
        })
    }
}

/// What the parser required at the point of failure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expected {
    Expression,
    Statement,
    Identifier,
    Type,
    OpenParen,
    CloseParen,
    Semicolon,
    Assign,
    /// `=` or `{` after a definition signature
    Body,
    /// `,` or the closing bracket of the given type
    Separator(BracketType),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Expression => f.write_str("an expression"),
            Expected::Statement => f.write_str("a statement"),
            Expected::Identifier => f.write_str("an identifier"),
            Expected::Type => f.write_str("a type"),
            Expected::OpenParen => f.write_str("`(`"),
            Expected::CloseParen => f.write_str("`)`"),
            Expected::Semicolon => f.write_str("`;`"),
            Expected::Assign => f.write_str("`=`"),
            Expected::Body => f.write_str("`=` or `{`"),
            Expected::Separator(bracket) => write!(f, "`,` or `{}`", bracket.close()),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(
        "unexpected token `{found}` at {} after prefix `{}`",
        .found.range,
        .op.as_symbol()
    )]
    UnexpectedTokenAfterPrefix {
        op: UnaryOp,
        operator: Range,
        found: Token,
    },

    #[error("unexpected end of input after prefix `{}` at {operator}", .op.as_symbol())]
    UnexpectedEofAfterPrefix { op: UnaryOp, operator: Range },

    #[error(
        "unexpected token `{found}` at {} after infix `{}`",
        .found.range,
        .op.as_symbol()
    )]
    UnexpectedTokenAfterInfix {
        op: BinaryOp,
        operator: Range,
        found: Token,
    },

    #[error("unexpected end of input after infix `{}` at {operator}", .op.as_symbol())]
    UnexpectedEofAfterInfix { op: BinaryOp, operator: Range },

    #[error("unclosed bracket `{}` at {open}", .bracket.open())]
    UnclosedBracket { bracket: BracketType, open: Range },

    /// `bracket` is the opening type; the closing one is the other type.
    #[error(
        "mismatched brackets: `{}` at {open} closed by `{}` at {close}",
        .bracket.open(),
        .bracket.other().close()
    )]
    MismatchedBracket {
        bracket: BracketType,
        open: Range,
        close: Range,
    },

    #[error(
        "expected `,` or `{}` after list item, found `{found}` at {}",
        .bracket.close(),
        .found.range
    )]
    ExpectedListSeparator {
        bracket: BracketType,
        open: Range,
        found: Token,
    },

    #[error("empty list item before `,` at {comma}")]
    EmptyListItem { comma: Range },

    #[error("empty index at {range}")]
    EmptyIndex { range: Range },

    #[error("{count} indices at {range}")]
    MultipleIndices { range: Range, count: usize },

    #[error("expected `;` after expression, found `{found}` at {}", .found.range)]
    ExpectedSemicolon { expr: Range, found: Token },

    #[error("unexpected end of input after expression at {expr}")]
    UnexpectedEofAfterExpression { expr: Range },

    #[error("expected statement, found `{found}` at {}", .found.range)]
    ExpectedStatement { found: Token },

    #[error("unclosed block `{{` at {open}")]
    UnclosedBlock { open: Range },

    /// `keyword` is the range of the keyword that opened `context`.
    #[error("expected {expected} in {context}, found `{found}` at {}", .found.range)]
    Expected {
        context: Construct,
        keyword: Range,
        expected: Expected,
        found: Token,
    },

    #[error("unexpected end of input in {context} at {keyword}: expected {expected}")]
    ExpectedAtEof {
        context: Construct,
        keyword: Range,
        expected: Expected,
    },

    #[error(
        "expected list item or `{}`, found `{found}` at {}",
        .bracket.close(),
        .found.range
    )]
    ExpectedListItem {
        bracket: BracketType,
        open: Range,
        found: Token,
    },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::UnexpectedTokenAfterPrefix { .. } => ErrorCode::E1001,
            ParseError::UnexpectedEofAfterPrefix { .. } => ErrorCode::E1002,
            ParseError::UnexpectedTokenAfterInfix { .. } => ErrorCode::E1003,
            ParseError::UnexpectedEofAfterInfix { .. } => ErrorCode::E1004,
            ParseError::UnclosedBracket { .. } => ErrorCode::E1005,
            ParseError::MismatchedBracket { .. } => ErrorCode::E1006,
            ParseError::ExpectedListSeparator { .. } => ErrorCode::E1007,
            ParseError::EmptyListItem { .. } => ErrorCode::E1008,
            ParseError::EmptyIndex { .. } => ErrorCode::E1009,
            ParseError::MultipleIndices { .. } => ErrorCode::E1010,
            ParseError::ExpectedSemicolon { .. } => ErrorCode::E1011,
            ParseError::UnexpectedEofAfterExpression { .. } => ErrorCode::E1012,
            ParseError::ExpectedStatement { .. } => ErrorCode::E1013,
            ParseError::UnclosedBlock { .. } => ErrorCode::E1014,
            ParseError::Expected { .. } => ErrorCode::E1015,
            ParseError::ExpectedAtEof { .. } => ErrorCode::E1016,
            ParseError::ExpectedListItem { .. } => ErrorCode::E1017,
        }
    }

    /// The primary location of the error.
    pub fn range(&self) -> Option<Range> {
        match self {
            ParseError::Lex(err) => err.range(),
            ParseError::UnexpectedTokenAfterPrefix { found, .. }
            | ParseError::UnexpectedTokenAfterInfix { found, .. }
            | ParseError::ExpectedListSeparator { found, .. }
            | ParseError::ExpectedSemicolon { found, .. }
            | ParseError::ExpectedStatement { found }
            | ParseError::Expected { found, .. }
            | ParseError::ExpectedListItem { found, .. } => Some(found.range),
            ParseError::UnexpectedEofAfterPrefix { operator, .. }
            | ParseError::UnexpectedEofAfterInfix { operator, .. } => Some(*operator),
            ParseError::UnclosedBracket { open, .. } | ParseError::UnclosedBlock { open } => {
                Some(*open)
            }
            ParseError::MismatchedBracket { close, .. } => Some(*close),
            ParseError::EmptyListItem { comma } => Some(*comma),
            ParseError::EmptyIndex { range } | ParseError::MultipleIndices { range, .. } => {
                Some(*range)
            }
            ParseError::UnexpectedEofAfterExpression { expr } => Some(*expr),
            ParseError::ExpectedAtEof { keyword, .. } => Some(*keyword),
        }
    }

    /// Convert to a renderable diagnostic.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        if let ParseError::Lex(err) = self {
            return err.to_diagnostic();
        }
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ParseError::Lex(_) => diag,
            ParseError::UnexpectedTokenAfterPrefix { op, operator, found } => diag
                .with_label(found.range, "expected an operand here")
                .with_secondary_label(*operator, format!("{} operator", op.name())),
            ParseError::UnexpectedEofAfterPrefix { op, operator } => diag.with_label(
                *operator,
                format!("{} operator has no operand", op.name()),
            ),
            ParseError::UnexpectedTokenAfterInfix { op, operator, found } => diag
                .with_label(found.range, "expected an operand here")
                .with_secondary_label(*operator, format!("{} operator", op.name())),
            ParseError::UnexpectedEofAfterInfix { op, operator } => diag.with_label(
                *operator,
                format!("{} operator has no right operand", op.name()),
            ),
            ParseError::UnclosedBracket { bracket, open } => diag
                .with_label(*open, "this bracket is never closed")
                .with_suggestion(format!("add a closing `{}`", bracket.close())),
            ParseError::MismatchedBracket {
                bracket,
                open,
                close,
            } => diag
                .with_label(*close, format!("expected `{}`", bracket.close()))
                .with_secondary_label(*open, "opened here"),
            ParseError::ExpectedListSeparator { bracket, open, found } => diag
                .with_label(
                    found.range,
                    format!("expected `,` or `{}`", bracket.close()),
                )
                .with_secondary_label(*open, "list opened here"),
            ParseError::EmptyListItem { comma } => diag
                .with_label(*comma, "nothing before this comma")
                .with_suggestion("remove the extra `,`"),
            ParseError::EmptyIndex { range } => diag
                .with_label(*range, "no index given")
                .with_note("an index is written like `a[i]`"),
            ParseError::MultipleIndices { range, .. } => diag
                .with_label(*range, "only one index is allowed")
                .with_note("index once per dimension, like `a[i][j]`"),
            ParseError::ExpectedSemicolon { expr, found } => diag
                .with_label(found.range, "expected `;`")
                .with_secondary_label(*expr, "after this expression")
                .with_suggestion("add `;` at the end of the statement"),
            ParseError::UnexpectedEofAfterExpression { expr } => diag
                .with_label(*expr, "this expression is not terminated")
                .with_suggestion("add `;` at the end of the statement"),
            ParseError::ExpectedStatement { found } => {
                diag.with_label(found.range, "no statement starts here")
            }
            ParseError::UnclosedBlock { open } => diag
                .with_label(*open, "this block is never closed")
                .with_suggestion("add a closing `}`"),
            ParseError::Expected {
                context,
                keyword,
                expected,
                found,
            } => diag
                .with_label(found.range, format!("expected {expected}"))
                .with_secondary_label(*keyword, format!("in this {context}")),
            ParseError::ExpectedAtEof {
                context,
                keyword,
                expected,
            } => diag.with_label(*keyword, format!("{context} needs {expected}")),
            ParseError::ExpectedListItem { bracket, open, found } => diag
                .with_label(found.range, "not an expression")
                .with_secondary_label(*open, format!("`{}` opened here", bracket.open())),
        }
    }
}
