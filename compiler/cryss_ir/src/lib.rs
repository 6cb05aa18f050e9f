//! cryss IR - positions, tokens and the syntax tree
//!
//! This crate holds the data shared by every stage of the front end:
//! - [`Pos`], [`Range`] and the [`SourceLog`] they point into
//! - [`Token`] and its query protocol (factor, prefix, suffix, infix, keyword)
//! - The owned AST: [`Expr`], [`Stmt`], [`TopLevel`], [`TypeExpr`]
//! - Number literal evaluation and a tree dump for debugging
//!
//! # Design
//!
//! - **Closed sums**: token and node kinds are enums matched exhaustively.
//! - **Owned trees**: children are boxed, no arena and no sharing.
//! - **Positions by line**: a position names a line of the log and a byte in
//!   that line, so diagnostics can print the line without rescanning.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod number;
mod pos;
mod token;

pub use ast::{
    dump, BinaryOp, Expr, ExprKind, Ident, Param, Stmt, StmtKind, TopLevel, TopLevelKind,
    TypeExpr, TypeExprKind, UnaryOp,
};
pub use number::{parse_number, NumberValue};
pub use pos::{Pos, Range, SourceLog};
pub use token::{BracketType, Keyword, Token, TokenKind};
