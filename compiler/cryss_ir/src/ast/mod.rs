//! Abstract syntax tree.
//!
//! Every node carries the [`Range`] of its full source extent, including the
//! tokens that enclose it: a `Group` covers both parentheses, a call covers
//! its closing `)`, and a `while` covers its body.
//!
//! Nodes own their children outright. The tree is built once by the parser
//! and never mutated afterwards. Nodes cannot be destructured by value; use
//! `into_kind` to consume one.

pub mod dump;
mod operators;
mod teardown;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

pub use operators::{BinaryOp, UnaryOp};

use crate::Range;

/// A name at a declaration site (`let x`, `def f`, a parameter).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub name: String,
    pub range: Range,
}

impl Ident {
    pub fn new(name: impl Into<String>, range: Range) -> Self {
        Ident {
            name: name.into(),
            range,
        }
    }
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub range: Range,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, range: Range) -> Self {
        Expr { kind, range }
    }
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Variable reference: `x`
    Identifier(String),
    /// Numeric literal, kept as written: `42`, `0x1f`, `1.5e3`
    Number(String),
    /// String literal with escapes already decoded
    String(String),
    /// Call: `f(a, b)`
    Call { func: Box<Expr>, args: Vec<Expr> },
    /// Prefix or suffix operation: `-x`, `x++`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Binary operation: `a + b`, `x = 1`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Subscript: `xs[i]`
    Index { base: Box<Expr>, index: Box<Expr> },
    /// List literal: `[1, 2, 3]`
    List(Vec<Expr>),
    /// Tuple literal: `()`, `(x,)`, `(x, y)`
    Tuple(Vec<Expr>),
    /// Parenthesized expression: `(x)`
    Group(Box<Expr>),
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub range: Range,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, range: Range) -> Self {
        Stmt { kind, range }
    }
}

/// Statement variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `expr;`, or the empty statement `;` when `None`
    Expr(Option<Expr>),
    /// `let name: type = init;`
    Decl {
        name: Ident,
        ty: Option<TypeExpr>,
        init: Expr,
    },
    Break,
    Continue,
    /// `return;` or `return expr;`
    Return(Option<Expr>),
    /// `{ stmts }`
    Block(Vec<Stmt>),
    /// `while (cond) body`
    While { cond: Expr, body: Box<Stmt> },
    /// `if (cond) then else otherwise`
    If {
        cond: Expr,
        then: Box<Stmt>,
        else_: Option<Box<Stmt>>,
    },
}

/// A unit produced by one call to the parser's top-level entry.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TopLevel {
    pub kind: TopLevelKind,
    pub range: Range,
}

impl TopLevel {
    #[inline]
    pub fn new(kind: TopLevelKind, range: Range) -> Self {
        TopLevel { kind, range }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TopLevelKind {
    Stmt(Stmt),
    /// `def name(params): type = body;`
    DefExpr {
        name: Ident,
        params: Vec<Param>,
        ret_type: Option<TypeExpr>,
        body: Expr,
    },
    /// `def name(params): type { body }`
    DefBlock {
        name: Ident,
        params: Vec<Param>,
        ret_type: Option<TypeExpr>,
        body: Vec<Stmt>,
    },
}

/// Definition parameter: `name` or `name: type`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Ident,
    pub ty: Option<TypeExpr>,
    pub range: Range,
}

/// A type as written in an annotation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeExpr {
    pub kind: TypeExprKind,
    pub range: Range,
}

impl TypeExpr {
    #[inline]
    pub fn new(kind: TypeExprKind, range: Range) -> Self {
        TypeExpr { kind, range }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExprKind {
    /// `int`
    Named(String),
    /// `sound[float]`
    Applied { name: Ident, args: Vec<TypeExpr> },
    /// `(int, float)`; `()` is the empty tuple
    Tuple(Vec<TypeExpr>),
}
