//! Non-recursive destruction of syntax trees.
//!
//! The parser accepts nesting as deep as memory allows, and a left-nested
//! chain like `1 + 1 + ... + 1` is built without any recursion at all. The
//! derived drop glue would recurse once per level, so `Expr`, `Stmt` and
//! `TypeExpr` move their children onto a heap work list instead.

use std::mem;

use super::{Expr, ExprKind, Stmt, StmtKind, TypeExpr, TypeExprKind};

/// A node whose children are nodes of the same type.
trait OwnsChildren: Sized {
    /// Move the direct children into `out`, leaving `self` a leaf.
    fn take_children(&mut self, out: &mut Vec<Self>);
}

fn drop_iteratively<N: OwnsChildren>(root: &mut N) {
    let mut pending = Vec::new();
    root.take_children(&mut pending);
    while let Some(mut node) = pending.pop() {
        node.take_children(&mut pending);
    }
}

impl OwnsChildren for Expr {
    fn take_children(&mut self, out: &mut Vec<Self>) {
        match mem::replace(&mut self.kind, ExprKind::Tuple(Vec::new())) {
            ExprKind::Call { func, args } => {
                out.push(*func);
                out.extend(args);
            }
            ExprKind::Unary { operand, .. } | ExprKind::Group(operand) => out.push(*operand),
            ExprKind::Binary { left, right, .. } => {
                out.push(*left);
                out.push(*right);
            }
            ExprKind::Index { base, index } => {
                out.push(*base);
                out.push(*index);
            }
            ExprKind::List(elems) | ExprKind::Tuple(elems) => out.extend(elems),
            ExprKind::Identifier(_) | ExprKind::Number(_) | ExprKind::String(_) => {}
        }
    }
}

impl OwnsChildren for Stmt {
    fn take_children(&mut self, out: &mut Vec<Self>) {
        match mem::replace(&mut self.kind, StmtKind::Break) {
            StmtKind::Block(stmts) => out.extend(stmts),
            StmtKind::While { body, .. } => out.push(*body),
            StmtKind::If { then, else_, .. } => {
                out.push(*then);
                out.extend(else_.map(|stmt| *stmt));
            }
            StmtKind::Expr(_)
            | StmtKind::Decl { .. }
            | StmtKind::Break
            | StmtKind::Continue
            | StmtKind::Return(_) => {}
        }
    }
}

impl OwnsChildren for TypeExpr {
    fn take_children(&mut self, out: &mut Vec<Self>) {
        match mem::replace(&mut self.kind, TypeExprKind::Tuple(Vec::new())) {
            TypeExprKind::Applied { args, .. } | TypeExprKind::Tuple(args) => out.extend(args),
            TypeExprKind::Named(_) => {}
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        drop_iteratively(self);
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        drop_iteratively(self);
    }
}

impl Drop for TypeExpr {
    fn drop(&mut self) {
        drop_iteratively(self);
    }
}

impl Expr {
    /// Take the node's kind, for callers that consume the tree.
    pub fn into_kind(mut self) -> ExprKind {
        mem::replace(&mut self.kind, ExprKind::Tuple(Vec::new()))
    }
}

impl Stmt {
    /// Take the node's kind, for callers that consume the tree.
    pub fn into_kind(mut self) -> StmtKind {
        mem::replace(&mut self.kind, StmtKind::Break)
    }
}

impl TypeExpr {
    /// Take the node's kind, for callers that consume the tree.
    pub fn into_kind(mut self) -> TypeExprKind {
        mem::replace(&mut self.kind, TypeExprKind::Tuple(Vec::new()))
    }
}
