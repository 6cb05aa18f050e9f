//! Indented tree dump of the AST.
//!
//! One node per line, prefixed by its range. Compound statements close with
//! an `end ...` line at their own depth. Output of `cryss parse`.

use cryss_stack::ensure_sufficient_stack;

use super::{Expr, ExprKind, Param, Stmt, StmtKind, TopLevel, TopLevelKind, TypeExpr, TypeExprKind};
use crate::Range;

pub fn top_level(item: &TopLevel) -> String {
    let mut printer = Printer::default();
    printer.top_level(item, 0);
    printer.out
}

pub fn stmt(stmt: &Stmt) -> String {
    let mut printer = Printer::default();
    printer.stmt(stmt, 0);
    printer.out
}

pub fn expr(expr: &Expr) -> String {
    let mut printer = Printer::default();
    printer.expr(expr, 0);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    fn label(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn node(&mut self, depth: usize, range: Range, text: &str) {
        self.label(depth, &format!("{range} {text}"));
    }

    fn top_level(&mut self, item: &TopLevel, depth: usize) {
        match &item.kind {
            TopLevelKind::Stmt(stmt) => self.stmt(stmt, depth),
            TopLevelKind::DefExpr {
                name,
                params,
                ret_type,
                body,
            } => {
                self.node(depth, item.range, &format!("definition({})", name.name));
                self.signature(params, ret_type.as_ref(), depth);
                self.label(depth, "body:");
                self.expr(body, depth + 1);
                self.label(depth, "end definition");
            }
            TopLevelKind::DefBlock {
                name,
                params,
                ret_type,
                body,
            } => {
                self.node(depth, item.range, &format!("definition({})", name.name));
                self.signature(params, ret_type.as_ref(), depth);
                self.label(depth, "body:");
                for stmt in body {
                    self.stmt(stmt, depth + 1);
                }
                self.label(depth, "end definition");
            }
        }
    }

    fn signature(&mut self, params: &[Param], ret_type: Option<&TypeExpr>, depth: usize) {
        self.label(depth, &format!("params({}):", params.len()));
        for param in params {
            self.node(depth + 1, param.range, &format!("parameter({})", param.name.name));
            if let Some(ty) = &param.ty {
                self.ty(ty, depth + 2);
            }
        }
        if let Some(ty) = ret_type {
            self.label(depth, "returns:");
            self.ty(ty, depth + 1);
        }
    }

    fn ty(&mut self, ty: &TypeExpr, depth: usize) {
        ensure_sufficient_stack(|| match &ty.kind {
            TypeExprKind::Named(name) => self.node(depth, ty.range, &format!("type({name})")),
            TypeExprKind::Applied { name, args } => {
                self.node(depth, ty.range, &format!("type({})", name.name));
                for arg in args {
                    self.ty(arg, depth + 1);
                }
            }
            TypeExprKind::Tuple(elems) => {
                self.node(depth, ty.range, &format!("tuple type({})", elems.len()));
                for elem in elems {
                    self.ty(elem, depth + 1);
                }
            }
        });
    }

    fn stmt(&mut self, stmt: &Stmt, depth: usize) {
        let range = stmt.range;
        ensure_sufficient_stack(|| match &stmt.kind {
            StmtKind::Expr(Some(expr)) => {
                self.node(depth, range, "expression statement");
                self.expr(expr, depth + 1);
            }
            StmtKind::Expr(None) => self.node(depth, range, "expression statement (empty)"),
            StmtKind::Decl { name, ty, init } => {
                self.node(depth, range, &format!("declaration({})", name.name));
                if let Some(ty) = ty {
                    self.ty(ty, depth + 1);
                }
                self.expr(init, depth + 1);
            }
            StmtKind::Break => self.node(depth, range, "break"),
            StmtKind::Continue => self.node(depth, range, "continue"),
            StmtKind::Return(value) => {
                self.node(depth, range, "return");
                if let Some(value) = value {
                    self.expr(value, depth + 1);
                }
            }
            StmtKind::Block(stmts) => {
                self.node(depth, range, "block");
                for stmt in stmts {
                    self.stmt(stmt, depth + 1);
                }
                self.label(depth, "end block");
            }
            StmtKind::While { cond, body } => {
                self.node(depth, range, "while");
                self.expr(cond, depth + 1);
                self.label(depth, "do");
                self.stmt(body, depth + 1);
                self.label(depth, "end while");
            }
            StmtKind::If { cond, then, else_ } => {
                self.node(depth, range, "if");
                self.expr(cond, depth + 1);
                self.label(depth, "then");
                self.stmt(then, depth + 1);
                if let Some(else_) = else_ {
                    self.label(depth, "else");
                    self.stmt(else_, depth + 1);
                }
                self.label(depth, "end if");
            }
        });
    }

    fn expr(&mut self, expr: &Expr, depth: usize) {
        let range = expr.range;
        ensure_sufficient_stack(|| match &expr.kind {
            ExprKind::Identifier(name) => self.node(depth, range, &format!("identifier({name})")),
            ExprKind::Number(raw) => self.node(depth, range, &format!("number({raw})")),
            ExprKind::String(value) => self.node(depth, range, &format!("string({value:?})")),
            ExprKind::Call { func, args } => {
                self.node(depth, range, "call");
                self.expr(func, depth + 1);
                self.label(depth, &format!("args({}):", args.len()));
                for arg in args {
                    self.expr(arg, depth + 1);
                }
            }
            ExprKind::Unary { op, operand } => {
                self.node(depth, range, &format!("unary operation({})", op.name()));
                self.expr(operand, depth + 1);
            }
            ExprKind::Binary { op, left, right } => {
                self.node(depth, range, &format!("binary operation({})", op.name()));
                self.expr(left, depth + 1);
                self.expr(right, depth + 1);
            }
            ExprKind::Index { base, index } => {
                self.node(depth, range, "index");
                self.expr(base, depth + 1);
                self.expr(index, depth + 1);
            }
            ExprKind::Group(inner) => {
                self.node(depth, range, "group");
                self.expr(inner, depth + 1);
            }
            ExprKind::List(elems) => {
                self.node(depth, range, &format!("list({})", elems.len()));
                for elem in elems {
                    self.expr(elem, depth + 1);
                }
            }
            ExprKind::Tuple(elems) => {
                self.node(depth, range, &format!("tuple({})", elems.len()));
                for elem in elems {
                    self.expr(elem, depth + 1);
                }
            }
        });
    }
}
