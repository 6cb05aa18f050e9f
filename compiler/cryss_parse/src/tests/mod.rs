//! Parser tests, driven through `parse` on source text.


use crate::{parse, ParseError};
use cryss_ir::{Expr, ExprKind, StmtKind, TopLevel, TopLevelKind};

/// Parse `source`, which must be free of errors.
fn items(source: &str) -> Vec<TopLevel> {
    let output = parse(source);
    assert!(output.error.is_none(), "{source:?}: {:?}", output.error);
    output.items
}

/// The expression of a single expression statement.
fn expr(source: &str) -> Expr {
    let mut items = items(source);
    assert_eq!(items.len(), 1, "{source:?}");
    match items.pop().unwrap().kind {
        TopLevelKind::Stmt(stmt) => match stmt.into_kind() {
            StmtKind::Expr(Some(expr)) => expr,
            other => panic!("not an expression statement: {other:?}"),
        },
        other => panic!("not a statement: {other:?}"),
    }
}

/// The error `source` stops at.
fn error(source: &str) -> ParseError {
    parse(source).error.unwrap()
}

/// Compact prefix form showing the tree shape: `(+ 1 (* 2 3))`.
fn sexpr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Identifier(text) | ExprKind::Number(text) => text.clone(),
        ExprKind::String(value) => format!("{value:?}"),
        ExprKind::Unary { op, operand } if op.is_postfix() => {
            format!("({} {})", sexpr(operand), op.as_symbol())
        }
        ExprKind::Unary { op, operand } => format!("({} {})", op.as_symbol(), sexpr(operand)),
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.as_symbol(), sexpr(left), sexpr(right))
        }
        ExprKind::Call { func, args } => {
            let mut out = format!("(call {}", sexpr(func));
            for arg in args {
                out.push(' ');
                out.push_str(&sexpr(arg));
            }
            out.push(')');
            out
        }
        ExprKind::Index { base, index } => format!("(index {} {})", sexpr(base), sexpr(index)),
        ExprKind::Group(inner) => format!("(group {})", sexpr(inner)),
        ExprKind::List(elems) => seq("list", elems),
        ExprKind::Tuple(elems) => seq("tuple", elems),
    }
}

fn seq(name: &str, elems: &[Expr]) -> String {
    let inner: Vec<_> = elems.iter().map(sexpr).collect();
    format!("({name} [{}])", inner.join(" "))
}
