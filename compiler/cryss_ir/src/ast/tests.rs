use super::*;
use crate::Range;
use pretty_assertions::assert_eq;

fn leaf(kind: ExprKind, start: u32, end: u32) -> Expr {
    Expr::new(kind, Range::on_line(0, start, end))
}

#[test]
fn test_precedence_ordering() {
    assert!(BinaryOp::ForwardShift.precedence() < BinaryOp::Mul.precedence());
    assert!(BinaryOp::Mul.precedence() < BinaryOp::Add.precedence());
    assert!(BinaryOp::Add.precedence() < BinaryOp::LeftShift.precedence());
    assert!(BinaryOp::LeftShift.precedence() < BinaryOp::BitAnd.precedence());
    assert!(BinaryOp::BitAnd.precedence() < BinaryOp::BitXor.precedence());
    assert!(BinaryOp::BitXor.precedence() < BinaryOp::BitOr.precedence());
    assert!(BinaryOp::BitOr.precedence() < BinaryOp::Less.precedence());
    assert!(BinaryOp::Equal.precedence() < BinaryOp::LogicalAnd.precedence());
    assert!(BinaryOp::LogicalAnd.precedence() < BinaryOp::LogicalOr.precedence());
    assert!(BinaryOp::LogicalOr.precedence() < BinaryOp::Assign.precedence());
}

#[test]
fn test_only_assignments_are_right_assoc() {
    assert!(BinaryOp::Assign.is_right_assoc());
    assert!(BinaryOp::BackwardShiftAssign.is_right_assoc());
    assert!(!BinaryOp::Sub.is_right_assoc());
    assert!(!BinaryOp::LogicalOr.is_right_assoc());
}

#[test]
fn test_operator_symbols() {
    assert_eq!(BinaryOp::ForwardShiftAssign.as_symbol(), ">>>=");
    assert_eq!(BinaryOp::NotEqual.as_symbol(), "!=");
    assert_eq!(UnaryOp::Recip.as_symbol(), "/");
    assert_eq!(UnaryOp::PostDec.as_symbol(), "--");
    assert!(UnaryOp::PostInc.is_postfix());
    assert!(!UnaryOp::PreInc.is_postfix());
}

#[test]
fn test_dump_binary_expression() {
    // 1 + x
    let sum = Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: Box::new(leaf(ExprKind::Number("1".into()), 0, 1)),
            right: Box::new(leaf(ExprKind::Identifier("x".into()), 4, 5)),
        },
        Range::on_line(0, 0, 5),
    );
    assert_eq!(
        dump::expr(&sum),
        "1:1-1:6 binary operation(add)\n  1:1-1:2 number(1)\n  1:5-1:6 identifier(x)\n"
    );
}

#[test]
fn test_dump_while_and_empty_statement() {
    // while (c) ;
    let body = Stmt::new(StmtKind::Expr(None), Range::on_line(0, 10, 11));
    let stmt = Stmt::new(
        StmtKind::While {
            cond: leaf(ExprKind::Identifier("c".into()), 7, 8),
            body: Box::new(body),
        },
        Range::on_line(0, 0, 11),
    );
    assert_eq!(
        dump::stmt(&stmt),
        "1:1-1:12 while\n  1:8-1:9 identifier(c)\ndo\n  1:11-1:12 expression statement (empty)\nend while\n"
    );
}

#[test]
fn test_dump_definition_signature() {
    // def id(x: int) = x;
    let int = TypeExpr::new(TypeExprKind::Named("int".into()), Range::on_line(0, 10, 13));
    let item = TopLevel::new(
        TopLevelKind::DefExpr {
            name: Ident::new("id", Range::on_line(0, 4, 6)),
            params: vec![Param {
                name: Ident::new("x", Range::on_line(0, 7, 8)),
                ty: Some(int),
                range: Range::on_line(0, 7, 13),
            }],
            ret_type: None,
            body: leaf(ExprKind::Identifier("x".into()), 17, 18),
        },
        Range::on_line(0, 0, 19),
    );
    let text = dump::top_level(&item);
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec![
            "1:1-1:20 definition(id)",
            "params(1):",
            "  1:8-1:14 parameter(x)",
            "    1:11-1:14 type(int)",
            "body:",
            "  1:18-1:19 identifier(x)",
            "end definition",
        ]
    );
}

fn nested_groups(depth: usize) -> Expr {
    let mut expr = leaf(ExprKind::Number("1".into()), 0, 1);
    for _ in 0..depth {
        expr = Expr::new(ExprKind::Group(Box::new(expr)), Range::on_line(0, 0, 1));
    }
    expr
}

#[test]
fn test_deep_trees_drop_without_recursion() {
    let range = Range::on_line(0, 0, 1);
    let depth = 200_000;

    // x + x + ... + x nests to the left
    let mut sum = leaf(ExprKind::Identifier("x".into()), 0, 1);
    for _ in 0..depth {
        sum = Expr::new(
            ExprKind::Binary {
                op: BinaryOp::Add,
                left: Box::new(sum),
                right: Box::new(leaf(ExprKind::Identifier("x".into()), 0, 1)),
            },
            range,
        );
    }
    drop(sum);

    let mut block = Stmt::new(StmtKind::Block(Vec::new()), range);
    for _ in 0..depth {
        block = Stmt::new(StmtKind::Block(vec![block]), range);
    }
    drop(block);

    let mut ty = TypeExpr::new(TypeExprKind::Named("float".into()), range);
    for _ in 0..depth {
        ty = TypeExpr::new(
            TypeExprKind::Applied {
                name: Ident::new("sound", range),
                args: vec![ty],
            },
            range,
        );
    }
    drop(ty);
}

#[test]
fn test_into_kind_keeps_children() {
    let ExprKind::Group(inner) = nested_groups(2).into_kind() else {
        panic!("not a group");
    };
    assert!(matches!(inner.kind, ExprKind::Group(_)));
}

#[test]
fn test_dump_of_deep_tree_grows_the_stack() {
    let depth = 2_000;
    let lines = std::thread::Builder::new()
        .stack_size(128 * 1024)
        .spawn(move || dump::expr(&nested_groups(depth)).lines().count())
        .unwrap()
        .join()
        .unwrap();
    assert_eq!(lines, depth + 1);
}
