use super::*;
use cryss_ir::Ident;
use pretty_assertions::assert_eq;

/// Lower the single item in `source`.
fn lower(source: &str, interner: &TypeInterner) -> Result<ItemTypes, LowerError> {
    let output = cryss_parse::parse(source);
    assert!(output.error.is_none(), "{:?}", output.error);
    assert_eq!(output.items.len(), 1);
    lower_item_types(&output.items[0], interner)
}

/// Display of the type annotated on the `let` in `source`.
fn let_type(source: &str) -> Result<String, LowerError> {
    let interner = TypeInterner::new();
    let types = lower(source, &interner)?;
    assert_eq!(types.annotations.len(), 1);
    Ok(interner.display(types.annotations[0].1))
}

#[test]
fn primitives() {
    for kind in PrimitiveKind::ALL {
        let source = format!("let x: {} = 0;", kind.name());
        assert_eq!(let_type(&source).unwrap(), kind.name());
    }
}

#[test]
fn compound_annotations() {
    assert_eq!(let_type("let s: sound[float] = 0;").unwrap(), "sound[float]");
    assert_eq!(let_type("let t: (int, str) = 0;").unwrap(), "(int, str)");
    assert_eq!(let_type("let u: () = 0;").unwrap(), "()");
    assert_eq!(
        let_type("let n: sound[(bool, sound[int])] = 0;").unwrap(),
        "sound[(bool, sound[int])]"
    );
}

#[test]
fn unknown_type() {
    let err = let_type("let x: integer = 0;").unwrap_err();
    assert_eq!(
        err,
        LowerError::UnknownType {
            name: "integer".into(),
            range: Range::on_line(0, 7, 14),
        }
    );
    assert_eq!(err.code(), ErrorCode::E2001);

    let err = let_type("let x: list[int] = 0;").unwrap_err();
    assert_eq!(err.range(), Range::on_line(0, 7, 11));
}

#[test]
fn wrong_arity() {
    assert_eq!(
        let_type("let s: sound = 0;").unwrap_err(),
        LowerError::WrongTypeArity {
            name: "sound".into(),
            expected: 1,
            found: 0,
            range: Range::on_line(0, 7, 12),
        }
    );
    assert_eq!(
        let_type("let s: sound[int, int] = 0;").unwrap_err(),
        LowerError::WrongTypeArity {
            name: "sound".into(),
            expected: 1,
            found: 2,
            range: Range::on_line(0, 7, 22),
        }
    );
    let err = let_type("let i: int[float] = 0;").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2002);
    assert_eq!(
        err.to_string(),
        "type `int` takes 0 type argument(s) but 1 were given at 1:8-1:18"
    );
}

#[test]
fn empty_brackets_on_a_primitive_are_accepted() {
    assert_eq!(let_type("let i: int[] = 0;").unwrap(), "int");
}

#[test]
fn definition_signature() {
    let interner = TypeInterner::new();
    let types = lower("def mix(a: sound[float], g: float): sound[float] = a;", &interner).unwrap();
    let signature = types.signature.unwrap();
    assert_eq!(
        interner.display(signature),
        "(sound[float], float) -> sound[float]"
    );
    assert_eq!(types.annotations.len(), 3);
    assert!(interner.flags(signature).has_sound());
}

#[test]
fn partial_annotations_give_no_signature() {
    let interner = TypeInterner::new();
    let types = lower("def f(a: int, b): int = a;", &interner).unwrap();
    assert_eq!(types.signature, None);
    assert_eq!(types.annotations.len(), 2);

    let types = lower("def g(a: int) { return a; }", &interner).unwrap();
    assert_eq!(types.signature, None);
}

#[test]
fn annotations_inside_bodies() {
    let interner = TypeInterner::new();
    let source = "def f(): () {\n  let a: int = 1;\n  while (a) { if (a) { let b: str = 2; } else let c: bool = 3; }\n}";
    let types = lower(source, &interner).unwrap();
    let names: Vec<_> = types
        .annotations
        .iter()
        .map(|(_, id)| interner.display(*id))
        .collect();
    assert_eq!(names, ["()", "int", "str", "bool"]);
    assert_eq!(interner.display(types.signature.unwrap()), "() -> ()");
}

#[test]
fn first_bad_annotation_stops_lowering() {
    let interner = TypeInterner::new();
    let err = lower("{ let a: int = 1; let b: nope = 2; let c: alsonope = 3; }", &interner).unwrap_err();
    assert_eq!(
        err,
        LowerError::UnknownType {
            name: "nope".into(),
            range: Range::on_line(0, 25, 29),
        }
    );
}

#[test]
fn same_annotation_same_id() {
    let interner = TypeInterner::new();
    let ty = TypeExpr::new(
        TypeExprKind::Applied {
            name: Ident::new("sound", Range::on_line(0, 0, 5)),
            args: vec![TypeExpr::new(
                TypeExprKind::Named("rational".into()),
                Range::on_line(0, 6, 14),
            )],
        },
        Range::on_line(0, 0, 15),
    );
    let first = lower_type(&ty, &interner).unwrap();
    let len = interner.len();
    assert_eq!(lower_type(&ty, &interner).unwrap(), first);
    assert_eq!(interner.len(), len);
}

#[test]
fn diagnostics() {
    let err = LowerError::UnknownType {
        name: "nope".into(),
        range: Range::on_line(0, 7, 11),
    };
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.primary_range(), Some(Range::on_line(0, 7, 11)));
    assert!(!diag.notes.is_empty());

    let diag = LowerError::WrongTypeArity {
        name: "str".into(),
        expected: 0,
        found: 1,
        range: Range::on_line(0, 0, 8),
    }
    .to_diagnostic();
    assert_eq!(diag.suggestions, vec!["write `str`".to_owned()]);
}
