//! Syntax tree dumps.

use cryssc::commands::Outcome;
use pretty_assertions::assert_eq;

use crate::common::parse_dump;

#[test]
fn test_statement_dump() {
    let dump = parse_dump("x = 1 + 2;");
    assert_eq!(dump.outcome, Outcome::Clean);
    assert_eq!(
        dump.stdout,
        "Parse result for 'test.cryss' (1 items):\n\
         1:1-1:11 expression statement\n  \
         1:1-1:10 binary operation(assign)\n    \
         1:1-1:2 identifier(x)\n    \
         1:5-1:10 binary operation(add)\n      \
         1:5-1:6 number(1)\n      \
         1:9-1:10 number(2)\n"
    );
}

#[test]
fn test_definition_dump() {
    let dump = parse_dump("def id(x: int): int = x;");
    assert_eq!(dump.outcome, Outcome::Clean);
    assert_eq!(
        dump.stdout,
        "Parse result for 'test.cryss' (1 items):\n\
         1:1-1:25 definition(id)\n\
         params(1):\n  \
         1:8-1:14 parameter(x)\n    \
         1:11-1:14 type(int)\n\
         returns:\n  \
         1:17-1:20 type(int)\n\
         body:\n  \
         1:23-1:24 identifier(x)\n\
         end definition\n"
    );
}

#[test]
fn test_items_before_error_are_dumped() {
    let dump = parse_dump("a;\nb c;\n");
    assert_eq!(dump.outcome, Outcome::Failed);
    assert!(dump.stdout.starts_with("Parse result for 'test.cryss' (1 items):\n"));
    assert!(dump.stdout.contains("identifier(a)"));
    assert!(!dump.stdout.contains("identifier(b)"));
    assert!(dump.stderr.starts_with("error[E1011]: "), "{}", dump.stderr);
    assert!(dump.stderr.contains("2 | b c;"), "{}", dump.stderr);
    assert!(
        dump.stderr.ends_with("error: aborting due to previous error\n"),
        "{}",
        dump.stderr
    );
}

#[test]
fn test_mismatched_bracket_points_at_both_ends() {
    let dump = parse_dump("(1, 2];");
    assert_eq!(dump.outcome, Outcome::Failed);
    assert!(dump.stderr.starts_with("error[E1006]: "), "{}", dump.stderr);
    assert!(dump.stderr.contains("  |      ^"), "{}", dump.stderr);
    assert!(dump.stderr.contains("  | -"), "{}", dump.stderr);
}
