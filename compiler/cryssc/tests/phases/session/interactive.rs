//! `cryss` on stdin: report, drop the statement, read on.

use pretty_assertions::assert_eq;

use crate::common::interactive;

#[test]
fn test_prompts_follow_statements() {
    let run = interactive("a;\nif (a)\n  b;\nelse\n  c;\n");
    assert_eq!(run.output.items.len(), 2);
    assert_eq!(run.diagnostics, "");
    // The `if` stays open until the line after its branch shows whether an
    // `else` follows
    assert_eq!(run.prompts, "> > + + + > ");
}

#[test]
fn test_recovery_after_each_error() {
    let input = "1 +;\nok1;\n(1, 2];\nok2;\nlet v: nope = 0;\nok3;\n";
    let run = interactive(input);
    assert_eq!(run.output.error_count, 3);
    assert_eq!(run.output.items.len(), 3);

    let codes: Vec<_> = run
        .diagnostics
        .lines()
        .filter(|line| line.starts_with("error["))
        .map(|line| &line[6..11])
        .collect();
    assert_eq!(codes, ["E1003", "E1006", "E2001"]);
    assert_eq!(run.prompts, "> ".repeat(7));
}

#[test]
fn test_diagnostic_quotes_the_line_just_typed() {
    let run = interactive("x = 1;\ny = @;\n");
    assert_eq!(run.output.error_count, 1);
    assert!(run.diagnostics.contains("2 | y = @;"), "{}", run.diagnostics);
}

#[test]
fn test_open_comment_is_dropped_with_the_statement() {
    // The broken line also opens a comment; discarding must close it or
    // `ok;` would be swallowed
    let run = interactive("1 + ; /* open\nok;\n");
    assert_eq!(run.output.error_count, 1);
    assert_eq!(run.output.items.len(), 1);
}
