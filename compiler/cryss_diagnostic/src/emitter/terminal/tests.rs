use super::*;
use crate::ErrorCode;
use cryss_ir::{Pos, Range};
use pretty_assertions::assert_eq;

fn render(diag: &Diagnostic, source: &str) -> String {
    let log = SourceLog::from_source(source);
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit(diag, &log);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_single_line_snippet() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("unexpected character `@`")
        .with_label(Range::on_line(0, 4, 5), "not valid here");

    assert_eq!(
        render(&diag, "let @ = 3;"),
        "error[E0001]: unexpected character `@`\n \
         --> 1:5\n  \
         |\n\
         1 | let @ = 3;\n  \
         |     ^ not valid here\n\
         \n"
    );
}

#[test]
fn test_secondary_label_uses_dashes() {
    let diag = Diagnostic::error(ErrorCode::E1006)
        .with_message("mismatched brackets")
        .with_label(Range::on_line(0, 5, 6), "does not match `(`")
        .with_secondary_label(Range::on_line(0, 0, 1), "opened here");

    let text = render(&diag, "(1, 2];");
    assert!(text.contains("  |      ^ does not match `(`"), "{text}");
    assert!(text.contains("  | - opened here"), "{text}");
}

#[test]
fn test_underline_counts_chars_not_bytes() {
    // `é` is two bytes; the mark must sit one column after it
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("unexpected character")
        .with_label(Range::on_line(0, 3, 4), "");

    let text = render(&diag, "é @");
    assert!(text.contains(" --> 1:3\n"), "{text}");
    assert!(text.contains("  |   ^\n"), "{text}");
}

#[test]
fn test_point_range_has_one_caret() {
    let diag = Diagnostic::error(ErrorCode::E1012)
        .with_message("unexpected end of input")
        .with_label(Range::point(Pos::new(0, 5)), "here");

    let text = render(&diag, "x + 1");
    assert!(text.contains("  |      ^ here"), "{text}");
}

#[test]
fn test_multi_line_range() {
    let diag = Diagnostic::error(ErrorCode::E1011)
        .with_message("expected `;`")
        .with_label(Range::new(Pos::new(0, 0), Pos::new(1, 5)), "this expression");

    let text = render(&diag, "1 +\n    2\nfoo");
    assert!(text.contains("1 | 1 +\n  | ^^^\n"), "{text}");
    assert!(text.contains("2 |     2\n  | ^^^^^ this expression\n"), "{text}");
    assert!(!text.contains("foo"), "{text}");
}

#[test]
fn test_long_range_is_elided() {
    let source = "a\nb\nc\nd\ne\nf";
    let diag = Diagnostic::error(ErrorCode::E1014)
        .with_message("unclosed block")
        .with_label(Range::new(Pos::new(0, 0), Pos::new(5, 1)), "block");

    let text = render(&diag, source);
    assert!(text.contains("1 | a"), "{text}");
    assert!(text.contains("2 | b"), "{text}");
    assert!(text.contains(" ...\n"), "{text}");
    assert!(!text.contains("3 | c"), "{text}");
    assert!(text.contains("6 | f"), "{text}");
}

#[test]
fn test_range_outside_log_falls_back() {
    let diag = Diagnostic::error(ErrorCode::E0003)
        .with_message("unterminated string literal")
        .with_label(Range::on_line(7, 0, 1), "starts here");

    let text = render(&diag, "only one line");
    assert!(text.contains("= 8:1-8:2: starts here"), "{text}");
}

#[test]
fn test_notes_and_help() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("unknown type `inte`")
        .with_note("known types are bool, int, rational, float, str")
        .with_suggestion("did you mean `int`?");

    let text = render(&diag, "");
    assert!(text.contains(" = note: known types"), "{text}");
    assert!(text.contains(" = help: did you mean `int`?"), "{text}");
}

#[test]
fn test_with_color_emits_ansi() {
    let log = SourceLog::from_source("x");
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);
    emitter.emit(
        &Diagnostic::error(ErrorCode::E0001).with_label(Range::on_line(0, 0, 1), "x"),
        &log,
    );
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("E0001"));
}

#[test]
fn test_emit_summary() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(1);
    emitter.emit_summary(3);
    emitter.emit_summary(0);
    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "error: aborting due to previous error\n\
         error: aborting due to 3 previous errors\n"
    );
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
