use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("test error")
        .with_label(Range::on_line(0, 0, 5), "here")
        .with_note("some context")
        .with_suggestion("try this");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "test error");
    assert_eq!(diag.labels.len(), 1);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_primary_range_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E1006)
        .with_secondary_label(Range::on_line(0, 0, 1), "opened here")
        .with_label(Range::on_line(0, 6, 7), "closed here");

    assert_eq!(diag.primary_range(), Some(Range::on_line(0, 6, 7)));
}

#[test]
fn test_diagnostic_display_format() {
    let diag = Diagnostic::error(ErrorCode::E1006)
        .with_message("mismatched brackets")
        .with_label(Range::on_line(0, 5, 6), "closed with `]`")
        .with_secondary_label(Range::on_line(0, 0, 1), "opened with `(`")
        .with_note("a note")
        .with_suggestion("a suggestion");

    assert_eq!(
        diag.to_string(),
        "error [E1006]: mismatched brackets\n  \
         --> 1:6-1:7: closed with `]`\n      \
         1:1-1:2: opened with `(`\n  \
         = note: a note\n  \
         = help: a suggestion"
    );
}
