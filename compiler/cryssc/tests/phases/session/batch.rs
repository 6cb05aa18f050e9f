//! `cryss <file>`: stop at the first diagnostic.

use cryss_types::TypeId;
use cryssc::commands::Outcome;
use pretty_assertions::assert_eq;

use crate::common::batch;

const PATCH: &str = "\
// A small patch
def gain(s: sound[float], g: float): sound[float] = s * g;

def mix(a: sound[float], b: sound[float]): sound[float] {
    let out: sound[float] = a + b;
    /* scale /* twice */ */
    out *= 0.5;
    return out;
}

let osc = gain(sine(440.0), 0.25);
while (playing) { tick(); if (done()) break; else continue; }
";

#[test]
fn test_clean_file() {
    let run = batch(PATCH);
    assert_eq!(run.diagnostics, "");
    assert_eq!(run.prompts, "");
    assert_eq!(Outcome::from_error_count(run.output.error_count), Outcome::Clean);
    assert_eq!(run.output.items.len(), 4);

    let types = &run.output.types;
    let signatures: Vec<_> = run
        .output
        .item_types
        .iter()
        .map(|t| t.signature.map(|id| types.display(id)))
        .collect();
    assert_eq!(
        signatures,
        [
            Some("(sound[float], float) -> sound[float]".to_owned()),
            Some("(sound[float], sound[float]) -> sound[float]".to_owned()),
            None,
            None,
        ]
    );

    // Every `sound[float]` in the file is one interned type
    let sound = types.sound(TypeId::FLOAT);
    let mix = &run.output.item_types[1];
    assert_eq!(mix.annotations.len(), 4);
    assert!(mix.annotations.iter().all(|&(_, id)| id == sound));
}

#[test]
fn test_first_error_stops_the_run() {
    let run = batch("a;\nb = (1, 2;\nc;\nd e;\n");
    assert_eq!(run.output.error_count, 1);
    assert_eq!(Outcome::from_error_count(run.output.error_count), Outcome::Failed);
    assert_eq!(run.output.items.len(), 1);
    assert!(run.diagnostics.starts_with("error[E1007]: "), "{}", run.diagnostics);
    assert!(!run.diagnostics.contains("d e;"), "{}", run.diagnostics);
    assert!(
        run.diagnostics
            .ends_with("\nerror: aborting due to previous error\n"),
        "{}",
        run.diagnostics
    );
}

#[test]
fn test_bad_annotation_is_a_diagnostic() {
    let run = batch("let t: (int, strng) = (1, \"a\");\n");
    assert_eq!(run.output.error_count, 1);
    assert!(run.output.items.is_empty());
    assert_eq!(
        run.diagnostics.lines().next(),
        Some("error[E2001]: unknown type `strng` at 1:14-1:19")
    );
    let underline = format!("  |{}^^^^^ not a known type", " ".repeat(14));
    assert!(run.diagnostics.contains(&underline), "{}", run.diagnostics);
}

#[test]
fn test_unterminated_string_at_end_of_file() {
    let run = batch("x;\ny = \"never closed;\n");
    assert_eq!(run.output.items.len(), 1);
    assert!(
        run.diagnostics
            .starts_with("error[E0003]: unterminated string literal (started at 2:5)"),
        "{}",
        run.diagnostics
    );
}
