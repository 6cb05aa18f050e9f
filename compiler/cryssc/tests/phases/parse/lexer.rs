//! Token stream dumps.

use cryssc::commands::Outcome;
use pretty_assertions::assert_eq;

use crate::common::lex_dump;

#[test]
fn test_token_listing() {
    let dump = lex_dump("let x = 1;");
    assert_eq!(dump.outcome, Outcome::Clean);
    assert_eq!(
        dump.stdout,
        "Tokens for 'test.cryss' (5 tokens):\n  \
         Identifier(\"let\") @ 1:1-1:4\n  \
         Identifier(\"x\") @ 1:5-1:6\n  \
         Eq @ 1:7-1:8\n  \
         Number(\"1\") @ 1:9-1:10\n  \
         Semicolon @ 1:10-1:11\n"
    );
    assert_eq!(dump.stderr, "");
}

#[test]
fn test_comments_produce_nothing() {
    let dump = lex_dump("/* a /* b */ c */\n// line\n");
    assert_eq!(dump.outcome, Outcome::Clean);
    assert_eq!(dump.stdout, "Tokens for 'test.cryss' (0 tokens):\n");
}

#[test]
fn test_tokens_before_error_are_listed() {
    let dump = lex_dump("a\nlet @ = 3;");
    assert_eq!(dump.outcome, Outcome::Failed);
    assert!(
        dump.stdout.starts_with("Tokens for 'test.cryss' (2 tokens):\n"),
        "{}",
        dump.stdout
    );
    assert_eq!(
        dump.stderr,
        "error[E0001]: unexpected character `@` at 2:5-2:6\n \
         --> 2:5\n  \
         |\n\
         2 | let @ = 3;\n  \
         |     ^ no token starts with this character\n\
         \n\
         error: aborting due to previous error\n"
    );
}

#[test]
fn test_unterminated_comment_names_its_start() {
    let dump = lex_dump("x;\n/* never\nclosed");
    assert_eq!(dump.outcome, Outcome::Failed);
    assert!(
        dump.stderr
            .starts_with("error[E0002]: unterminated comment (started at 2:1)"),
        "{}",
        dump.stderr
    );
    assert!(dump.stderr.contains("2 | /* never"), "{}", dump.stderr);
}
