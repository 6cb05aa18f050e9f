use super::*;
use cryss_ir::{Pos, Range, TokenKind};
use pretty_assertions::assert_eq;

fn drain<R: BufRead, W: Write>(lexer: &mut Lexer<R, W>) -> Vec<Result<TokenKind, LexError>> {
    let mut out = Vec::new();
    loop {
        match lexer.next() {
            Ok(Some(token)) => out.push(Ok(token.kind)),
            Ok(None) => return out,
            Err(err) => out.push(Err(err)),
        }
    }
}

#[test]
fn test_peek_does_not_consume() {
    let mut lexer = Lexer::new("a b".as_bytes());
    let first = lexer.peek().ok().flatten().map(|t| t.kind.clone());
    assert_eq!(first, Some(TokenKind::Identifier("a".into())));
    let again = lexer.peek().ok().flatten().map(|t| t.kind.clone());
    assert_eq!(again, first);
    assert_eq!(
        lexer.next().ok().flatten().map(|t| t.kind),
        Some(TokenKind::Identifier("a".into()))
    );
    assert_eq!(
        lexer.next().ok().flatten().map(|t| t.kind),
        Some(TokenKind::Identifier("b".into()))
    );
    assert_eq!(lexer.next(), Ok(None));
    assert_eq!(lexer.next(), Ok(None));
}

#[test]
fn test_log_grows_with_reads() {
    let mut lexer = Lexer::new("\n\nx\ny\n".as_bytes());
    assert!(lexer.log().is_empty());
    let x = lexer.next().ok().flatten();
    assert_eq!(x.map(|t| t.range), Some(Range::on_line(2, 0, 1)));
    // Only as many lines as needed were read
    assert_eq!(lexer.log().len(), 3);
    let _ = drain(&mut lexer);
    assert_eq!(lexer.log().lines().collect::<Vec<_>>(), vec!["", "", "x", "y"]);
}

#[test]
fn test_crlf_lines() {
    let mut lexer = Lexer::new("a;\r\nb;\r\n".as_bytes());
    assert_eq!(drain(&mut lexer).len(), 4);
    assert_eq!(lexer.log().line(1), Some("b;"));
}

#[test]
fn test_error_is_served_in_order() {
    let mut lexer = Lexer::new("a @ b\nc".as_bytes());
    assert_eq!(
        lexer.next().ok().flatten().map(|t| t.kind),
        Some(TokenKind::Identifier("a".into()))
    );
    let err = LexError::UnexpectedCharacter {
        character: '@',
        range: Range::on_line(0, 2, 3),
    };
    // Peeking an error leaves it in place
    assert_eq!(lexer.peek().map(|t| t.cloned()), Err(err.clone()));
    assert_eq!(lexer.next(), Err(err));
    assert_eq!(
        lexer.next().ok().flatten().map(|t| t.kind),
        Some(TokenKind::Identifier("c".into()))
    );
}

#[test]
fn test_unterminated_comment_at_eof() {
    let mut lexer = Lexer::new("x /* a\n /* b */".as_bytes());
    assert_eq!(
        drain(&mut lexer),
        vec![
            Ok(TokenKind::Identifier("x".into())),
            Err(LexError::UnterminatedComment {
                start: Pos::new(0, 2),
                enclosing: vec![],
            }),
        ]
    );
}

#[test]
fn test_unterminated_string_at_eof() {
    let mut lexer = Lexer::new("\"abc\ndef".as_bytes());
    assert_eq!(
        drain(&mut lexer),
        vec![Err(LexError::UnterminatedString {
            start: Pos::new(0, 0)
        })]
    );
}

#[test]
fn test_discard_pending_forgets_open_comment() {
    let mut lexer = Lexer::new("a b /* open\nc */ d".as_bytes());
    assert!(lexer.next().is_ok());
    lexer.discard_pending();
    // `b` was queued and the comment was open; both are gone, so the next
    // line is lexed from scratch.
    assert_eq!(
        drain(&mut lexer),
        vec![
            Ok(TokenKind::Identifier("c".into())),
            Ok(TokenKind::Star),
            Ok(TokenKind::Slash),
            Ok(TokenKind::Identifier("d".into())),
        ]
    );
}

#[test]
fn test_interactive_prompts() {
    let mut prompts = Vec::new();
    {
        let mut lexer = Lexer::interactive("\na +\nb;\nc;\n".as_bytes(), &mut prompts);
        // Blank line keeps the primary prompt, then `a +` continues
        let kinds: Vec<_> = (0..4)
            .filter_map(|_| lexer.next().ok().flatten().map(|t| t.kind))
            .collect();
        assert_eq!(kinds.len(), 4);
        lexer.begin_statement();
        assert!(lexer.next().is_ok());
        assert!(lexer.next().is_ok());
        assert_eq!(lexer.next(), Ok(None));
    }
    assert_eq!(String::from_utf8_lossy(&prompts), "> > + > + ");
}

#[test]
fn test_batch_mode_writes_no_prompt() {
    let mut lexer = Lexer::new("a;".as_bytes());
    assert_eq!(drain(&mut lexer).len(), 2);
}

struct FailingReader;

impl io::Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn test_read_failure_is_io_error() {
    let mut lexer = Lexer::new(io::BufReader::new(FailingReader));
    assert_eq!(
        lexer.next(),
        Err(LexError::Io {
            message: "disk on fire".into()
        })
    );
    assert_eq!(lexer.next(), Ok(None));
}

struct ClosedTerminal;

impl Write for ClosedTerminal {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_prompt_write_failure_keeps_lexing() {
    let mut lexer = Lexer::interactive("a;\nb;\n".as_bytes(), ClosedTerminal);
    assert_eq!(
        drain(&mut lexer),
        vec![
            Ok(TokenKind::Identifier("a".into())),
            Ok(TokenKind::Semicolon),
            Ok(TokenKind::Identifier("b".into())),
            Ok(TokenKind::Semicolon),
        ]
    );
}
