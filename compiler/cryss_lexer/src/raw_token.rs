//! Raw Token Definition
//!
//! The logos-derived matcher for a single token. The scanner handles
//! whitespace, comments and string literals itself (they can span lines)
//! and hands logos the rest of the line for everything else. Logos always
//! takes the longest match, so `>>>=` wins over `>>>`, `>>` and `>`.

use cryss_ir::TokenKind;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawToken {
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    // Integer or real: `42`, `1.`, `1.5`, `1e3`, `1.5E-3`
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    // Radix integer: `0b101`, `0o17`, `0xff`
    #[regex(r"0b[01]+")]
    #[regex(r"0o[0-7]+")]
    #[regex(r"0x[0-9a-fA-F]+")]
    Number,

    /// Exponent marker with no digits after it: `1e`, `2.5e+`
    #[regex(r"[0-9]+(\.[0-9]*)?[eE][+-]?")]
    #[regex(r"\.[0-9]+[eE][+-]?")]
    BadExponent,

    /// Radix prefix with no digits: `0b`, `0x`
    #[regex(r"0[box]")]
    EmptyRadix,

    #[token("+")]
    Plus,
    #[token("++")]
    PlusPlus,
    #[token("+=")]
    PlusEq,
    #[token("-")]
    Minus,
    #[token("--")]
    MinusMinus,
    #[token("-=")]
    MinusEq,
    #[token("*")]
    Star,
    #[token("*=")]
    StarEq,
    #[token("/")]
    Slash,
    #[token("/=")]
    SlashEq,
    #[token("%")]
    Percent,
    #[token("%=")]
    PercentEq,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!")]
    Bang,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    Shl,
    #[token("<<=")]
    ShlEq,
    #[token("<<<")]
    TripleLt,
    #[token("<<<=")]
    TripleLtEq,
    #[token(">>")]
    Shr,
    #[token(">>=")]
    ShrEq,
    #[token(">>>")]
    TripleGt,
    #[token(">>>=")]
    TripleGtEq,
    #[token("&")]
    Amp,
    #[token("&=")]
    AmpEq,
    #[token("&&")]
    AmpAmp,
    #[token("|")]
    Pipe,
    #[token("|=")]
    PipeEq,
    #[token("||")]
    PipePipe,
    #[token("^")]
    Caret,
    #[token("^=")]
    CaretEq,
    #[token("~")]
    Tilde,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("?")]
    Question,
    #[token("#")]
    Hash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
}

impl RawToken {
    /// Final token kind for a successful match.
    ///
    /// Returns `None` for the malformed-literal variants, which the scanner
    /// reports as errors.
    pub(crate) fn into_kind(self, slice: &str) -> Option<TokenKind> {
        let kind = match self {
            RawToken::Ident => TokenKind::Identifier(slice.to_owned()),
            RawToken::Number => TokenKind::Number(slice.to_owned()),
            RawToken::BadExponent | RawToken::EmptyRadix => return None,
            RawToken::Plus => TokenKind::Plus,
            RawToken::PlusPlus => TokenKind::PlusPlus,
            RawToken::PlusEq => TokenKind::PlusEq,
            RawToken::Minus => TokenKind::Minus,
            RawToken::MinusMinus => TokenKind::MinusMinus,
            RawToken::MinusEq => TokenKind::MinusEq,
            RawToken::Star => TokenKind::Star,
            RawToken::StarEq => TokenKind::StarEq,
            RawToken::Slash => TokenKind::Slash,
            RawToken::SlashEq => TokenKind::SlashEq,
            RawToken::Percent => TokenKind::Percent,
            RawToken::PercentEq => TokenKind::PercentEq,
            RawToken::Eq => TokenKind::Eq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::Bang => TokenKind::Bang,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Shl => TokenKind::Shl,
            RawToken::ShlEq => TokenKind::ShlEq,
            RawToken::TripleLt => TokenKind::TripleLt,
            RawToken::TripleLtEq => TokenKind::TripleLtEq,
            RawToken::Shr => TokenKind::Shr,
            RawToken::ShrEq => TokenKind::ShrEq,
            RawToken::TripleGt => TokenKind::TripleGt,
            RawToken::TripleGtEq => TokenKind::TripleGtEq,
            RawToken::Amp => TokenKind::Amp,
            RawToken::AmpEq => TokenKind::AmpEq,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::PipeEq => TokenKind::PipeEq,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::Caret => TokenKind::Caret,
            RawToken::CaretEq => TokenKind::CaretEq,
            RawToken::Tilde => TokenKind::Tilde,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Question => TokenKind::Question,
            RawToken::Hash => TokenKind::Hash,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
        };
        Some(kind)
    }
}
