//! Token kinds for cryss.

use std::fmt;

/// Token kinds.
///
/// Keywords are not kinds of their own. The lexer produces an `Identifier`
/// and the parser asks [`Keyword::lookup`] when it needs one.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Identifier: `x`, `_tmp`, `$0`
    Identifier(String),
    /// Number literal as written: `42`, `.5`, `1e-3`, `0xff`
    Number(String),
    /// String literal with escapes decoded
    StringLit(String),

    // Arithmetic
    Plus,       // +
    PlusPlus,   // ++
    PlusEq,     // +=
    Minus,      // -
    MinusMinus, // --
    MinusEq,    // -=
    Star,       // *
    StarEq,     // *=
    Slash,      // /
    SlashEq,    // /=
    Percent,    // %
    PercentEq,  // %=

    // Comparison and assignment
    Eq,    // =
    EqEq,  // ==
    Bang,  // !
    NotEq, // !=
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // Shifts
    Shl,        // <<
    ShlEq,      // <<=
    TripleLt,   // <<<
    TripleLtEq, // <<<=
    Shr,        // >>
    ShrEq,      // >>=
    TripleGt,   // >>>
    TripleGtEq, // >>>=

    // Bitwise and logical
    Amp,      // &
    AmpEq,    // &=
    AmpAmp,   // &&
    Pipe,     // |
    PipeEq,   // |=
    PipePipe, // ||
    Caret,    // ^
    CaretEq,  // ^=
    Tilde,    // ~

    // Punctuation
    Dot,       // .
    Colon,     // :
    Semicolon, // ;
    Comma,     // ,
    Question,  // ?
    Hash,      // #
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    LBrace,    // {
    RBrace,    // }
}

impl TokenKind {
    /// Fixed spelling of a punctuation kind, `None` for literals and identifiers.
    pub fn spelling(&self) -> Option<&'static str> {
        let spelling = match self {
            TokenKind::Identifier(_) | TokenKind::Number(_) | TokenKind::StringLit(_) => {
                return None
            }
            TokenKind::Plus => "+",
            TokenKind::PlusPlus => "++",
            TokenKind::PlusEq => "+=",
            TokenKind::Minus => "-",
            TokenKind::MinusMinus => "--",
            TokenKind::MinusEq => "-=",
            TokenKind::Star => "*",
            TokenKind::StarEq => "*=",
            TokenKind::Slash => "/",
            TokenKind::SlashEq => "/=",
            TokenKind::Percent => "%",
            TokenKind::PercentEq => "%=",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::Bang => "!",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Shl => "<<",
            TokenKind::ShlEq => "<<=",
            TokenKind::TripleLt => "<<<",
            TokenKind::TripleLtEq => "<<<=",
            TokenKind::Shr => ">>",
            TokenKind::ShrEq => ">>=",
            TokenKind::TripleGt => ">>>",
            TokenKind::TripleGtEq => ">>>=",
            TokenKind::Amp => "&",
            TokenKind::AmpEq => "&=",
            TokenKind::AmpAmp => "&&",
            TokenKind::Pipe => "|",
            TokenKind::PipeEq => "|=",
            TokenKind::PipePipe => "||",
            TokenKind::Caret => "^",
            TokenKind::CaretEq => "^=",
            TokenKind::Tilde => "~",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Question => "?",
            TokenKind::Hash => "#",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
        };
        Some(spelling)
    }

    /// Short category name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Identifier(name) => match Keyword::lookup(name) {
                Some(keyword) => keyword.as_str(),
                None => "identifier",
            },
            TokenKind::Number(_) => "number",
            TokenKind::StringLit(_) => "string",
            other => other.spelling().unwrap_or("token"),
        }
    }
}

impl fmt::Display for TokenKind {
    /// Source-like rendering: the name, the literal, or the spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(text) | TokenKind::Number(text) => f.write_str(text),
            TokenKind::StringLit(value) => write!(f, "{value:?}"),
            other => f.write_str(other.spelling().unwrap_or("?")),
        }
    }
}

/// Reserved words, recognized from identifiers on demand.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    If,
    Else,
    While,
    Break,
    Continue,
    Return,
    Let,
    Def,
}

impl Keyword {
    pub fn lookup(name: &str) -> Option<Keyword> {
        Some(match name {
            "if" => Keyword::If,
            "else" => Keyword::Else,
            "while" => Keyword::While,
            "break" => Keyword::Break,
            "continue" => Keyword::Continue,
            "return" => Keyword::Return,
            "let" => Keyword::Let,
            "def" => Keyword::Def,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Return => "return",
            Keyword::Let => "let",
            Keyword::Def => "def",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two bracket shapes that delimit lists.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BracketType {
    /// `(` `)`
    Round,
    /// `[` `]`
    Square,
}

impl BracketType {
    pub const fn open(self) -> &'static str {
        match self {
            BracketType::Round => "(",
            BracketType::Square => "[",
        }
    }

    pub const fn close(self) -> &'static str {
        match self {
            BracketType::Round => ")",
            BracketType::Square => "]",
        }
    }

    /// The other bracket type.
    pub const fn other(self) -> BracketType {
        match self {
            BracketType::Round => BracketType::Square,
            BracketType::Square => BracketType::Round,
        }
    }
}
