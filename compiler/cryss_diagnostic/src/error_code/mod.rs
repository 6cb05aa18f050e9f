//! Error codes for all front-end diagnostics.
//!
//! The first digit names the stage that raised the error.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where first digit indicates stage:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Type annotation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Character that starts no token
    E0001,
    /// Block comment still open at end of input
    E0002,
    /// String literal still open at end of input
    E0003,
    /// Exponent marker without exponent digits
    E0004,
    /// Radix prefix without digits
    E0005,
    /// Input could not be read
    E0006,

    // Parser Errors (E1xxx)
    /// Prefix operator followed by a token that starts no operand
    E1001,
    /// Prefix operator at end of input
    E1002,
    /// Infix operator followed by a token that starts no operand
    E1003,
    /// Infix operator at end of input
    E1004,
    /// Bracket never closed
    E1005,
    /// Bracket closed by the other bracket type
    E1006,
    /// List item followed by neither a comma nor a closing bracket
    E1007,
    /// Empty item before a comma
    E1008,
    /// Empty index brackets
    E1009,
    /// More than one index
    E1010,
    /// Expression statement without a semicolon
    E1011,
    /// End of input after an expression statement
    E1012,
    /// Token that starts no statement
    E1013,
    /// Block never closed
    E1014,
    /// Malformed keyword construct
    E1015,
    /// Keyword construct cut off by end of input
    E1016,
    /// Token inside brackets that starts no list item
    E1017,

    // Type Annotation Errors (E2xxx)
    /// Unknown type name
    E2001,
    /// Wrong number of type arguments
    E2002,
}

impl ErrorCode {
    /// All error codes, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
        ErrorCode::E1014,
        ErrorCode::E1015,
        ErrorCode::E1016,
        ErrorCode::E1017,
        ErrorCode::E2001,
        ErrorCode::E2002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
            ErrorCode::E1016 => "E1016",
            ErrorCode::E1017 => "E1017",
            // Types
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
        }
    }

    /// One-line explanation of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unexpected character",
            ErrorCode::E0002 => "unterminated comment",
            ErrorCode::E0003 => "unterminated string literal",
            ErrorCode::E0004 => "incomplete scientific notation",
            ErrorCode::E0005 => "radix prefix without digits",
            ErrorCode::E0006 => "failed to read input",
            ErrorCode::E1001 => "unexpected token after prefix operator",
            ErrorCode::E1002 => "unexpected end of input after prefix operator",
            ErrorCode::E1003 => "unexpected token after infix operator",
            ErrorCode::E1004 => "unexpected end of input after infix operator",
            ErrorCode::E1005 => "unclosed bracket",
            ErrorCode::E1006 => "mismatched brackets",
            ErrorCode::E1007 => "expected `,` or closing bracket",
            ErrorCode::E1008 => "empty list item",
            ErrorCode::E1009 => "empty index",
            ErrorCode::E1010 => "multiple indices",
            ErrorCode::E1011 => "expected `;` after expression",
            ErrorCode::E1012 => "unexpected end of input after expression",
            ErrorCode::E1013 => "expected statement",
            ErrorCode::E1014 => "unclosed block",
            ErrorCode::E1015 => "malformed construct",
            ErrorCode::E1016 => "unexpected end of input in construct",
            ErrorCode::E1017 => "expected list item",
            ErrorCode::E2001 => "unknown type",
            ErrorCode::E2002 => "wrong number of type arguments",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_type_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
