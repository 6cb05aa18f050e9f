//! Unary and binary operators.

/// Binary operators, including plain and compound assignment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Rem,

    // Shifts
    LeftShift,
    RightShift,
    ForwardShift,
    BackwardShift,

    // Comparison
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Logical
    LogicalAnd,
    LogicalOr,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,

    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    LeftShiftAssign,
    RightShiftAssign,
    ForwardShiftAssign,
    BackwardShiftAssign,
}

impl BinaryOp {
    /// Tightest binding level.
    pub const TIGHTEST: u8 = 1;
    /// Loosest binding level (assignment).
    pub const LOOSEST: u8 = 11;

    /// Source spelling of the operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            // Arithmetic
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            // Shifts
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::ForwardShift => ">>>",
            Self::BackwardShift => "<<<",
            // Comparison
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            // Logical
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            // Bitwise
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            // Assignment
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::RemAssign => "%=",
            Self::BitAndAssign => "&=",
            Self::BitOrAssign => "|=",
            Self::BitXorAssign => "^=",
            Self::LeftShiftAssign => "<<=",
            Self::RightShiftAssign => ">>=",
            Self::ForwardShiftAssign => ">>>=",
            Self::BackwardShiftAssign => "<<<=",
        }
    }

    /// Human-readable name, as printed in tree dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Rem => "rem",
            Self::LeftShift => "left shift",
            Self::RightShift => "right shift",
            Self::ForwardShift => "forward shift",
            Self::BackwardShift => "backward shift",
            Self::Equal => "equal to",
            Self::NotEqual => "not equal to",
            Self::Less => "less than",
            Self::LessEqual => "less than or equal to",
            Self::Greater => "greater than",
            Self::GreaterEqual => "greater than or equal to",
            Self::LogicalAnd => "logical and",
            Self::LogicalOr => "logical or",
            Self::BitAnd => "bitwise and",
            Self::BitOr => "bitwise or",
            Self::BitXor => "bitwise xor",
            Self::Assign => "assign",
            Self::AddAssign => "add assign",
            Self::SubAssign => "sub assign",
            Self::MulAssign => "mul assign",
            Self::DivAssign => "div assign",
            Self::RemAssign => "rem assign",
            Self::BitAndAssign => "bitwise and assign",
            Self::BitOrAssign => "bitwise or assign",
            Self::BitXorAssign => "bitwise xor assign",
            Self::LeftShiftAssign => "left shift assign",
            Self::RightShiftAssign => "right shift assign",
            Self::ForwardShiftAssign => "forward shift assign",
            Self::BackwardShiftAssign => "backward shift assign",
        }
    }

    /// Binding level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    /// - 1: `<<<` `>>>`
    /// - 2: `*` `/` `%`
    /// - 3: `+` `-`
    /// - 4: `<<` `>>`
    /// - 5: `&`
    /// - 6: `^`
    /// - 7: `|`
    /// - 8: `==` `!=` `<` `<=` `>` `>=`
    /// - 9: `&&`
    /// - 10: `||`
    /// - 11: `=` and every compound assignment
    pub const fn precedence(self) -> u8 {
        match self {
            // Time shift (highest binary precedence)
            Self::ForwardShift | Self::BackwardShift => 1,
            // Multiplicative
            Self::Mul | Self::Div | Self::Rem => 2,
            // Additive
            Self::Add | Self::Sub => 3,
            // Bit shift
            Self::LeftShift | Self::RightShift => 4,
            // Bitwise
            Self::BitAnd => 5,
            Self::BitXor => 6,
            Self::BitOr => 7,
            // Comparison
            Self::Equal
            | Self::NotEqual
            | Self::Less
            | Self::LessEqual
            | Self::Greater
            | Self::GreaterEqual => 8,
            // Logical
            Self::LogicalAnd => 9,
            Self::LogicalOr => 10,
            // Assignment (lowest)
            Self::Assign
            | Self::AddAssign
            | Self::SubAssign
            | Self::MulAssign
            | Self::DivAssign
            | Self::RemAssign
            | Self::BitAndAssign
            | Self::BitOrAssign
            | Self::BitXorAssign
            | Self::LeftShiftAssign
            | Self::RightShiftAssign
            | Self::ForwardShiftAssign
            | Self::BackwardShiftAssign => Self::LOOSEST,
        }
    }

    /// Only the assignment level groups to the right.
    #[inline]
    pub const fn is_right_assoc(self) -> bool {
        self.precedence() == Self::LOOSEST
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Minus,
    Recip,
    LogicalNot,
    BitNot,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Recip => "/",
            Self::LogicalNot => "!",
            Self::BitNot => "~",
            Self::PreInc | Self::PostInc => "++",
            Self::PreDec | Self::PostDec => "--",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Recip => "recip",
            Self::LogicalNot => "logical not",
            Self::BitNot => "bitwise not",
            Self::PreInc => "prefix increment",
            Self::PreDec => "prefix decrement",
            Self::PostInc => "postfix increment",
            Self::PostDec => "postfix decrement",
        }
    }

    #[inline]
    pub const fn is_postfix(self) -> bool {
        matches!(self, Self::PostInc | Self::PostDec)
    }
}
