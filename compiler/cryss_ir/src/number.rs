//! Numeric value of a number literal.
//!
//! Number tokens keep their source text. A backend that needs the value
//! calls [`parse_number`]: radix and plain decimal literals are integers,
//! anything with a decimal point or an exponent is real.

/// Value of a number literal.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum NumberValue {
    Integer(i64),
    Real(f64),
}

/// Evaluate a raw number literal as produced by the lexer.
///
/// Returns `None` for text the lexer would not produce, and for integers
/// that do not fit in an `i64`.
pub fn parse_number(raw: &str) -> Option<NumberValue> {
    let radix = match raw.get(..2) {
        Some("0b") => Some(2),
        Some("0o") => Some(8),
        Some("0x") => Some(16),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = raw.get(2..)?;
        return i64::from_str_radix(digits, radix)
            .ok()
            .map(NumberValue::Integer);
    }
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit() || b".eE+-".contains(&b)) {
        return None;
    }
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().ok().map(NumberValue::Integer);
    }
    raw.parse().ok().map(NumberValue::Real)
}
