//! Source positions.
//!
//! A [`Pos`] is a (line, byte) pair into the [`SourceLog`], the list of input
//! lines read so far. Lines are stored without their terminator, so a range
//! that crosses lines implies a `\n` at every line boundary.

use std::fmt;

/// A location in the source: 0-based line index into the log and 0-based
/// byte offset inside that line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Pos {
    pub line: u32,
    pub byte: u32,
}

impl Pos {
    #[inline]
    pub const fn new(line: u32, byte: u32) -> Self {
        Pos { line, byte }
    }

    /// 1-based column, counted in characters of `log`'s line.
    ///
    /// Falls back to the byte offset when the line is not in the log.
    pub fn column(self, log: &SourceLog) -> usize {
        log.line(self.line as usize).map_or(self.byte as usize, |text| {
            let byte = (self.byte as usize).min(text.len());
            text.get(..byte).map_or(byte, |prefix| prefix.chars().count())
        }) + 1
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.byte + 1)
    }
}

/// A half-open span `[start, end)` of source text.
///
/// Both ends always come from the same lexing pass, so `start` never lies
/// after `end`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Range {
    pub start: Pos,
    pub end: Pos,
}

impl Range {
    #[inline]
    pub const fn new(start: Pos, end: Pos) -> Self {
        Range { start, end }
    }

    /// A range inside a single line.
    #[inline]
    pub const fn on_line(line: u32, start: u32, end: u32) -> Self {
        Range {
            start: Pos::new(line, start),
            end: Pos::new(line, end),
        }
    }

    /// Zero-width range at `pos`.
    #[inline]
    pub const fn point(pos: Pos) -> Self {
        Range {
            start: pos,
            end: pos,
        }
    }

    /// Range from the start of `first` to the end of `last`.
    #[inline]
    #[must_use]
    pub const fn join(first: Range, last: Range) -> Range {
        Range {
            start: first.start,
            end: last.end,
        }
    }

    /// Move the start back to the start of `other`.
    #[inline]
    #[must_use]
    pub const fn extend_left(self, other: Range) -> Range {
        Range {
            start: other.start,
            end: self.end,
        }
    }

    /// Move the end forward to the end of `other`.
    #[inline]
    #[must_use]
    pub const fn extend_right(self, other: Range) -> Range {
        Range {
            start: self.start,
            end: other.end,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Exactly the text this range covers, lines joined by `\n`.
    ///
    /// Parts of the range outside the log are skipped rather than panicking.
    pub fn substring(&self, log: &SourceLog) -> String {
        let (first, last) = (self.start.line as usize, self.end.line as usize);
        let mut out = String::new();
        for index in first..=last {
            let Some(text) = log.line(index) else {
                break;
            };
            let from = if index == first {
                self.start.byte as usize
            } else {
                out.push('\n');
                0
            };
            let to = if index == last {
                self.end.byte as usize
            } else {
                text.len()
            };
            if let Some(piece) = text.get(from.min(text.len())..to.min(text.len())) {
                out.push_str(piece);
            }
        }
        out
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Every line read from the input so far, without line terminators.
///
/// The lexer appends to it one line at a time; diagnostics read from it.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct SourceLog {
    lines: Vec<String>,
}

impl SourceLog {
    pub fn new() -> Self {
        SourceLog::default()
    }

    /// Split a whole source text into a log, the way the lexer would read it.
    pub fn from_source(source: &str) -> Self {
        SourceLog {
            lines: source.lines().map(str::to_owned).collect(),
        }
    }

    /// Append a line, stripping a trailing `\n` or `\r\n`. Returns its index.
    pub fn push_line(&mut self, line: &str) -> u32 {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        self.lines.push(line.to_owned());
        u32::try_from(self.lines.len() - 1).unwrap_or(u32::MAX)
    }

    #[inline]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Pos, Range};
    crate::static_assert_size!(Pos, 8);
    crate::static_assert_size!(Range, 16);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn log(text: &str) -> SourceLog {
        SourceLog::from_source(text)
    }

    #[test]
    fn test_pos_display_is_one_based() {
        assert_eq!(Pos::new(0, 0).to_string(), "1:1");
        assert_eq!(Pos::new(2, 7).to_string(), "3:8");
    }

    #[test]
    fn test_range_display() {
        assert_eq!(Range::on_line(0, 4, 7).to_string(), "1:5-1:8");
        assert_eq!(Range::point(Pos::new(1, 0)).to_string(), "2:1");
    }

    #[test]
    fn test_join_and_extend() {
        let a = Range::on_line(0, 2, 4);
        let b = Range::on_line(1, 0, 3);
        assert_eq!(Range::join(a, b), Range::new(a.start, b.end));
        assert_eq!(b.extend_left(a), Range::join(a, b));
        assert_eq!(a.extend_right(b), Range::join(a, b));
    }

    #[test]
    fn test_substring_single_line() {
        let log = log("let x = 42;");
        assert_eq!(Range::on_line(0, 4, 5).substring(&log), "x");
        assert_eq!(Range::on_line(0, 8, 10).substring(&log), "42");
    }

    #[test]
    fn test_substring_multi_line() {
        let log = log("a /* one\ntwo\nthree */ b");
        let range = Range::new(Pos::new(0, 2), Pos::new(2, 8));
        assert_eq!(range.substring(&log), "/* one\ntwo\nthree */");
    }

    #[test]
    fn test_substring_out_of_bounds_is_clamped() {
        let log = log("abc");
        assert_eq!(Range::on_line(0, 1, 99).substring(&log), "bc");
        assert_eq!(Range::on_line(5, 0, 1).substring(&log), "");
    }

    #[test]
    fn test_column_counts_chars() {
        let log = log("é = 1");
        // `=` sits after a two-byte char and a space
        assert_eq!(Pos::new(0, 3).column(&log), 3);
    }

    #[test]
    fn test_push_line_strips_terminator() {
        let mut log = SourceLog::new();
        assert_eq!(log.push_line("one\r\n"), 0);
        assert_eq!(log.push_line("two\n"), 1);
        assert_eq!(log.push_line("three"), 2);
        assert_eq!(log.lines().collect::<Vec<_>>(), vec!["one", "two", "three"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn whole_line_range_round_trips(line in "[ -~]{0,40}") {
                let log = SourceLog::from_source(&line);
                let len = u32::try_from(line.len()).unwrap_or(0);
                let range = Range::on_line(0, 0, len);
                prop_assert_eq!(range.substring(&log), line);
            }

            #[test]
            fn split_ranges_concatenate(line in "[a-z]{1,40}", cut in 0usize..40) {
                let log = SourceLog::from_source(&line);
                let cut = u32::try_from(cut.min(line.len())).unwrap_or(0);
                let len = u32::try_from(line.len()).unwrap_or(0);
                let left = Range::on_line(0, 0, cut).substring(&log);
                let right = Range::on_line(0, cut, len).substring(&log);
                prop_assert_eq!(left + &right, line);
            }
        }
    }
}
