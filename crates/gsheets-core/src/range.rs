//! Ranges between two positions

use crate::error::{ParseError, ParseErrorKind};
use crate::position::Position;
use crate::scanner::Scanner;
use std::fmt;
use std::str::FromStr;

/// An inclusive span between two positions (e.g., "A1:B10", "A:C", "2:5")
///
/// Ends are kept exactly as written; a range is not normalized to
/// top-left/bottom-right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    /// First position, before the `:`
    pub start: Position,
    /// Second position, after the `:`
    pub end: Position,
}

impl Range {
    /// Create a new range
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Parse a range from A1:B10 notation, requiring the whole input to be consumed
    ///
    /// # Examples
    /// ```
    /// use gsheets_core::Range;
    ///
    /// let range = Range::parse("A1:B2").unwrap();
    /// assert_eq!(range.to_string(), "A1:B2");
    ///
    /// // A single cell is a position, not a range
    /// assert!(Range::parse("A1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(s);
        let range = Self::parse_next(&mut scanner)?;
        if !scanner.is_at_end() {
            return Err(ParseError::new(
                scanner.offset(),
                ParseErrorKind::TrailingInput(scanner.rest().to_owned()),
            ));
        }
        Ok(range)
    }

    pub(crate) fn parse_next(scanner: &mut Scanner<'_>) -> Result<Self, ParseError> {
        let start = Position::parse_next(scanner)?;
        if !scanner.eat(b':') {
            return Err(ParseError::new(
                scanner.offset(),
                ParseErrorKind::ExpectedSeparator,
            ));
        }
        let end = Position::parse_next(scanner)?;
        Ok(Self { start, end })
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl FromStr for Range {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
