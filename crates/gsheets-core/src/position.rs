//! Positions: one end of a range

use crate::column::Column;
use crate::error::{ParseError, ParseErrorKind};
use crate::row::Row;
use crate::scanner::Scanner;
use std::fmt;
use std::str::FromStr;

/// One coordinate of a range: a whole column (`B`), a whole row (`7`) or a
/// single cell (`B7`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    /// A column with no row, e.g. `B`
    ColumnOnly(Column),
    /// A row with no column, e.g. `7`
    RowOnly(Row),
    /// A single cell, e.g. `B7`
    ColumnAndRow(Column, Row),
}

impl Position {
    /// Create a single-cell position
    pub fn cell(column: Column, row: Row) -> Self {
        Position::ColumnAndRow(column, row)
    }

    /// The column, if this position has one
    pub fn column(&self) -> Option<&Column> {
        match self {
            Position::ColumnOnly(column) | Position::ColumnAndRow(column, _) => Some(column),
            Position::RowOnly(_) => None,
        }
    }

    /// The row, if this position has one
    pub fn row(&self) -> Option<Row> {
        match self {
            Position::RowOnly(row) | Position::ColumnAndRow(_, row) => Some(*row),
            Position::ColumnOnly(_) => None,
        }
    }

    /// Parse a position, requiring the whole input to be consumed
    ///
    /// # Examples
    /// ```
    /// use gsheets_core::{Column, Position, Row};
    ///
    /// let pos = Position::parse("A1").unwrap();
    /// assert_eq!(pos, Position::cell(Column::new("A").unwrap(), Row::new(1).unwrap()));
    ///
    /// assert!(matches!(Position::parse("AB"), Ok(Position::ColumnOnly(_))));
    /// assert!(matches!(Position::parse("12"), Ok(Position::RowOnly(_))));
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(s);
        let position = Self::parse_next(&mut scanner)?;
        if !scanner.is_at_end() {
            return Err(ParseError::new(
                scanner.offset(),
                ParseErrorKind::TrailingInput(scanner.rest().to_owned()),
            ));
        }
        Ok(position)
    }

    /// Parse a position at the scanner, leaving it just past what was consumed.
    ///
    /// Alternatives are tried in order: column followed by row, column alone,
    /// row alone. The first that matches and validates wins, so `A1` is a
    /// cell and never a column followed by a stray `1`.
    pub(crate) fn parse_next(scanner: &mut Scanner<'_>) -> Result<Self, ParseError> {
        let start = scanner.offset();
        let letters = scanner.take_while(|b| b.is_ascii_uppercase());
        let after_letters = scanner.offset();
        let digits = scanner.take_while(|b| b.is_ascii_digit());

        if !letters.is_empty() && !digits.is_empty() {
            match (Column::new(letters), parse_row(digits)) {
                (Ok(column), Ok(row)) => return Ok(Position::ColumnAndRow(column, row)),
                // Only a row that fails validation falls through to the column
                (_, Err(kind @ ParseErrorKind::RowOutOfRange(_))) => {
                    return Err(ParseError::new(after_letters, kind));
                }
                _ => {}
            }
        }

        if !letters.is_empty() {
            scanner.rewind(after_letters);
            return Column::new(letters)
                .map(Position::ColumnOnly)
                .map_err(|err| ParseError::new(start, err));
        }

        if !digits.is_empty() {
            return parse_row(digits)
                .map(Position::RowOnly)
                .map_err(|kind| ParseError::new(start, kind));
        }

        scanner.rewind(start);
        Err(ParseError::new(start, ParseErrorKind::ExpectedPosition))
    }

    /// Format in A1 style
    pub fn to_a1_string(&self) -> String {
        self.to_string()
    }
}

fn parse_row(digits: &str) -> Result<Row, ParseErrorKind> {
    let number: i64 = digits
        .parse()
        .map_err(|_| ParseErrorKind::RowOutOfRange(digits.to_owned()))?;
    Ok(Row::new(number)?)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::ColumnOnly(column) => write!(f, "{column}"),
            Position::RowOnly(row) => write!(f, "{row}"),
            Position::ColumnAndRow(column, row) => write!(f, "{column}{row}"),
        }
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn col(label: &str) -> Column {
        Column::new(label).unwrap()
    }

    fn row(number: i64) -> Row {
        Row::new(number).unwrap()
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(
            Position::parse("A1").unwrap(),
            Position::ColumnAndRow(col("A"), row(1))
        );
        assert_eq!(
            Position::parse("XFD1048576").unwrap(),
            Position::ColumnAndRow(col("XFD"), row(1048576))
        );
        assert_eq!(
            Position::parse("B007").unwrap(),
            Position::ColumnAndRow(col("B"), row(7))
        );
    }

    #[test]
    fn test_parse_column_only() {
        assert_eq!(Position::parse("A").unwrap(), Position::ColumnOnly(col("A")));
        assert_eq!(
            Position::parse("ZZ").unwrap(),
            Position::ColumnOnly(col("ZZ"))
        );
    }

    #[test]
    fn test_parse_row_only() {
        assert_eq!(Position::parse("1").unwrap(), Position::RowOnly(row(1)));
        assert_eq!(Position::parse("250").unwrap(), Position::RowOnly(row(250)));
    }

    #[test]
    fn test_zero_row_falls_back_to_column() {
        let mut scanner = Scanner::new("A0");
        assert_eq!(
            Position::parse_next(&mut scanner).unwrap(),
            Position::ColumnOnly(col("A"))
        );
        assert_eq!(scanner.rest(), "0");

        let err = Position::parse("A0").unwrap_err();
        assert_eq!(err.offset, 1);
        assert_eq!(err.kind, ParseErrorKind::TrailingInput("0".into()));
    }

    #[test]
    fn test_oversized_row_after_column() {
        let err = Position::parse("A99999999999999999999").unwrap_err();
        assert_eq!(err.offset, 1);
        assert_eq!(
            err.kind,
            ParseErrorKind::RowOutOfRange("99999999999999999999".into())
        );

        let mut scanner = Scanner::new("AB99999999999999999999:B2");
        let err = Position::parse_next(&mut scanner).unwrap_err();
        assert_eq!(err.offset, 2);
        assert!(matches!(err.kind, ParseErrorKind::RowOutOfRange(_)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Position::parse("").unwrap_err().kind,
            ParseErrorKind::ExpectedPosition
        );
        assert_eq!(
            Position::parse("a1").unwrap_err().kind,
            ParseErrorKind::ExpectedPosition
        );
        assert_eq!(
            Position::parse("0").unwrap_err().kind,
            ParseErrorKind::Invalid(ValidationError::NotPositive(0))
        );
        assert!(matches!(
            Position::parse("99999999999999999999").unwrap_err().kind,
            ParseErrorKind::RowOutOfRange(_)
        ));
        assert!(matches!(
            Position::parse("A1B").unwrap_err().kind,
            ParseErrorKind::TrailingInput(_)
        ));
        assert!(Position::parse("$A$1").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::ColumnOnly(col("C")).to_string(), "C");
        assert_eq!(Position::RowOnly(row(100)).to_string(), "100");
        assert_eq!(Position::cell(col("C"), row(100)).to_a1_string(), "C100");
    }

    #[test]
    fn test_accessors() {
        let cell = Position::cell(col("B"), row(2));
        assert_eq!(cell.column(), Some(&col("B")));
        assert_eq!(cell.row(), Some(row(2)));
        assert_eq!(Position::ColumnOnly(col("B")).row(), None);
        assert_eq!(Position::RowOnly(row(2)).column(), None);
    }
}
