//! End-to-end tests for A1 notation parsing and printing

use gsheets::prelude::*;
use gsheets::ParseErrorKind;
use pretty_assertions::assert_eq;

fn col(label: &str) -> Column {
    Column::new(label).unwrap()
}

fn row(number: i64) -> Row {
    Row::new(number).unwrap()
}

/// Column labels must be non-empty uppercase letters, rows must be positive
#[test]
fn test_primitive_validation() {
    assert_eq!(Column::new("").unwrap_err().reason(), "empty");
    assert_eq!(Column::new("ab").unwrap_err().reason(), "not all uppercase");
    assert!(Column::new("AB").is_ok());

    assert_eq!(Row::new(0).unwrap_err().reason(), "not positive");
    assert_eq!(Row::new(-3).unwrap_err().reason(), "not positive");
    assert!(Row::new(1).is_ok());
}

/// `A1` is a cell, not the column `A` followed by a stray `1`
#[test]
fn test_cell_wins_over_column() {
    assert_eq!(
        Position::parse("A1").unwrap(),
        Position::ColumnAndRow(col("A"), row(1))
    );
}

#[test]
fn test_range() {
    let range = Range::parse("A1:B2").unwrap();
    assert_eq!(
        range,
        Range::new(
            Position::ColumnAndRow(col("A"), row(1)),
            Position::ColumnAndRow(col("B"), row(2))
        )
    );
    assert_eq!(range.to_string(), "A1:B2");
}

#[test]
fn test_sheet_qualified() {
    let a1 = A1Notation::parse("Sheet1!A1:B2").unwrap();
    assert_eq!(
        a1,
        A1Notation::SheetNameAndRange("Sheet1".into(), Range::parse("A1:B2").unwrap())
    );
    assert_eq!(a1.to_string(), "Sheet1!A1:B2");
}

#[test]
fn test_bare_sheet_name() {
    assert_eq!(
        A1Notation::parse("MySheet").unwrap(),
        A1Notation::SheetNameOnly("MySheet".into())
    );
    assert_eq!(
        A1Notation::parse("Q3 Budget (draft)").unwrap(),
        A1Notation::SheetNameOnly("Q3 Budget (draft)".into())
    );
}

/// Once there is a `!`, what follows must be a range
#[test]
fn test_malformed_qualified_range() {
    for text in ["Sheet1!", "Sheet1!A1", "Sheet1!a1:b2", "Sheet1!A1:B2 ", "Sheet1!A0:B2"] {
        let err = A1Notation::parse(text).unwrap_err();
        assert!(err.offset >= 7, "{text}: {err}");
    }
}

#[test]
fn test_empty_inputs() {
    assert_eq!(A1Notation::parse("").unwrap_err().kind, ParseErrorKind::Empty);
    assert_eq!(
        A1Notation::parse("!A1:B2").unwrap_err().kind,
        ParseErrorKind::EmptySheetName
    );
}

/// Whole-column and whole-row ranges, as used for appends
#[test]
fn test_open_ranges() {
    let a1 = A1Notation::parse("Log!A:D").unwrap();
    let range = a1.range().unwrap();
    assert_eq!(range.start, Position::ColumnOnly(col("A")));
    assert_eq!(range.end, Position::ColumnOnly(col("D")));
    assert_eq!(range.end.column().and_then(Column::index), Some(3));

    let a1 = A1Notation::parse("5:5").unwrap();
    assert_eq!(a1.range().unwrap().start.row(), Some(row(5)));
}
