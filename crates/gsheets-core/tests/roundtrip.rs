//! Printing then parsing gives back the same value, for every layer

use gsheets_core::{A1Notation, Column, Position, Range, Row};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn column() -> impl Strategy<Value = Column> {
    "[A-Z]{1,4}".prop_map(|label| Column::new(label).unwrap())
}

fn row() -> impl Strategy<Value = Row> {
    (1i64..=10_000_000).prop_map(|number| Row::new(number).unwrap())
}

fn position() -> impl Strategy<Value = Position> {
    prop_oneof![
        column().prop_map(Position::ColumnOnly),
        row().prop_map(Position::RowOnly),
        (column(), row()).prop_map(|(c, r)| Position::ColumnAndRow(c, r)),
    ]
}

fn range() -> impl Strategy<Value = Range> {
    (position(), position()).prop_map(|(start, end)| Range::new(start, end))
}

fn sheet_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _:.-]{1,16}".prop_filter("sheet name must not read as a range", |name| {
        Range::parse(name).is_err()
    })
}

fn notation() -> impl Strategy<Value = A1Notation> {
    prop_oneof![
        sheet_name().prop_map(A1Notation::SheetNameOnly),
        range().prop_map(A1Notation::RangeOnly),
        (sheet_name(), range()).prop_map(|(name, r)| A1Notation::SheetNameAndRange(name, r)),
    ]
}

proptest! {
    #[test]
    fn position_roundtrip(pos in position()) {
        prop_assert_eq!(Position::parse(&pos.to_string()).unwrap(), pos);
    }

    #[test]
    fn range_roundtrip(r in range()) {
        prop_assert_eq!(Range::parse(&r.to_string()).unwrap(), r);
    }

    #[test]
    fn notation_roundtrip(a1 in notation()) {
        prop_assert_eq!(A1Notation::parse(&a1.to_string()).unwrap(), a1);
    }

    #[test]
    fn column_index_roundtrip(index in 0u32..1_000_000) {
        prop_assert_eq!(Column::from_index(index).index(), Some(index));
    }
}

#[test]
fn test_known_renderings() {
    for text in ["A1:B2", "Sheet1!A1:B2", "Data!A:A", "Data!3:7", "B:C9", "MySheet"] {
        let a1: A1Notation = text.parse().unwrap();
        assert_eq!(a1.to_string(), text);
    }
}
