//! Value ranges and update results exchanged with the Sheets API

use crate::cursor::JsonCursor;
use crate::decode::Decode;
use crate::error::DecodingFailure;
use gsheets_core::A1Notation;
use serde::{Deserialize, Serialize};

/// How the `values` grid of a [`ValueRange`] is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Dimension {
    /// `values[row][column]`
    #[default]
    Rows,
    /// `values[column][row]`
    Columns,
}

/// How written values are interpreted by the Sheets API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Stored exactly as given
    #[default]
    Raw,
    /// Parsed as if typed into the UI (numbers, dates, formulas)
    UserEntered,
}

impl ValueInputOption {
    /// Query string value
    pub fn as_str(self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

/// A grid of cell values at an A1 address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    pub range: A1Notation,
    #[serde(default)]
    pub major_dimension: Dimension,
    /// Omitted by the API when the range is empty
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

impl ValueRange {
    /// Create a row-major value range
    pub fn new(range: A1Notation, values: Vec<Vec<String>>) -> Self {
        Self {
            range,
            major_dimension: Dimension::Rows,
            values,
        }
    }

    /// Set the layout of `values`
    pub fn with_major_dimension(mut self, major_dimension: Dimension) -> Self {
        self.major_dimension = major_dimension;
        self
    }

    /// The values as rows, transposing column-major data.
    ///
    /// Columns of different lengths are padded with empty strings.
    pub fn rows(&self) -> Vec<Vec<String>> {
        match self.major_dimension {
            Dimension::Rows => self.values.clone(),
            Dimension::Columns => {
                let height = self.values.iter().map(Vec::len).max().unwrap_or(0);
                (0..height)
                    .map(|row| {
                        self.values
                            .iter()
                            .map(|column| column.get(row).cloned().unwrap_or_default())
                            .collect()
                    })
                    .collect()
            }
        }
    }
}

impl Decode for ValueRange {
    fn decode(cursor: &JsonCursor<'_>) -> Result<Self, DecodingFailure> {
        let field = |name: &str| cursor.clone().down_field(name);
        Ok(Self {
            range: field("range").deserialize()?,
            major_dimension: field("majorDimension").deserialize_or_default()?,
            values: field("values").deserialize_or_default()?,
        })
    }
}

/// What a values update changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    pub spreadsheet_id: String,
    pub updated_range: A1Notation,
    #[serde(default)]
    pub updated_rows: u64,
    #[serde(default)]
    pub updated_columns: u64,
    #[serde(default)]
    pub updated_cells: u64,
}

impl Decode for UpdateValuesResponse {
    fn decode(cursor: &JsonCursor<'_>) -> Result<Self, DecodingFailure> {
        let field = |name: &str| cursor.clone().down_field(name);
        Ok(Self {
            spreadsheet_id: field("spreadsheetId").deserialize()?,
            updated_range: field("updatedRange").deserialize()?,
            updated_rows: field("updatedRows").deserialize_or_default()?,
            updated_columns: field("updatedColumns").deserialize_or_default()?,
            updated_cells: field("updatedCells").deserialize_or_default()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_dimension_strings() {
        assert_eq!(serde_json::to_value(Dimension::Rows).unwrap(), json!("ROWS"));
        assert_eq!(
            serde_json::to_value(Dimension::Columns).unwrap(),
            json!("COLUMNS")
        );
        assert_eq!(
            serde_json::from_value::<Dimension>(json!("COLUMNS")).unwrap(),
            Dimension::Columns
        );
        assert!(serde_json::from_value::<Dimension>(json!("rows")).is_err());
    }

    #[test]
    fn test_value_input_option_strings() {
        assert_eq!(
            serde_json::to_value(ValueInputOption::Raw).unwrap(),
            json!("RAW")
        );
        assert_eq!(
            serde_json::to_value(ValueInputOption::UserEntered).unwrap(),
            json!("USER_ENTERED")
        );
        assert_eq!(ValueInputOption::UserEntered.as_str(), "USER_ENTERED");
    }

    #[test]
    fn test_decode_value_range() {
        let value = json!({
            "range": "Sheet1!A1:B2",
            "majorDimension": "ROWS",
            "values": [["a", "b"], ["c", "d"]]
        });
        let decoded: ValueRange = decode(&value).unwrap();
        assert_eq!(decoded.range, "Sheet1!A1:B2".parse::<A1Notation>().unwrap());
        assert_eq!(decoded.major_dimension, Dimension::Rows);
        assert_eq!(decoded.values, strings(&[&["a", "b"], &["c", "d"]]));
    }

    #[test]
    fn test_decode_empty_value_range() {
        let decoded: ValueRange = decode(&json!({"range": "Sheet1!A1:Z1000"})).unwrap();
        assert_eq!(decoded.major_dimension, Dimension::Rows);
        assert!(decoded.values.is_empty());
    }

    #[test]
    fn test_decode_value_range_bad_notation() {
        let failure = decode::<ValueRange>(&json!({"range": "Sheet1!", "values": []})).unwrap_err();
        assert!(failure.message.contains("invalid A1 notation"), "{failure}");
        assert!(failure.message.contains("expected a column"), "{failure}");
        assert_eq!(failure.path(), ".range");
    }

    #[test]
    fn test_decode_failure_paths() {
        let failure =
            decode::<ValueRange>(&json!({"range": "A1:B2", "majorDimension": "DIAGONAL"}))
                .unwrap_err();
        assert_eq!(failure.path(), ".majorDimension");

        let failure = decode::<ValueRange>(&json!({"values": []})).unwrap_err();
        assert_eq!(failure.to_string(), "missing value at .range");

        let failure = decode::<UpdateValuesResponse>(&json!({
            "spreadsheetId": "abc123",
            "updatedRange": "Sheet1!A0:B2"
        }))
        .unwrap_err();
        assert_eq!(failure.path(), ".updatedRange");
    }

    #[test]
    fn test_encode_value_range() {
        let range = ValueRange::new(
            "Data!A1:B1".parse().unwrap(),
            strings(&[&["x", "y"]]),
        );
        assert_eq!(
            serde_json::to_value(&range).unwrap(),
            json!({"range": "Data!A1:B1", "majorDimension": "ROWS", "values": [["x", "y"]]})
        );
    }

    #[test]
    fn test_rows_transposes_columns() {
        let range = ValueRange::new("A:B".parse().unwrap(), strings(&[&["a", "b", "c"], &["d"]]))
            .with_major_dimension(Dimension::Columns);
        assert_eq!(
            range.rows(),
            strings(&[&["a", "d"], &["b", ""], &["c", ""]])
        );

        let range = range.with_major_dimension(Dimension::Rows);
        assert_eq!(range.rows(), range.values);
    }

    #[test]
    fn test_decode_update_response() {
        let value = json!({
            "spreadsheetId": "abc123",
            "updatedRange": "Sheet1!A1:B2",
            "updatedRows": 2,
            "updatedColumns": 2,
            "updatedCells": 4
        });
        let decoded: UpdateValuesResponse = decode(&value).unwrap();
        assert_eq!(decoded.spreadsheet_id, "abc123");
        assert_eq!(decoded.updated_range.to_string(), "Sheet1!A1:B2");
        assert_eq!(
            (decoded.updated_rows, decoded.updated_columns, decoded.updated_cells),
            (2, 2, 4)
        );
    }
}
