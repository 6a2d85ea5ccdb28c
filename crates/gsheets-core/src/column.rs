//! Column labels

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// A column label such as `A`, `Z` or `AB`.
///
/// Always non-empty and made only of the letters `A`-`Z`. The only way to
/// get one is through [`Column::new`] (or its `TryFrom`/`FromStr`/serde
/// equivalents), which checks that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Column(String);

impl Column {
    /// Create a column label, checking that it is non-empty and all uppercase
    ///
    /// # Examples
    /// ```
    /// use gsheets_core::Column;
    ///
    /// assert_eq!(Column::new("AB").unwrap().as_str(), "AB");
    /// assert!(Column::new("").is_err());
    /// assert!(Column::new("ab").is_err());
    /// ```
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ValidationError::EmptyColumn);
        }
        if !label.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ValidationError::NotAllUppercase(label));
        }
        Ok(Self(label))
    }

    /// Label for a 0-based column index (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn from_index(index: u32) -> Self {
        let mut letters = Vec::new();
        let mut n = u64::from(index) + 1;

        while n > 0 {
            n -= 1;
            letters.push(b'A' + (n % 26) as u8);
            n /= 26;
        }
        letters.reverse();

        Self(letters.into_iter().map(char::from).collect())
    }

    /// 0-based index of this column (A = 0, Z = 25, AA = 26, etc.)
    ///
    /// `None` if the label is too long for a `u32` index.
    pub fn index(&self) -> Option<u32> {
        let mut col: u64 = 0;
        for b in self.0.bytes() {
            col = col
                .checked_mul(26)?
                .checked_add(u64::from(b - b'A') + 1)?;
        }
        u32::try_from(col - 1).ok()
    }

    /// The label text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Column {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Column {
    type Error = ValidationError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::new(label)
    }
}

impl From<Column> for String {
    fn from(column: Column) -> Self {
        column.0
    }
}

impl AsRef<str> for Column {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
