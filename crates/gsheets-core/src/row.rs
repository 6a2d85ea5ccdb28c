//! Row numbers

use crate::error::ValidationError;
use std::fmt;
use std::num::NonZeroU64;

/// A 1-based row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "u64")
)]
pub struct Row(NonZeroU64);

impl Row {
    /// Create a row number, checking that it is at least 1
    ///
    /// # Examples
    /// ```
    /// use gsheets_core::Row;
    ///
    /// assert_eq!(Row::new(1).unwrap().get(), 1);
    /// assert!(Row::new(0).is_err());
    /// assert!(Row::new(-3).is_err());
    /// ```
    pub fn new(number: i64) -> Result<Self, ValidationError> {
        u64::try_from(number)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(ValidationError::NotPositive(number))
    }

    /// The row number (1-based)
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Row {
    type Error = ValidationError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Row> for u64 {
    fn from(row: Row) -> Self {
        row.get()
    }
}
