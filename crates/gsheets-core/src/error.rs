//! Error types for gsheets-core

use thiserror::Error;

/// A primitive value violated its constraint at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Column label is the empty string
    #[error("column label is empty")]
    EmptyColumn,

    /// Column label contains something other than `A`-`Z`
    #[error("column label {0:?} is not all uppercase")]
    NotAllUppercase(String),

    /// Row number below 1
    #[error("row number {0} is not positive")]
    NotPositive(i64),
}

impl ValidationError {
    /// Short machine-friendly reason for the failure
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::EmptyColumn => "empty",
            ValidationError::NotAllUppercase(_) => "not all uppercase",
            ValidationError::NotPositive(_) => "not positive",
        }
    }
}

/// What the parser expected and did not find.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Nothing to parse
    #[error("empty input")]
    Empty,

    /// No column letters and no row digits at this point
    #[error("expected a column, a row or a cell")]
    ExpectedPosition,

    /// Missing `:` between the two ends of a range
    #[error("expected ':'")]
    ExpectedSeparator,

    /// Input left over after a complete range
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),

    /// Sheet qualifier with nothing before the `!`
    #[error("empty sheet name before '!'")]
    EmptySheetName,

    /// Row digits that do not fit in a row number
    #[error("row number {0} is out of range")]
    RowOutOfRange(String),

    /// Matched text failed primitive validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Input text did not match the A1 grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    /// Byte offset into the input where the failure was detected
    pub offset: usize,
    /// What went wrong
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(offset: usize, kind: impl Into<ParseErrorKind>) -> Self {
        Self {
            offset,
            kind: kind.into(),
        }
    }

    /// Move the offset right by `by` bytes, for errors raised on a suffix
    pub(crate) fn shifted(mut self, by: usize) -> Self {
        self.offset += by;
        self
    }
}
