//! Top-level A1 notation: sheet name, range, or both

use crate::error::{ParseError, ParseErrorKind};
use crate::range::Range;
use std::fmt;
use std::str::FromStr;

/// Separator between a sheet name and a range
const SHEET_SEPARATOR: char = '!';

/// An A1 notation address.
///
/// - `Sheet1` names a whole sheet
/// - `A1:B2` is a range on the default (first) sheet
/// - `Sheet1!A1:B2` is a range on a named sheet
///
/// Sheet names never contain `!`. A name that would itself parse as a range
/// (say `A1:B2`) cannot be written as [`A1Notation::SheetNameOnly`] and read
/// back unchanged; parsing prefers the range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum A1Notation {
    /// A whole sheet, by name
    SheetNameOnly(String),
    /// A range with no sheet qualifier
    RangeOnly(Range),
    /// A range on a named sheet
    SheetNameAndRange(String, Range),
}

impl A1Notation {
    /// The sheet name, if there is one
    pub fn sheet_name(&self) -> Option<&str> {
        match self {
            A1Notation::SheetNameOnly(name) | A1Notation::SheetNameAndRange(name, _) => {
                Some(name)
            }
            A1Notation::RangeOnly(_) => None,
        }
    }

    /// The range, if there is one
    pub fn range(&self) -> Option<&Range> {
        match self {
            A1Notation::RangeOnly(range) | A1Notation::SheetNameAndRange(_, range) => Some(range),
            A1Notation::SheetNameOnly(_) => None,
        }
    }

    /// Parse A1 notation
    ///
    /// Tried in order: `sheet!range`, a bare range, a bare sheet name. Once a
    /// `!` is present the text after it must be a range; there is no
    /// fallback to a sheet name.
    ///
    /// # Examples
    /// ```
    /// use gsheets_core::A1Notation;
    ///
    /// let a1 = A1Notation::parse("Sheet1!A1:B2").unwrap();
    /// assert_eq!(a1.sheet_name(), Some("Sheet1"));
    /// assert_eq!(a1.to_string(), "Sheet1!A1:B2");
    ///
    /// assert!(matches!(A1Notation::parse("MySheet"), Ok(A1Notation::SheetNameOnly(_))));
    /// assert!(A1Notation::parse("Sheet1!").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        tracing::trace!("parsing A1 notation {s:?}");

        if s.is_empty() {
            return Err(ParseError::new(0, ParseErrorKind::Empty));
        }

        if let Some((sheet, rest)) = s.split_once(SHEET_SEPARATOR) {
            if sheet.is_empty() {
                return Err(ParseError::new(0, ParseErrorKind::EmptySheetName));
            }
            let range = Range::parse(rest).map_err(|err| err.shifted(sheet.len() + 1))?;
            return Ok(A1Notation::SheetNameAndRange(sheet.to_owned(), range));
        }

        match Range::parse(s) {
            Ok(range) => Ok(A1Notation::RangeOnly(range)),
            Err(_) => Ok(A1Notation::SheetNameOnly(s.to_owned())),
        }
    }

    /// Format in A1 style
    pub fn to_a1_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for A1Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            A1Notation::SheetNameOnly(name) => f.write_str(name),
            A1Notation::RangeOnly(range) => write!(f, "{range}"),
            A1Notation::SheetNameAndRange(name, range) => {
                write!(f, "{name}{SHEET_SEPARATOR}{range}")
            }
        }
    }
}

impl FromStr for A1Notation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Range> for A1Notation {
    fn from(range: Range) -> Self {
        A1Notation::RangeOnly(range)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for A1Notation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for A1Notation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse::<A1Notation>().map_err(|err| {
            serde::de::Error::custom(format!("invalid A1 notation {text:?}: {err}"))
        })
    }
}
