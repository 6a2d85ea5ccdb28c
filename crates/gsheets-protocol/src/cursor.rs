//! Navigating JSON values while remembering the path taken

use crate::error::DecodingFailure;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// One navigation step of a [`JsonCursor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorOp {
    /// Moved into an object field
    DownField(String),
    /// Moved into an array element
    DownIndex(usize),
}

impl fmt::Display for CursorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorOp::DownField(name) => write!(f, ".{name}"),
            CursorOp::DownIndex(index) => write!(f, "[{index}]"),
        }
    }
}

/// A position inside a JSON document.
///
/// Moving to a field or element that does not exist is not an error by
/// itself; the cursor just loses its focus, and the failure shows up (with
/// the full history) when something is decoded there.
#[derive(Debug, Clone)]
pub struct JsonCursor<'a> {
    focus: Option<&'a Value>,
    history: Vec<CursorOp>,
}

impl<'a> JsonCursor<'a> {
    /// Cursor at the root of `value`
    pub fn new(value: &'a Value) -> Self {
        Self {
            focus: Some(value),
            history: Vec::new(),
        }
    }

    /// Move into the object field `name`
    pub fn down_field(mut self, name: &str) -> Self {
        self.focus = self.focus.and_then(|value| value.get(name));
        self.history.push(CursorOp::DownField(name.to_owned()));
        self
    }

    /// Move into array element `index`
    pub fn down_index(mut self, index: usize) -> Self {
        self.focus = self.focus.and_then(|value| value.get(index));
        self.history.push(CursorOp::DownIndex(index));
        self
    }

    /// The value under the cursor, if the path exists
    pub fn focus(&self) -> Option<&'a Value> {
        self.focus
    }

    /// Steps taken from the root, oldest first
    pub fn history(&self) -> &[CursorOp] {
        &self.history
    }

    /// Deserialize the value under the cursor
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, DecodingFailure> {
        let value = self
            .focus
            .ok_or_else(|| DecodingFailure::new("missing value", self.history.clone()))?;
        T::deserialize(value).map_err(|err| DecodingFailure::new(err.to_string(), self.history.clone()))
    }

    /// Deserialize the value under the cursor, or `T::default()` when it is
    /// missing or null
    pub fn deserialize_or_default<T: DeserializeOwned + Default>(&self) -> Result<T, DecodingFailure> {
        match self.focus {
            None | Some(Value::Null) => Ok(T::default()),
            Some(_) => self.deserialize(),
        }
    }
}
