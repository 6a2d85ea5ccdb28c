//! Error types for gsheets-protocol, and the Sheets API error envelope

use crate::cursor::{CursorOp, JsonCursor};
use crate::decode::Decode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Status code used when an error payload could not be understood
pub const FALLBACK_ERROR_CODE: i64 = 400;

/// JSON could not be decoded into the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", at_path(.history))]
pub struct DecodingFailure {
    /// What went wrong, including any A1 parse error
    pub message: String,
    /// Path from the document root to the failing value
    pub history: Vec<CursorOp>,
}

impl DecodingFailure {
    pub fn new(message: impl Into<String>, history: Vec<CursorOp>) -> Self {
        Self {
            message: message.into(),
            history,
        }
    }

    /// Path rendered like `.error.code` or `.values[1]`
    pub fn path(&self) -> String {
        render_path(&self.history)
    }
}

fn render_path(history: &[CursorOp]) -> String {
    history.iter().map(ToString::to_string).collect()
}

fn at_path(history: &[CursorOp]) -> String {
    if history.is_empty() {
        String::new()
    } else {
        format!(" at {}", render_path(history))
    }
}

/// Failure of a request made through a [`SheetsTransport`](crate::SheetsTransport).
#[derive(Debug, Error)]
pub enum RequestError<E> {
    /// The transport could not deliver the request
    #[error(transparent)]
    Transport(E),

    /// The response did not decode
    #[error("Failed to decode response: {0}")]
    Decoding(#[from] DecodingFailure),

    /// The request body did not encode
    #[error("Failed to encode request body: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// An error reported by the Sheets API.
///
/// Decoded from `{"error": {"code": ..., "message": ..., "status": ...}}`.
/// Decoding through [`GsheetsError::from_json`] never fails: anything that
/// does not have that shape becomes a synthetic 400 error describing the
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Sheets API error {code} {status}: {message}")]
pub struct GsheetsError {
    pub code: i64,
    pub message: String,
    pub status: String,
}

impl GsheetsError {
    /// Decode the error envelope, falling back to a synthetic error
    ///
    /// # Examples
    /// ```
    /// use gsheets_protocol::GsheetsError;
    /// use serde_json::json;
    ///
    /// let err = GsheetsError::from_json(&json!({
    ///     "error": {"code": 404, "message": "Requested entity was not found.", "status": "NOT_FOUND"}
    /// }));
    /// assert_eq!(err.code, 404);
    ///
    /// let err = GsheetsError::from_json(&json!({"unexpected": true}));
    /// assert_eq!(err.code, 400);
    /// assert_eq!(err.status, "");
    /// ```
    pub fn from_json(value: &Value) -> Self {
        match JsonCursor::new(value).down_field("error").deserialize() {
            Ok(err) => err,
            Err(failure) => {
                tracing::warn!("Unrecognized error payload from the Sheets API ({failure})");
                Self::fallback(value)
            }
        }
    }

    fn fallback(value: &Value) -> Self {
        Self {
            code: FALLBACK_ERROR_CODE,
            message: format!(
                "Could not decode the Sheets API response: {value}. \
                 If the sheet is empty, add a row to it and try again."
            ),
            status: String::new(),
        }
    }
}

impl Decode for GsheetsError {
    fn decode(cursor: &JsonCursor<'_>) -> Result<Self, DecodingFailure> {
        Ok(match cursor.focus() {
            Some(value) => Self::from_json(value),
            None => Self::fallback(&Value::Null),
        })
    }
}
