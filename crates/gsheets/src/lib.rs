//! # gsheets
//!
//! A1 notation and JSON protocol types for working with Google Sheets ranges.
//!
//! ## Features
//!
//! - Parse and print A1 notation (`Sheet1!A1:B2`, `A:C`, `MySheet`)
//! - Validated column labels and row numbers
//! - Decode value ranges, update results and API error envelopes
//! - Build values read/update requests for any HTTP transport
//!
//! ## Example
//!
//! ```rust
//! use gsheets::prelude::*;
//! use serde_json::json;
//!
//! let a1: A1Notation = "Sheet1!A1:B2".parse().unwrap();
//! assert_eq!(a1.sheet_name(), Some("Sheet1"));
//!
//! let response = json!({
//!     "range": "Sheet1!A1:B2",
//!     "majorDimension": "ROWS",
//!     "values": [["name", "score"], ["ada", "10"]]
//! });
//! let decoded: ApiResult<ValueRange> = decode(&response).unwrap();
//! let values = decoded.into_result().unwrap();
//! assert_eq!(values.range, a1);
//! assert_eq!(values.values[1][0], "ada");
//! ```

pub mod prelude;

// Re-export core types
pub use gsheets_core::{
    // Notation types
    A1Notation,
    Column,
    // Error types
    ParseError,
    ParseErrorKind,
    Position,
    Range,
    Row,
    ValidationError,
};

// Re-export protocol types
pub use gsheets_protocol::{
    decode,
    // Request types
    ApiRequest,
    ApiResult,
    ClientConfig,
    Credentials,
    CursorOp,
    Decode,
    DecodingFailure,
    Dimension,
    Either,
    GsheetsError,
    JsonCursor,
    Method,
    RequestError,
    SheetsTransport,
    // Response types
    UpdateValuesResponse,
    ValueInputOption,
    ValueRange,
    DEFAULT_BASE_URL,
    FALLBACK_ERROR_CODE,
};
