//! Prelude module - common imports for gsheets users
//!
//! ```rust
//! use gsheets::prelude::*;
//! ```

pub use crate::{
    decode,
    // Notation types
    A1Notation,
    ApiRequest,
    ApiResult,
    ClientConfig,
    Column,
    Credentials,
    Decode,
    Dimension,
    Either,
    // Error types
    GsheetsError,
    ParseError,
    Position,
    Range,
    Row,
    SheetsTransport,
    UpdateValuesResponse,
    ValidationError,
    ValueInputOption,
    ValueRange,
};
