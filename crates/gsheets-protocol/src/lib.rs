//! JSON protocol types for the Google Sheets values API.
//!
//! Everything here is transport-agnostic: requests are built as
//! [`ApiRequest`] values and responses are decoded from
//! [`serde_json::Value`]s. Plugging in an HTTP client means implementing
//! [`SheetsTransport`].
//!
//! Responses decode as [`Either`]`<`[`GsheetsError`]`, T>`. The success
//! shape is tried first; anything else is read as an error envelope, and an
//! envelope that cannot be read still produces a [`GsheetsError`].

pub mod credentials;
pub mod cursor;
pub mod decode;
pub mod error;
pub mod request;
pub mod transport;
pub mod values;

pub use credentials::Credentials;
pub use cursor::{CursorOp, JsonCursor};
pub use decode::{decode, Decode, Either};
pub use error::{DecodingFailure, GsheetsError, RequestError, FALLBACK_ERROR_CODE};
pub use request::{ApiRequest, ClientConfig, Method, DEFAULT_BASE_URL};
pub use transport::{ApiResult, SheetsTransport};
pub use values::{Dimension, UpdateValuesResponse, ValueInputOption, ValueRange};
