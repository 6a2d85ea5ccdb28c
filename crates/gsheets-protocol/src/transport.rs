//! The seam between request building/decoding and whatever speaks HTTP

use crate::credentials::Credentials;
use crate::decode::{decode, Decode, Either};
use crate::error::{GsheetsError, RequestError};
use crate::request::{ApiRequest, ClientConfig};
use crate::values::{UpdateValuesResponse, ValueRange};
use gsheets_core::A1Notation;
use serde_json::Value;

/// Result of a values call: the success payload, or the API's error
pub type ApiResult<T> = Either<GsheetsError, T>;

/// Something that can deliver an [`ApiRequest`] and return the JSON body of
/// the response, whatever its status code.
///
/// Implementors only provide [`send`](SheetsTransport::send) and
/// [`config`](SheetsTransport::config); the values calls are built on top.
pub trait SheetsTransport {
    type Error: std::error::Error + 'static;

    /// Settings used to build requests
    fn config(&self) -> &ClientConfig;

    /// Deliver a request and return the parsed response body
    fn send(&self, credentials: &Credentials, request: &ApiRequest) -> Result<Value, Self::Error>;

    /// Read the values at `range`
    fn get_values(
        &self,
        credentials: &Credentials,
        spreadsheet_id: &str,
        range: &A1Notation,
    ) -> Result<ApiResult<ValueRange>, RequestError<Self::Error>> {
        let request = ApiRequest::get_values(self.config(), spreadsheet_id, range);
        call(self, credentials, &request)
    }

    /// Write `values` to the range they name
    fn update_values(
        &self,
        credentials: &Credentials,
        spreadsheet_id: &str,
        values: &ValueRange,
    ) -> Result<ApiResult<UpdateValuesResponse>, RequestError<Self::Error>> {
        let request = ApiRequest::update_values(self.config(), spreadsheet_id, values)?;
        call(self, credentials, &request)
    }
}

fn call<S, T>(
    transport: &S,
    credentials: &Credentials,
    request: &ApiRequest,
) -> Result<ApiResult<T>, RequestError<S::Error>>
where
    S: SheetsTransport + ?Sized,
    T: Decode,
{
    let body = transport
        .send(credentials, request)
        .map_err(RequestError::Transport)?;
    Ok(decode(&body)?)
}
