//! Building Sheets API requests

use crate::values::{ValueInputOption, ValueRange};
use gsheets_core::A1Notation;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use std::fmt;

/// Default Sheets API endpoint
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// Bytes escaped in a URL path segment. `!` and `:` are left alone so
/// ranges stay readable (`Sheet1!A1:B2`).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b':')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Request settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    /// How written values are interpreted
    pub value_input_option: ValueInputOption,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            value_input_option: ValueInputOption::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_value_input_option(mut self, option: ValueInputOption) -> Self {
        self.value_input_option = option;
        self
    }
}

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Put => write!(f, "PUT"),
        }
    }
}

/// A request ready to hand to a transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// `GET .../spreadsheets/{id}/values/{range}`
    pub fn get_values(config: &ClientConfig, spreadsheet_id: &str, range: &A1Notation) -> Self {
        let url = values_url(config, spreadsheet_id, range);
        tracing::debug!("Built values read request: GET {url}");
        Self {
            method: Method::Get,
            url,
            body: None,
        }
    }

    /// `PUT .../spreadsheets/{id}/values/{range}?valueInputOption=...` with
    /// the value range as body
    pub fn update_values(
        config: &ClientConfig,
        spreadsheet_id: &str,
        values: &ValueRange,
    ) -> Result<Self, serde_json::Error> {
        let url = format!(
            "{}?valueInputOption={}",
            values_url(config, spreadsheet_id, &values.range),
            config.value_input_option.as_str()
        );
        let body = serde_json::to_value(values)?;
        tracing::debug!("Built values update request: PUT {url}");
        Ok(Self {
            method: Method::Put,
            url,
            body: Some(body),
        })
    }
}

fn values_url(config: &ClientConfig, spreadsheet_id: &str, range: &A1Notation) -> String {
    format!(
        "{}/spreadsheets/{}/values/{}",
        config.base_url.trim_end_matches('/'),
        utf8_percent_encode(spreadsheet_id, PATH_SEGMENT),
        utf8_percent_encode(&range.to_string(), PATH_SEGMENT)
    )
}
