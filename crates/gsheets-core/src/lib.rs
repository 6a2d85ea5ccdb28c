//! # gsheets-core
//!
//! A1 notation for the gsheets spreadsheet client.
//!
//! This crate provides the addressing types used throughout gsheets:
//! - [`Column`] and [`Row`] - validated column labels and row numbers
//! - [`Position`] - a column, a row, or a single cell
//! - [`Range`] - two positions joined by `:`
//! - [`A1Notation`] - a sheet name, a range, or `sheet!range`
//!
//! Every type parses with [`FromStr`](std::str::FromStr) and prints with
//! [`Display`](std::fmt::Display), and printing then parsing gives back the
//! same value. With the `serde` feature, [`A1Notation`] (de)serializes as
//! a single string and [`Column`]/[`Row`] are validated on the way in.
//!
//! ## Example
//!
//! ```rust
//! use gsheets_core::{A1Notation, Position};
//!
//! let a1: A1Notation = "Sheet1!A1:C10".parse().unwrap();
//! let range = a1.range().unwrap();
//!
//! assert_eq!(a1.sheet_name(), Some("Sheet1"));
//! assert!(matches!(range.start, Position::ColumnAndRow(_, _)));
//! assert_eq!(a1.to_string(), "Sheet1!A1:C10");
//! ```

pub mod column;
pub mod error;
pub mod notation;
pub mod position;
pub mod range;
pub mod row;

mod scanner;

// Re-exports for convenience
pub use column::Column;
pub use error::{ParseError, ParseErrorKind, ValidationError};
pub use notation::A1Notation;
pub use position::Position;
pub use range::Range;
pub use row::Row;
