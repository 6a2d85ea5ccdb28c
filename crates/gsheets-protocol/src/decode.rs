//! Decoding JSON responses into protocol types

use crate::cursor::JsonCursor;
use crate::error::DecodingFailure;
use serde_json::Value;

/// Types that can be decoded from the value under a [`JsonCursor`].
pub trait Decode: Sized {
    fn decode(cursor: &JsonCursor<'_>) -> Result<Self, DecodingFailure>;
}

/// Decode a whole JSON document
pub fn decode<T: Decode>(value: &Value) -> Result<T, DecodingFailure> {
    T::decode(&JsonCursor::new(value))
}

/// One of two decoded shapes; by convention `Right` is the success payload
/// and `Left` the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// `Right` becomes `Ok`, `Left` becomes `Err`
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(left) => Err(left),
            Either::Right(right) => Ok(right),
        }
    }
}

/// Tries `R` first and only then `L`, so a payload that fits both is a `Right`.
/// If neither fits, the failure from `L` is returned.
impl<L: Decode, R: Decode> Decode for Either<L, R> {
    fn decode(cursor: &JsonCursor<'_>) -> Result<Self, DecodingFailure> {
        match R::decode(cursor) {
            Ok(right) => Ok(Either::Right(right)),
            Err(failure) => {
                tracing::debug!("Response is not a success payload ({failure}), trying error shape");
                L::decode(cursor).map(Either::Left)
            }
        }
    }
}
