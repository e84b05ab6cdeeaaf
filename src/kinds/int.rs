//! `NullInt`: signed 64-bit integers
//!
//! JSON numbers decode straight into `i64`, so values past 2^53 keep every digit.

use crate::errors::NullError;
use crate::scalar::{type_mismatch, Scalar};
use serde::Serializer;
use serde_json::Value;
use std::fmt;
use type_mapping::ScalarKind;

impl Scalar for i64 {
    const KIND: ScalarKind = ScalarKind::Int;

    fn null_value() -> Self {
        0
    }

    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn parse_text(text: &str) -> Result<Self, NullError> {
        text.parse::<i64>()
            .map_err(|err| NullError::parse(Self::KIND, text, err))
    }

    /// The number is decoded straight into `i64` so large values never pass
    /// through a float; non-integral numbers are rejected.
    fn decode_json(value: Value) -> Result<Option<Self>, NullError> {
        match value {
            Value::Number(_) => Ok(Some(serde_json::from_value::<i64>(value)?)),
            other => Err(type_mismatch::<Self>(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*self)
    }
}
