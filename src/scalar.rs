//! Per-kind scalar behaviour
//!
//! [`Scalar`] is implemented by the seven payload types a [`Nullable`](crate::Nullable)
//! can carry. It holds the kind-specific rules; the wrapper supplies the
//! null handling shared by every kind.

use crate::errors::NullError;
use serde::Serializer;
use serde_json::Value;
use std::fmt;
use type_mapping::{ScalarKind, ScalarValue, ToScalarValue};
use value_convert::{AsSlot, ConversionError};

pub trait Scalar: Clone + PartialEq + fmt::Debug + AsSlot + ToScalarValue {
    const KIND: ScalarKind;

    /// Value held while the wrapper is null
    fn null_value() -> Self;

    /// Whether `From<T>` should treat this value as absent. Only the
    /// calendar kinds say yes, for their zero instant.
    fn is_zero_instant(&self) -> bool {
        false
    }

    /// Canonical textual form
    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Parse a non-empty, non-`null` text payload
    fn parse_text(text: &str) -> Result<Self, NullError>;

    /// Text codec decode. `Ok(None)` means null.
    fn decode_text(text: &[u8]) -> Result<Option<Self>, NullError> {
        let text = std::str::from_utf8(text).map_err(|err| {
            NullError::parse(Self::KIND, &String::from_utf8_lossy(text), err)
        })?;
        if text.is_empty() || text == "null" {
            return Ok(None);
        }
        Self::parse_text(text).map(Some)
    }

    /// Structured codec decode of a non-null JSON value. `Ok(None)` means null.
    fn decode_json(value: Value) -> Result<Option<Self>, NullError>;

    /// Structured codec encode of a valid value
    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>;

    /// Storage read of a non-null driver value
    fn scan_value(src: &ScalarValue<'_>) -> Result<Self, ConversionError> {
        let mut value = Self::null_value();
        value_convert::assign(&mut value, src)?;
        Ok(value)
    }
}

/// Shape name of a JSON value, used in type mismatch errors
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn type_mismatch<T: Scalar>(value: &Value) -> NullError {
    NullError::TypeMismatch {
        expected: T::KIND,
        found: json_type_name(value),
    }
}
