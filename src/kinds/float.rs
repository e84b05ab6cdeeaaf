//! `NullFloat`: 64-bit floats in their shortest decimal form

use crate::errors::NullError;
use crate::scalar::{type_mismatch, Scalar};
use serde::ser::{Error as _, Serializer};
use serde_json::Value;
use std::fmt;
use type_mapping::ScalarKind;

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Float;

    fn null_value() -> Self {
        0.0
    }

    /// Shortest decimal that round-trips, never in exponent form
    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn parse_text(text: &str) -> Result<Self, NullError> {
        text.parse::<f64>()
            .map_err(|err| NullError::parse(Self::KIND, text, err))
    }

    fn decode_json(value: Value) -> Result<Option<Self>, NullError> {
        match &value {
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| type_mismatch::<Self>(&value)),
            other => Err(type_mismatch::<Self>(other)),
        }
    }

    /// NaN and infinities have no JSON form, so a valid non-finite value is
    /// an encode error rather than `null`.
    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.is_finite() {
            return Err(S::Error::custom(format!("cannot encode non-finite float {}", self)));
        }
        serializer.serialize_f64(*self)
    }
}
