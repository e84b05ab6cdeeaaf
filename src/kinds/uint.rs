//! `NullUint`

use crate::errors::NullError;
use crate::scalar::{type_mismatch, Scalar};
use serde::Serializer;
use serde_json::Value;
use std::fmt;
use type_mapping::ScalarKind;

impl Scalar for u64 {
    const KIND: ScalarKind = ScalarKind::Uint;

    fn null_value() -> Self {
        0
    }

    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn parse_text(text: &str) -> Result<Self, NullError> {
        text.parse::<u64>()
            .map_err(|err| NullError::parse(Self::KIND, text, err))
    }

    /// Negative, fractional and overflowing numbers are errors
    fn decode_json(value: Value) -> Result<Option<Self>, NullError> {
        match value {
            Value::Number(_) => Ok(Some(serde_json::from_value::<u64>(value)?)),
            other => Err(type_mismatch::<Self>(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(*self)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_json_codec() {
        let u = NullUint::from_json(b"12345").unwrap();
        assert_eq!(u, NullUint::from(12345u64));
        assert_eq!(u.to_json().unwrap(), b"12345");

        let max = NullUint::from_json(b"18446744073709551615").unwrap();
        assert_eq!(max.value, u64::MAX);

        assert!(NullUint::from_json(b"null").unwrap().is_null());
        assert_eq!(NullUint::null().to_json().unwrap(), b"null");
    }

    #[test]
    fn test_json_overflow_is_an_error() {
        let mut u = NullUint::from(1u64);
        assert!(u.decode_json(b"18446744073709551616").is_err());
        assert!(u.is_null());
        assert!(NullUint::from_json(b"-1").is_err());
        assert!(matches!(
            NullUint::from_json(b"false"),
            Err(NullError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_text_codec() {
        assert_eq!(NullUint::from_text(b"0").unwrap(), NullUint::new(0, true));
        assert!(NullUint::from_text(b"-1").is_err());
        assert!(NullUint::from_text(b"null").unwrap().is_null());
        assert_eq!(NullUint::from(7u64).encode_text(), b"7");
    }

    #[test]
    fn test_scan_from_signed_source() {
        let mut u = NullUint::null();
        u.scan(&ScalarValue::Int(42)).unwrap();
        assert_eq!(u, NullUint::from(42u64));

        let err = u.scan(&ScalarValue::Int(-1)).unwrap_err();
        assert_eq!(err.parse_failure(), Some(ParseFailure::Malformed));
        assert!(u.is_null());
    }
}
