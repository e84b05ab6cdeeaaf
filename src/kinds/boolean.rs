//! `NullBool`: booleans, text vocabulary `true` / `false`

use crate::errors::NullError;
use crate::scalar::{type_mismatch, Scalar};
use serde::Serializer;
use serde_json::Value;
use std::fmt;
use type_mapping::{ScalarKind, ScalarValue};
use value_convert::{coerce_bool, ConversionError};

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn null_value() -> Self {
        false
    }

    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    /// Only the literals `true` and `false` are accepted
    fn parse_text(text: &str) -> Result<Self, NullError> {
        match text {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(NullError::parse(Self::KIND, text, "expected true or false")),
        }
    }

    fn decode_json(value: Value) -> Result<Option<Self>, NullError> {
        match value {
            Value::Bool(b) => Ok(Some(b)),
            other => Err(type_mismatch::<Self>(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(*self)
    }

    fn scan_value(src: &ScalarValue<'_>) -> Result<Self, ConversionError> {
        coerce_bool(src)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_false_is_not_null() {
        let b = NullBool::new(false, true);
        assert!(!b.is_null());
        assert_eq!(b.to_canonical_string(), "false");
        assert_eq!(b.to_json().unwrap(), b"false");
    }

    #[test]
    fn test_text_vocabulary() {
        assert_eq!(NullBool::from_text(b"true").unwrap(), NullBool::from(true));
        assert_eq!(NullBool::from_text(b"false").unwrap(), NullBool::from(false));
        assert!(NullBool::from_text(b"").unwrap().is_null());
        assert!(NullBool::from_text(b"null").unwrap().is_null());

        let mut b = NullBool::from(true);
        let err = b.decode_text(b"1").unwrap_err();
        assert!(matches!(err, NullError::Parse { .. }));
        assert!(b.is_null());
    }

    #[test]
    fn test_json_rejects_numbers() {
        let mut b = NullBool::from(true);
        let err = b.decode_json(b"1").unwrap_err();
        assert!(matches!(
            err,
            NullError::TypeMismatch {
                expected: ScalarKind::Bool,
                found: "number"
            }
        ));
        assert!(b.is_null());
    }

    #[test]
    fn test_scan_uses_boolean_coercion() {
        let mut b = NullBool::null();
        b.scan(&ScalarValue::from("t")).unwrap();
        assert_eq!(b, NullBool::from(true));
        b.scan(&ScalarValue::Int(0)).unwrap();
        assert_eq!(b, NullBool::from(false));
        b.scan(&ScalarValue::from(b"TRUE".to_vec())).unwrap();
        assert_eq!(b, NullBool::from(true));

        assert!(b.scan(&ScalarValue::Float(1.0)).is_err());
        assert!(b.is_null());
    }
}
