//! `NullString`: UTF-8 text where only the empty payload is null

use crate::errors::NullError;
use crate::scalar::{type_mismatch, Scalar};
use serde::Serializer;
use serde_json::Value;
use std::fmt;
use type_mapping::ScalarKind;

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn null_value() -> Self {
        String::new()
    }

    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn parse_text(text: &str) -> Result<Self, NullError> {
        Ok(text.to_string())
    }

    /// Never fails: only the empty payload is null, and `null` is a string
    /// like any other. Invalid UTF-8 is replaced rather than rejected.
    fn decode_text(text: &[u8]) -> Result<Option<Self>, NullError> {
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(text).into_owned()))
    }

    fn decode_json(value: Value) -> Result<Option<Self>, NullError> {
        match value {
            Value::String(s) => Ok(Some(s)),
            other => Err(type_mismatch::<Self>(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_empty_string_is_not_null() {
        let s = NullString::new(String::new(), true);
        assert!(!s.is_null());
        assert_eq!(s.to_json().unwrap(), b"\"\"");
        assert_eq!(NullString::from_json(b"\"\"").unwrap(), s);
    }

    #[test]
    fn test_json_escaping() {
        let s = NullString::from("say \"hi\"\n".to_string());
        let encoded = s.to_json().unwrap();
        assert_eq!(encoded, br#""say \"hi\"\n""#);
        assert_eq!(NullString::from_json(&encoded).unwrap(), s);
        assert!(matches!(
            NullString::from_json(b"12"),
            Err(NullError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_text_codec_never_errors() {
        assert!(NullString::from_text(b"").unwrap().is_null());

        let literal = NullString::from_text(b"null").unwrap();
        assert!(!literal.is_null());
        assert_eq!(literal.value, "null");

        let lossy = NullString::from_text(&[b'a', 0xff]).unwrap();
        assert_eq!(lossy.value, "a\u{fffd}");
        assert_eq!(NullString::from("test".to_string()).encode_text(), b"test");
    }

    #[test]
    fn test_scan_copies_driver_buffer() {
        let mut buffer = b"first".to_vec();
        let mut s = NullString::null();
        s.scan(&ScalarValue::from(buffer.as_slice())).unwrap();
        buffer.copy_from_slice(b"fifth");
        assert_eq!(s.value, "first");

        let err = s.scan(&ScalarValue::Int(1)).unwrap_err();
        assert!(matches!(err, ConversionError::Unsupported { .. }));
        assert!(s.is_null());
    }
}
