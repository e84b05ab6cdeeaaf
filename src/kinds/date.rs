//! `NullDate`: calendar dates as `YYYY-MM-DD`
//!
//! `from` treats 0001-01-01 as absent; see [`zero_date`].

use crate::errors::NullError;
use crate::scalar::{type_mismatch, Scalar};
use chrono::NaiveDate;
use serde::Serializer;
use serde_json::Value;
use std::fmt;
use type_mapping::kind::DATE_FORMAT;
use type_mapping::ScalarKind;

/// January 1 of year 1, the calendar zero value
pub fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

impl Scalar for NaiveDate {
    const KIND: ScalarKind = ScalarKind::Date;

    fn null_value() -> Self {
        zero_date()
    }

    fn is_zero_instant(&self) -> bool {
        *self == zero_date()
    }

    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(DATE_FORMAT))
    }

    /// Only the exact canonical layout is accepted. Padding, signs and
    /// short fields are rejected even where chrono would read them.
    fn parse_text(text: &str) -> Result<Self, NullError> {
        let parsed = NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|err| NullError::parse(Self::KIND, text, err))?;
        if parsed.format(DATE_FORMAT).to_string() != text {
            return Err(NullError::parse(Self::KIND, text, "expected YYYY-MM-DD"));
        }
        Ok(parsed)
    }

    /// The quoted payload goes through the text codec, so `""` and `"null"`
    /// are null too.
    fn decode_json(value: Value) -> Result<Option<Self>, NullError> {
        match value {
            Value::String(s) => Self::decode_text(s.as_bytes()),
            other => Err(type_mismatch::<Self>(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::zero_date;
    use crate::prelude::*;
    use chrono::NaiveDate;

    fn doomsday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2012, 12, 21).unwrap()
    }

    #[test]
    fn test_text_scenario() {
        let d = NullDate::from_text(b"2012-12-21").unwrap();
        assert_eq!(d, NullDate::new(doomsday(), true));
        assert_eq!(d.encode_text(), b"2012-12-21");

        assert!(NullDate::from_text(b"").unwrap().is_null());
        assert!(NullDate::from_text(b"null").unwrap().is_null());
    }

    #[test]
    fn test_text_rejects_other_layouts() {
        let mut d = NullDate::from(doomsday());
        assert!(d.decode_text(b"21/12/2012").is_err());
        assert!(d.is_null());
        assert!(NullDate::from_text(b"2012-12-21T00:00:00+0000").is_err());
    }

    #[test]
    fn test_text_rejects_non_canonical_forms() {
        for text in [
            "2012-1-5",
            "2012-12-1",
            " 2012-12-21",
            "2012-12-21 ",
            "+2012-12-21",
            "12-12-21",
        ] {
            let err = NullDate::from_text(text.as_bytes()).unwrap_err();
            assert!(matches!(err, NullError::Parse { .. }), "{:?}", text);
        }
        assert!(NullDate::from_json(b"\"2012-1-5\"").is_err());
        assert_eq!(NullDate::from_text(b"2012-01-05").unwrap().encode_text(), b"2012-01-05");
    }

    #[test]
    fn test_json_codec() {
        let d = NullDate::from(doomsday());
        assert_eq!(d.to_json().unwrap(), b"\"2012-12-21\"");
        assert_eq!(NullDate::from_json(b"\"2012-12-21\"").unwrap(), d);

        assert!(NullDate::from_json(b"null").unwrap().is_null());
        assert!(NullDate::from_json(b"\"\"").unwrap().is_null());
        assert_eq!(NullDate::null().to_json().unwrap(), b"null");

        assert!(matches!(
            NullDate::from_json(b"12345"),
            Err(NullError::TypeMismatch { .. })
        ));
        assert!(matches!(
            NullDate::from_json(b"{\"hello\": \"world\"}"),
            Err(NullError::TypeMismatch { found: "object", .. })
        ));
        assert!(matches!(
            NullDate::from_json(b"\"hello world\""),
            Err(NullError::Parse { .. })
        ));
    }

    #[test]
    fn test_from_treats_zero_date_as_null() {
        assert!(NullDate::from(zero_date()).is_null());
        assert!(!NullDate::new(zero_date(), true).is_null());
        assert!(!NullDate::from_optional(Some(zero_date())).is_null());
    }

    #[test]
    fn test_scan_accepts_dates_and_timestamps() {
        let mut d = NullDate::null();
        d.scan(&ScalarValue::Date(doomsday())).unwrap();
        assert_eq!(d, NullDate::from(doomsday()));

        let dt = doomsday().and_hms_opt(23, 59, 59).unwrap().and_utc();
        d.scan(&ScalarValue::from(dt)).unwrap();
        assert_eq!(d.value, doomsday());

        assert!(d.scan(&ScalarValue::from("2012-12-21")).is_err());
        assert!(d.is_null());
    }
}
