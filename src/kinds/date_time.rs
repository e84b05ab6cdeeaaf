//! `NullDateTime`: instants with a numeric UTC offset,
//! `YYYY-MM-DDTHH:MM:SS±HHMM`

use super::date::zero_date;
use crate::errors::NullError;
use crate::scalar::{type_mismatch, Scalar};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Serializer;
use serde_json::Value;
use std::fmt;
use type_mapping::kind::DATE_TIME_FORMAT;
use type_mapping::ScalarKind;

/// Midnight UTC on January 1 of year 1, the date-time zero value
pub fn zero_date_time() -> DateTime<FixedOffset> {
    zero_date()
        .and_hms_opt(0, 0, 0)
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc.fix()))
        .unwrap_or_else(|| DateTime::<Utc>::MIN_UTC.fixed_offset())
}

impl Scalar for DateTime<FixedOffset> {
    const KIND: ScalarKind = ScalarKind::DateTime;

    fn null_value() -> Self {
        zero_date_time()
    }

    /// The zero instant in any offset
    fn is_zero_instant(&self) -> bool {
        *self == zero_date_time()
    }

    /// The offset is written to the minute. Offsets carrying seconds, which
    /// only arise from values built in code, lose them here; text decode
    /// never produces one.
    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(DATE_TIME_FORMAT))
    }

    fn parse_text(text: &str) -> Result<Self, NullError> {
        let parsed = DateTime::parse_from_str(text, DATE_TIME_FORMAT)
            .map_err(|err| NullError::parse(Self::KIND, text, err))?;
        if parsed.format(DATE_TIME_FORMAT).to_string() != text {
            return Err(NullError::parse(
                Self::KIND,
                text,
                "expected YYYY-MM-DDTHH:MM:SS+HHMM",
            ));
        }
        Ok(parsed)
    }

    fn decode_json(value: Value) -> Result<Option<Self>, NullError> {
        match value {
            Value::String(s) => Self::decode_text(s.as_bytes()),
            other => Err(type_mismatch::<Self>(&other)),
        }
    }

    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.format(DATE_TIME_FORMAT))
    }
}
