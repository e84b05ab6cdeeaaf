//! Coercion helpers
//!
//! Boolean coercion, canonical string rendering and buffer cloning used by
//! the conversion engine.

use crate::errors::{ConversionError, ParseFailure};
use std::borrow::Cow;
use type_mapping::kind::{DATE_FORMAT, DATE_TIME_FORMAT};
use type_mapping::ScalarValue;

/// Coerce a dynamic value into a boolean.
///
/// Accepts booleans, the integers `0` and `1`, and the textual tokens
/// `1 t T TRUE true True` / `0 f F FALSE false False`.
pub fn coerce_bool(src: &ScalarValue<'_>) -> Result<bool, ConversionError> {
    match src {
        ScalarValue::Bool(b) => Ok(*b),
        ScalarValue::Int(i) => int_to_bool(*i == 1, *i == 0, i.to_string(), src),
        ScalarValue::Uint(u) => int_to_bool(*u == 1, *u == 0, u.to_string(), src),
        ScalarValue::Text(text) => parse_bool_token(text, src),
        ScalarValue::Bytes(bytes) => parse_bool_token(&String::from_utf8_lossy(bytes), src),
        ScalarValue::Null => Err(ConversionError::Unsupported {
            src_type: src.type_name(),
            dest_type: "bool",
        }),
        ScalarValue::Float(_) | ScalarValue::Date(_) | ScalarValue::DateTime(_) => {
            Err(ConversionError::TypeMismatch {
                src_type: src.type_name(),
                dest_type: "bool",
            })
        }
    }
}

fn int_to_bool(
    is_one: bool,
    is_zero: bool,
    text: String,
    src: &ScalarValue<'_>,
) -> Result<bool, ConversionError> {
    if is_one {
        Ok(true)
    } else if is_zero {
        Ok(false)
    } else {
        Err(ConversionError::Parse {
            src_type: src.type_name(),
            dest_type: "bool",
            text,
            reason: ParseFailure::Malformed,
        })
    }
}

fn parse_bool_token(text: &str, src: &ScalarValue<'_>) -> Result<bool, ConversionError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConversionError::Parse {
            src_type: src.type_name(),
            dest_type: "bool",
            text: text.to_string(),
            reason: ParseFailure::Malformed,
        }),
    }
}

/// Render a value in the canonical string form used for string-mediated
/// numeric conversion. `Null` has no rendering.
pub fn as_string<'a>(src: &'a ScalarValue<'_>) -> Option<Cow<'a, str>> {
    let rendered = match src {
        ScalarValue::Null => return None,
        ScalarValue::Text(text) => Cow::Borrowed(text.as_ref()),
        ScalarValue::Bytes(bytes) => String::from_utf8_lossy(bytes),
        ScalarValue::Bool(b) => Cow::Owned(b.to_string()),
        ScalarValue::Int(i) => Cow::Owned(i.to_string()),
        ScalarValue::Uint(u) => Cow::Owned(u.to_string()),
        ScalarValue::Float(f) => Cow::Owned(f.to_string()),
        ScalarValue::Date(d) => Cow::Owned(d.format(DATE_FORMAT).to_string()),
        ScalarValue::DateTime(dt) => Cow::Owned(dt.format(DATE_TIME_FORMAT).to_string()),
    };
    Some(rendered)
}

/// Copy a driver buffer so the destination never aliases it
pub fn clone_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.to_vec()
}
