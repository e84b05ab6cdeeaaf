//! Conversion engine
//!
//! [`assign`] stores a dynamic [`ScalarValue`] into a typed destination,
//! applying the first matching rule:
//!
//! 1. text or bytes into a string: direct copy
//! 2. anything into a bool: boolean coercion
//! 3. anything into a [`Scanner`](crate::Scanner): the scanner decides
//! 4. identical types: assign (bytes are cloned)
//! 5. same category (date and date-time): convert
//! 6. numeric destinations: render the source as a string and parse it at
//!    the destination's width
//! 7. text or bytes into a byte buffer: copy
//! 8. otherwise the conversion is unsupported
//!
//! The destination is only written when the conversion succeeds.

use crate::coerce::{as_string, clone_bytes, coerce_bool};
use crate::errors::{ConversionError, ParseFailure};
use crate::slot::{AsSlot, Slot};
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use std::borrow::Cow;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;
use type_mapping::ScalarValue;

/// Store `src` into `dest`, converting if possible
pub fn assign<D: AsSlot + ?Sized>(dest: &mut D, src: &ScalarValue<'_>) -> Result<(), ConversionError> {
    assign_slot(dest.as_slot(), src)
}

/// Store `src` into an already-resolved destination slot
pub fn assign_slot(dest: Slot<'_>, src: &ScalarValue<'_>) -> Result<(), ConversionError> {
    let src_type = src.type_name();
    let dest_type = dest.type_name();
    let unsupported = ConversionError::Unsupported { src_type, dest_type };

    match dest {
        Slot::Str(d) => match src {
            ScalarValue::Text(text) => {
                trace_log!("assign: copying {} into {}", src_type, dest_type);
                *d = text.to_string();
                Ok(())
            }
            ScalarValue::Bytes(bytes) => {
                trace_log!("assign: decoding {} into {}", src_type, dest_type);
                *d = String::from_utf8(clone_bytes(bytes)).map_err(|err| ConversionError::Parse {
                    src_type,
                    dest_type,
                    text: String::from_utf8_lossy(err.as_bytes()).into_owned(),
                    reason: ParseFailure::Malformed,
                })?;
                Ok(())
            }
            _ => Err(unsupported),
        },
        Slot::Bool(d) => {
            *d = coerce_bool(src)?;
            Ok(())
        }
        Slot::Scanner(scanner) => {
            trace_log!("assign: delegating {} to scanner {}", src_type, dest_type);
            scanner.scan(src)
        }
        Slot::I64(d) => {
            *d = match src {
                ScalarValue::Int(i) => *i,
                _ => parse_int(src, dest_type)?,
            };
            Ok(())
        }
        Slot::U64(d) => {
            *d = match src {
                ScalarValue::Uint(u) => *u,
                _ => parse_int(src, dest_type)?,
            };
            Ok(())
        }
        Slot::F64(d) => {
            *d = match src {
                ScalarValue::Float(f) => *f,
                _ => parse_float(src, dest_type, f64::is_infinite)?,
            };
            Ok(())
        }
        Slot::I8(d) => store(d, parse_int(src, dest_type)),
        Slot::I16(d) => store(d, parse_int(src, dest_type)),
        Slot::I32(d) => store(d, parse_int(src, dest_type)),
        Slot::U8(d) => store(d, parse_int(src, dest_type)),
        Slot::U16(d) => store(d, parse_int(src, dest_type)),
        Slot::U32(d) => store(d, parse_int(src, dest_type)),
        Slot::F32(d) => store(d, parse_float(src, dest_type, f32::is_infinite)),
        Slot::Bytes(d) => match src {
            ScalarValue::Bytes(bytes) => {
                *d = clone_bytes(bytes);
                Ok(())
            }
            ScalarValue::Text(text) => {
                *d = clone_bytes(text.as_bytes());
                Ok(())
            }
            _ => Err(unsupported),
        },
        Slot::Date(d) => match src {
            ScalarValue::Date(date) => {
                *d = *date;
                Ok(())
            }
            ScalarValue::DateTime(dt) => {
                trace_log!("assign: truncating {} to {}", src_type, dest_type);
                *d = dt.date_naive();
                Ok(())
            }
            _ => Err(unsupported),
        },
        Slot::DateTime(d) => match src {
            ScalarValue::DateTime(dt) => {
                *d = *dt;
                Ok(())
            }
            ScalarValue::Date(date) => {
                trace_log!("assign: widening {} to {}", src_type, dest_type);
                *d = start_of_day(*date).ok_or(unsupported)?;
                Ok(())
            }
            _ => Err(unsupported),
        },
    }
}

fn start_of_day(date: NaiveDate) -> Option<DateTime<FixedOffset>> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc.fix()))
}

fn store<T>(dest: &mut T, parsed: Result<T, ConversionError>) -> Result<(), ConversionError> {
    *dest = parsed?;
    Ok(())
}

fn render<'a>(src: &'a ScalarValue<'_>, dest_type: &'static str) -> Result<Cow<'a, str>, ConversionError> {
    as_string(src).ok_or(ConversionError::Unsupported {
        src_type: src.type_name(),
        dest_type,
    })
}

/// Parse through the canonical string form at the width of `T`
fn parse_int<T>(src: &ScalarValue<'_>, dest_type: &'static str) -> Result<T, ConversionError>
where
    T: FromStr<Err = ParseIntError>,
{
    let text = render(src, dest_type)?;
    trace_log!("assign: parsing {:?} as {}", text, dest_type);
    text.parse::<T>().map_err(|err| ConversionError::Parse {
        src_type: src.type_name(),
        dest_type,
        text: text.to_string(),
        reason: ParseFailure::from(&err),
    })
}

/// Parse at the precision of `T`. A finite literal that rounds to infinity
/// is out of range.
fn parse_float<T>(
    src: &ScalarValue<'_>,
    dest_type: &'static str,
    is_infinite: fn(T) -> bool,
) -> Result<T, ConversionError>
where
    T: FromStr<Err = ParseFloatError> + Copy,
{
    let text = render(src, dest_type)?;
    trace_log!("assign: parsing {:?} as {}", text, dest_type);
    let parse_error = |reason| ConversionError::Parse {
        src_type: src.type_name(),
        dest_type,
        text: text.to_string(),
        reason,
    };
    let parsed = text
        .parse::<T>()
        .map_err(|_| parse_error(ParseFailure::Malformed))?;
    if is_infinite(parsed) && !is_infinity_literal(&text) {
        debug_log!("assign: {:?} overflows {}", text, dest_type);
        return Err(parse_error(ParseFailure::OutOfRange));
    }
    Ok(parsed)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
