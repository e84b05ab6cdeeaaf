//! The seven nullable scalar kinds
//!
//! Each submodule implements [`Scalar`](crate::Scalar) for one payload type.

mod boolean;
mod date;
mod date_time;
mod float;
mod int;
mod string;
mod uint;

use crate::nullable::Nullable;
use chrono::{DateTime, FixedOffset, NaiveDate};

pub use self::date::zero_date;
pub use self::date_time::zero_date_time;

/// Nullable boolean
pub type NullBool = Nullable<bool>;
/// Nullable 64-bit signed integer
pub type NullInt = Nullable<i64>;
/// Nullable 64-bit unsigned integer
pub type NullUint = Nullable<u64>;
/// Nullable 64-bit float
pub type NullFloat = Nullable<f64>;
/// Nullable UTF-8 string
pub type NullString = Nullable<String>;
/// Nullable calendar date, `YYYY-MM-DD`
pub type NullDate = Nullable<NaiveDate>;
/// Nullable date-time with UTC offset, `YYYY-MM-DDTHH:MM:SS±HHMM`
pub type NullDateTime = Nullable<DateTime<FixedOffset>>;
