//! Dynamic value definitions
//!
//! This module provides the closed set of value shapes a storage driver
//! hands to (and accepts from) the nullable wrappers.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::borrow::Cow;

/// A dynamically-typed scalar as delivered by a storage driver.
///
/// Text and bytes borrow from the driver's buffer when possible. Drivers
/// commonly reuse that buffer for the next row, so consumers copy out of it.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
}

impl<'a> ScalarValue<'a> {
    /// Dynamic type descriptor, used in conversion errors
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarValue::Null => "null",
            ScalarValue::Bool(_) => "bool",
            ScalarValue::Int(_) => "int64",
            ScalarValue::Uint(_) => "uint64",
            ScalarValue::Float(_) => "float64",
            ScalarValue::Text(_) => "string",
            ScalarValue::Bytes(_) => "bytes",
            ScalarValue::Date(_) => "date",
            ScalarValue::DateTime(_) => "datetime",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Detach from any borrowed driver buffer
    pub fn into_owned(self) -> ScalarValue<'static> {
        match self {
            ScalarValue::Null => ScalarValue::Null,
            ScalarValue::Bool(b) => ScalarValue::Bool(b),
            ScalarValue::Int(i) => ScalarValue::Int(i),
            ScalarValue::Uint(u) => ScalarValue::Uint(u),
            ScalarValue::Float(f) => ScalarValue::Float(f),
            ScalarValue::Text(s) => ScalarValue::Text(Cow::Owned(s.into_owned())),
            ScalarValue::Bytes(b) => ScalarValue::Bytes(Cow::Owned(b.into_owned())),
            ScalarValue::Date(d) => ScalarValue::Date(d),
            ScalarValue::DateTime(dt) => ScalarValue::DateTime(dt),
        }
    }
}

/// Storage write path: produce a driver-representable value, or `Null`
pub trait ToScalarValue {
    fn to_scalar_value(&self) -> ScalarValue<'static>;
}

impl From<bool> for ScalarValue<'_> {
    fn from(val: bool) -> Self {
        ScalarValue::Bool(val)
    }
}

macro_rules! widen_from {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for ScalarValue<'_> {
                fn from(val: $ty) -> Self {
                    ScalarValue::$variant(<$wide>::from(val))
                }
            }
        )*
    };
}

widen_from!(Int as i64: i8, i16, i32, i64);
widen_from!(Uint as u64: u8, u16, u32, u64);
widen_from!(Float as f64: f32, f64);

impl From<String> for ScalarValue<'_> {
    fn from(val: String) -> Self {
        ScalarValue::Text(Cow::Owned(val))
    }
}

impl<'a> From<&'a str> for ScalarValue<'a> {
    fn from(val: &'a str) -> Self {
        ScalarValue::Text(Cow::Borrowed(val))
    }
}

impl From<Vec<u8>> for ScalarValue<'_> {
    fn from(val: Vec<u8>) -> Self {
        ScalarValue::Bytes(Cow::Owned(val))
    }
}

impl<'a> From<&'a [u8]> for ScalarValue<'a> {
    fn from(val: &'a [u8]) -> Self {
        ScalarValue::Bytes(Cow::Borrowed(val))
    }
}

impl From<NaiveDate> for ScalarValue<'_> {
    fn from(val: NaiveDate) -> Self {
        ScalarValue::Date(val)
    }
}

impl From<DateTime<FixedOffset>> for ScalarValue<'_> {
    fn from(val: DateTime<FixedOffset>) -> Self {
        ScalarValue::DateTime(val)
    }
}

impl From<DateTime<Utc>> for ScalarValue<'_> {
    fn from(val: DateTime<Utc>) -> Self {
        ScalarValue::DateTime(val.fixed_offset())
    }
}

impl<'a, T> From<Option<T>> for ScalarValue<'a>
where
    T: Into<ScalarValue<'a>>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => ScalarValue::Null,
        }
    }
}

macro_rules! to_scalar_by_copy {
    ($($ty:ty),*) => {
        $(
            impl ToScalarValue for $ty {
                fn to_scalar_value(&self) -> ScalarValue<'static> {
                    ScalarValue::from(*self)
                }
            }
        )*
    };
}

to_scalar_by_copy!(bool, i64, u64, f64, NaiveDate, DateTime<FixedOffset>);

impl ToScalarValue for String {
    fn to_scalar_value(&self) -> ScalarValue<'static> {
        ScalarValue::Text(Cow::Owned(self.clone()))
    }
}

impl ToScalarValue for Vec<u8> {
    fn to_scalar_value(&self) -> ScalarValue<'static> {
        ScalarValue::Bytes(Cow::Owned(self.clone()))
    }
}

impl<T: ToScalarValue> ToScalarValue for Option<T> {
    fn to_scalar_value(&self) -> ScalarValue<'static> {
        match self {
            Some(v) => v.to_scalar_value(),
            None => ScalarValue::Null,
        }
    }
}
