//! Nullable wrapper
//!
//! This module provides [`Nullable`], a scalar paired with a validity flag.
//! A zero payload with `valid == true` is a real value, never null.

use crate::errors::NullError;
use crate::scalar::Scalar;
use config::TypeMappingConfig;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use type_mapping::{ScalarKind, ScalarValue, ToScalarValue};
use value_convert::{AsSlot, ConversionError, Scanner, Slot};

/// A scalar that may be SQL NULL.
///
/// `value` is only meaningful while `valid` is true. Every codec emits its
/// null representation for an invalid wrapper, whatever `value` holds.
#[derive(Debug, Clone, Copy)]
pub struct Nullable<T> {
    pub value: T,
    pub valid: bool,
}

impl<T: Scalar> Nullable<T> {
    pub fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }

    pub fn null() -> Self {
        Self::new(T::null_value(), false)
    }

    /// `None` becomes null, `Some(v)` a valid `v`
    pub fn from_optional(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::new(v, true),
            None => Self::null(),
        }
    }

    /// Read a driver value, see [`Scanner::scan`]
    pub fn from_scalar(src: &ScalarValue<'_>) -> Result<Self, NullError> {
        let mut nullable = Self::null();
        nullable.scan(src)?;
        Ok(nullable)
    }

    /// Store `value` and mark the wrapper valid
    pub fn set_valid(&mut self, value: T) {
        self.value = value;
        self.valid = true;
    }

    pub fn is_null(&self) -> bool {
        !self.valid
    }

    pub fn as_optional(&self) -> Option<&T> {
        if self.valid { Some(&self.value) } else { None }
    }

    pub fn into_optional(self) -> Option<T> {
        if self.valid { Some(self.value) } else { None }
    }

    pub fn kind(&self) -> ScalarKind {
        T::KIND
    }

    /// Column type for this kind, honouring configured overrides
    pub fn sql_type(config: &TypeMappingConfig) -> &str {
        type_mapping::sql_type(T::KIND, config)
    }

    /// Empty for null, otherwise the kind's canonical form
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    fn reset(&mut self) {
        self.value = T::null_value();
        self.valid = false;
    }

    // ========================================
    // Text codec
    // ========================================

    pub fn from_text(text: &[u8]) -> Result<Self, NullError> {
        Ok(match T::decode_text(text)? {
            Some(value) => Self::new(value, true),
            None => Self::null(),
        })
    }

    /// Decode in place. On failure the wrapper is left null.
    pub fn decode_text(&mut self, text: &[u8]) -> Result<(), NullError> {
        let decoded = Self::from_text(text);
        self.replace_with(decoded)
    }

    /// Empty for null, otherwise the canonical form without quotes
    pub fn encode_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    // ========================================
    // Structured (JSON) codec
    // ========================================

    pub fn from_json(data: &[u8]) -> Result<Self, NullError> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_json_value(value)
    }

    /// Decode in place. On failure the wrapper is left null.
    pub fn decode_json(&mut self, data: &[u8]) -> Result<(), NullError> {
        let decoded = Self::from_json(data);
        self.replace_with(decoded)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, NullError> {
        Ok(serde_json::to_vec(self)?)
    }

    fn from_json_value(value: Value) -> Result<Self, NullError> {
        if value.is_null() {
            return Ok(Self::null());
        }
        Ok(Self::from_optional(T::decode_json(value)?))
    }

    fn replace_with(&mut self, decoded: Result<Self, NullError>) -> Result<(), NullError> {
        match decoded {
            Ok(decoded) => {
                *self = decoded;
                Ok(())
            }
            Err(err) => {
                debug_log!("nullable {}: decode failed: {}", T::KIND, err);
                self.reset();
                Err(err)
            }
        }
    }
}

impl<T: Scalar> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

/// Any two nulls are equal; otherwise both must be valid with equal values.
impl<T: Scalar> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.valid, other.valid) {
            (true, true) => self.value == other.value,
            (false, false) => true,
            _ => false,
        }
    }
}

impl<T: Scalar> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        let valid = !value.is_zero_instant();
        Self::new(value, valid)
    }
}

impl<T: Scalar> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_optional(value)
    }
}

impl<T: Scalar> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            self.value.fmt_canonical(f)
        } else {
            Ok(())
        }
    }
}

impl<T: Scalar> FromStr for Nullable<T> {
    type Err = NullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s.as_bytes())
    }
}

// ========================================
// Storage interface
// ========================================

impl<T: Scalar> Scanner for Nullable<T> {
    /// `Null` clears the wrapper; anything else goes through the kind's
    /// conversion. A failed conversion leaves the wrapper null.
    fn scan(&mut self, src: &ScalarValue<'_>) -> Result<(), ConversionError> {
        if src.is_null() {
            self.reset();
            return Ok(());
        }
        match T::scan_value(src) {
            Ok(value) => {
                self.set_valid(value);
                Ok(())
            }
            Err(err) => {
                debug_log!("nullable {}: scan of {} failed: {}", T::KIND, src.type_name(), err);
                self.reset();
                Err(err)
            }
        }
    }

    fn type_name(&self) -> &'static str {
        T::KIND.name()
    }
}

impl<T: Scalar> AsSlot for Nullable<T> {
    fn as_slot(&mut self) -> Slot<'_> {
        Slot::Scanner(self)
    }
}

impl<T: Scalar> ToScalarValue for Nullable<T> {
    fn to_scalar_value(&self) -> ScalarValue<'static> {
        if self.valid {
            self.value.to_scalar_value()
        } else {
            ScalarValue::Null
        }
    }
}

// ========================================
// serde
// ========================================

impl<T: Scalar> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            self.value.serialize_value(serializer)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T: Scalar> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(value).map_err(de::Error::custom)
    }
}
