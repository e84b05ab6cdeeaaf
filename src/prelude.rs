//! Prelude module
//!
//! Common imports for working with nullable scalars.

pub use crate::errors::NullError;
pub use crate::kinds::{NullBool, NullDate, NullDateTime, NullFloat, NullInt, NullString, NullUint};
pub use crate::nullable::Nullable;
pub use crate::scalar::Scalar;

pub use type_mapping::{ScalarKind, ScalarValue, ToScalarValue};
pub use value_convert::{assign, AsSlot, ConversionError, ParseFailure, Scanner, Slot};
