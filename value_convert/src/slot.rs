//! Destination slots
//!
//! A [`Slot`] is a mutable borrow of a typed destination together with the
//! tag the engine dispatches on.

use crate::errors::ConversionError;
use chrono::{DateTime, FixedOffset, NaiveDate};
use type_mapping::ScalarValue;

/// Self-decoding capability. A destination implementing it takes over its
/// own conversion entirely.
pub trait Scanner {
    fn scan(&mut self, src: &ScalarValue<'_>) -> Result<(), ConversionError>;

    /// Destination type descriptor, used in conversion errors
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Typed destination of a conversion
pub enum Slot<'d> {
    Bool(&'d mut bool),
    I8(&'d mut i8),
    I16(&'d mut i16),
    I32(&'d mut i32),
    I64(&'d mut i64),
    U8(&'d mut u8),
    U16(&'d mut u16),
    U32(&'d mut u32),
    U64(&'d mut u64),
    F32(&'d mut f32),
    F64(&'d mut f64),
    Str(&'d mut String),
    Bytes(&'d mut Vec<u8>),
    Date(&'d mut NaiveDate),
    DateTime(&'d mut DateTime<FixedOffset>),
    Scanner(&'d mut dyn Scanner),
}

impl Slot<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Slot::Bool(_) => "bool",
            Slot::I8(_) => "int8",
            Slot::I16(_) => "int16",
            Slot::I32(_) => "int32",
            Slot::I64(_) => "int64",
            Slot::U8(_) => "uint8",
            Slot::U16(_) => "uint16",
            Slot::U32(_) => "uint32",
            Slot::U64(_) => "uint64",
            Slot::F32(_) => "float32",
            Slot::F64(_) => "float64",
            Slot::Str(_) => "string",
            Slot::Bytes(_) => "bytes",
            Slot::Date(_) => "date",
            Slot::DateTime(_) => "datetime",
            Slot::Scanner(scanner) => scanner.type_name(),
        }
    }
}

/// Types that can be used as a conversion destination.
///
/// Custom destinations implement [`Scanner`] and return [`Slot::Scanner`].
pub trait AsSlot {
    fn as_slot(&mut self) -> Slot<'_>;
}

macro_rules! native_slot {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl AsSlot for $ty {
                fn as_slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }
        )*
    };
}

native_slot! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
    Vec<u8> => Bytes,
    NaiveDate => Date,
    DateTime<FixedOffset> => DateTime,
}
