//! Value Convert - conversion of dynamic driver values into typed destinations
//!
//! This crate provides the engine behind every nullable wrapper's storage read
//! path: [`assign`] coerces a [`ScalarValue`] into a typed [`Slot`].

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod assign;
pub mod coerce;
pub mod errors;
pub mod slot;


pub use assign::{assign, assign_slot};
pub use coerce::{as_string, clone_bytes, coerce_bool};
pub use errors::{ConversionError, ParseFailure};
pub use slot::{AsSlot, Scanner, Slot};
pub use type_mapping::ScalarValue;
