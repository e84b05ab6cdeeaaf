//! # nullscalar
//!
//! Nullable scalar types that keep SQL NULL distinct from a zero value, and
//! carry that distinction through JSON, plain text and database drivers.
//!
//! ## Quick Start
//!
//! ```rust
//! use nullscalar::prelude::*;
//!
//! let count = NullInt::from_json(b"12345")?;
//! assert_eq!(count.as_optional(), Some(&12345));
//!
//! let missing = NullInt::from_json(b"null")?;
//! assert!(missing.is_null());
//!
//! // Zero is a value, not null
//! let zero = NullInt::from(0i64);
//! assert!(!zero.is_null());
//! assert_eq!(zero.to_json()?, b"0");
//!
//! // Storage reads convert whatever the driver delivered
//! let mut parsed = NullInt::null();
//! parsed.scan(&ScalarValue::from("42"))?;
//! assert_eq!(parsed, NullInt::from(42i64));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod kinds;
pub mod nullable;
pub mod postgres;
pub mod prelude;
pub mod scalar;

// Re-export the main public types for convenience
pub use errors::NullError;
pub use kinds::{NullBool, NullDate, NullDateTime, NullFloat, NullInt, NullString, NullUint};
pub use nullable::Nullable;
pub use scalar::Scalar;

// Re-export centralized config
pub use config::{AppConfig, TypeMappingConfig};

// Re-export internal crates used in the public API
pub use type_mapping;
pub use value_convert;
