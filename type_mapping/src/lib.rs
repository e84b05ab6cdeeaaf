//! Dynamic scalar values and kind mapping
//! This crate provides the driver-facing value shapes used across the nullscalar ecosystem

pub mod kind;
pub mod sql;
pub mod types;

pub use kind::ScalarKind;
pub use sql::{default_sql_type, sql_type};
pub use types::{ScalarValue, ToScalarValue};
