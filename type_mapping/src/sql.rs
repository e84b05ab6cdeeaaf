//! SQL type mapping utilities
//!
//! This module maps wrapper kinds to the column types used for DDL
//! generation.

use crate::kind::ScalarKind;
use config::TypeMappingConfig;

/// Built-in column type for a kind
pub fn default_sql_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Bool => "BOOLEAN",
        ScalarKind::Int => "BIGINT",
        ScalarKind::Uint => "BIGINT", // bound as i64, see the postgres module
        ScalarKind::Float => "DOUBLE PRECISION",
        ScalarKind::String => "TEXT",
        ScalarKind::Date => "DATE",
        ScalarKind::DateTime => "TIMESTAMP WITH TIME ZONE",
    }
}

/// Column type for a kind, honouring configured overrides
pub fn sql_type(kind: ScalarKind, config: &TypeMappingConfig) -> &str {
    let configured = match kind {
        ScalarKind::Bool => &config.bool,
        ScalarKind::Int => &config.int,
        ScalarKind::Uint => &config.uint,
        ScalarKind::Float => &config.float,
        ScalarKind::String => &config.string,
        ScalarKind::Date => &config.date,
        ScalarKind::DateTime => &config.date_time,
    };
    configured.as_deref().unwrap_or_else(|| default_sql_type(kind))
}
