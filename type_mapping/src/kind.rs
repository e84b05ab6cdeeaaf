//! Wrapper kinds
//!
//! This module names the seven nullable scalar kinds and their fixed
//! textual formats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO-8601 calendar date, `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// ISO-8601 date-time with a numeric UTC offset, `YYYY-MM-DDTHH:MM:SS±HHMM`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Bool,
    Int,
    Uint,
    Float,
    String,
    Date,
    DateTime,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 7] = [
        ScalarKind::Bool,
        ScalarKind::Int,
        ScalarKind::Uint,
        ScalarKind::Float,
        ScalarKind::String,
        ScalarKind::Date,
        ScalarKind::DateTime,
    ];

    /// Name used in error messages and configuration keys
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::Uint => "uint",
            ScalarKind::Float => "float",
            ScalarKind::String => "string",
            ScalarKind::Date => "date",
            ScalarKind::DateTime => "date_time",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
