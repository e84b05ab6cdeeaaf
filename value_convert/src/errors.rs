//! Error types for value conversion
//!
//! This module defines the errors returned when a dynamic value cannot be
//! stored into a destination slot.

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use thiserror::Error;

/// Why a string-mediated parse failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// The text is not a number of the destination's kind
    Malformed,
    /// The number does not fit the destination's width
    OutOfRange,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::Malformed => write!(f, "invalid syntax"),
            ParseFailure::OutOfRange => write!(f, "value out of range"),
        }
    }
}

impl From<&ParseIntError> for ParseFailure {
    fn from(err: &ParseIntError) -> Self {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseFailure::OutOfRange,
            _ => ParseFailure::Malformed,
        }
    }
}

/// Conversion engine errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("converting {src_type} ({text:?}) to {dest_type}: {reason}")]
    Parse {
        src_type: &'static str,
        dest_type: &'static str,
        text: String,
        reason: ParseFailure,
    },

    #[error("cannot convert {src_type} into {dest_type}")]
    TypeMismatch {
        src_type: &'static str,
        dest_type: &'static str,
    },

    #[error("unsupported conversion, storing {src_type} into {dest_type}")]
    Unsupported {
        src_type: &'static str,
        dest_type: &'static str,
    },

    /// Failure reported by a custom [`Scanner`](crate::Scanner)
    #[error("{0}")]
    Custom(String),
}

impl ConversionError {
    /// The parse failure behind this error, if any
    pub fn parse_failure(&self) -> Option<ParseFailure> {
        match self {
            ConversionError::Parse { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        self.parse_failure() == Some(ParseFailure::OutOfRange)
    }
}
