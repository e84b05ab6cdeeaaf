//! Error types for nullscalar
//!
//! This module contains the errors returned by the text and structured codecs
//! of the nullable wrappers. Storage reads return the engine's
//! [`ConversionError`] directly.

use thiserror::Error;
use type_mapping::ScalarKind;
use value_convert::ConversionError;

#[derive(Error, Debug)]
pub enum NullError {
    #[error("cannot decode {found} into nullable {expected}")]
    TypeMismatch {
        expected: ScalarKind,
        found: &'static str,
    },

    #[error("cannot parse {input:?} as {kind}: {reason}")]
    Parse {
        kind: ScalarKind,
        input: String,
        reason: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

impl NullError {
    pub(crate) fn parse(kind: ScalarKind, input: &str, reason: impl ToString) -> Self {
        NullError::Parse {
            kind,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
