//! Error type definitions
//!
//! Every builder and paging setter fails fast with
//! [`ResponseError::InvalidArgument`]; nothing is deferred to `build()`.
//! A status code without a catalog entry is never an error.

use rb_shared::Language;
use thiserror::Error;

/// Errors raised by response construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

impl ResponseError {
    /// Create an invalid-argument error for `field`
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(field, reason = %reason, "Rejected response argument");
        ResponseError::InvalidArgument { field, reason }
    }

    /// Name of the offending argument
    pub fn field(&self) -> &'static str {
        match self {
            ResponseError::InvalidArgument { field, .. } => field,
        }
    }

    /// Human-readable description of the violated rule
    pub fn reason(&self) -> &str {
        match self {
            ResponseError::InvalidArgument { reason, .. } => reason,
        }
    }
}

/// Errors raised while reading localized message tables
#[derive(Error, Debug)]
pub enum LocalizationError {
    #[error("Malformed message table for `{language}`: {source}")]
    Malformed {
        language: Language,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid status code key `{key}` in `{language}` message table")]
    InvalidCode { language: Language, key: String },

    #[error("Empty message for status {code} in `{language}` message table")]
    EmptyMessage { language: Language, code: i64 },
}
