//! Status code value type and its numeric bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest code of the application-defined band.
pub const CUSTOM_BAND_START: i64 = 4000;

const STRUCTURED_MIN: i64 = 100_000;
const STRUCTURED_MAX: i64 = 999_999;

/// Integer identifier of a response outcome.
///
/// Any integer can be wrapped; whether it is acceptable for a response is
/// decided by the builder's [`StatusPolicy`](crate::response::StatusPolicy),
/// and whether it has a canonical message by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(i64);

/// Numeric band a status code falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// 100-199
    Informational,
    /// 200-299
    Success,
    /// 300-399
    Redirection,
    /// 400-499
    ClientError,
    /// 500-599
    ServerError,
    /// 4000-99999, application-defined outcomes
    Custom,
    /// 6-digit `DDDCCC` codes grouping sub-reasons under a base category
    Structured,
    /// Anything else; never accepted by a builder
    Unclassified,
}

impl StatusCode {
    /// Wrap a raw integer without validation
    pub const fn new(code: i64) -> Self {
        StatusCode(code)
    }

    /// Build a structured code `base * 1000 + sequence`.
    ///
    /// Returns `None` unless `base` is a three-digit category (100-999)
    /// and `sequence` is within 0-999.
    pub fn structured(base: i64, sequence: i64) -> Option<Self> {
        if (100..=999).contains(&base) && (0..=999).contains(&sequence) {
            Some(StatusCode(base * 1000 + sequence))
        } else {
            None
        }
    }

    /// Raw integer value
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Band this code falls in
    pub fn class(&self) -> StatusClass {
        match self.0 {
            100..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirection,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            CUSTOM_BAND_START..=99_999 => StatusClass::Custom,
            STRUCTURED_MIN..=STRUCTURED_MAX => StatusClass::Structured,
            _ => StatusClass::Unclassified,
        }
    }

    /// Whether the code lies in the protocol-standard band (100-599)
    pub fn is_standard(&self) -> bool {
        (100..=599).contains(&self.0)
    }

    /// Split a structured code into `(base, sequence)`
    pub fn structured_parts(&self) -> Option<(i64, i64)> {
        match self.class() {
            StatusClass::Structured => Some((self.0 / 1000, self.0 % 1000)),
            _ => None,
        }
    }

    /// Canonical catalog message, if the code is registered
    pub fn canonical_message(&self) -> Option<&'static str> {
        super::catalog::message_for(*self)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StatusCode {
    fn from(code: i64) -> Self {
        StatusCode(code)
    }
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        StatusCode(i64::from(code))
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(i64::from(code))
    }
}

impl From<StatusCode> for i64 {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

impl PartialEq<i64> for StatusCode {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}
