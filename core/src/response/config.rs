//! Builder configuration

use crate::status::{StatusCode, CUSTOM_BAND_START};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable selecting the [`StatusPolicy`]
pub const STATUS_POLICY_ENV: &str = "RESPONSE_STATUS_POLICY";

/// Process-wide builder configuration, read from the environment on first use
static PROCESS_CONFIG: Lazy<BuilderConfig> = Lazy::new(|| {
    let config = BuilderConfig::from_env();
    tracing::debug!(status_policy = %config.status_policy, "Resolved builder configuration");
    config
});

/// Which status codes `set_status` accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Protocol-standard codes only: 100-599
    Standard,
    /// 100-599, plus every application code from 4000 up
    /// (covers the 6-digit structured band)
    Extended,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        StatusPolicy::Extended
    }
}

impl StatusPolicy {
    /// Whether `code` may be set on a builder under this policy
    pub fn accepts(&self, code: StatusCode) -> bool {
        match self {
            StatusPolicy::Standard => code.is_standard(),
            StatusPolicy::Extended => code.is_standard() || code.as_i64() >= CUSTOM_BAND_START,
        }
    }

    /// Accepted range, phrased for error messages
    pub fn describe(&self) -> &'static str {
        match self {
            StatusPolicy::Standard => "between 100 and 599",
            StatusPolicy::Extended => "between 100 and 599, or 4000 and above",
        }
    }
}

impl std::fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusPolicy::Standard => write!(f, "standard"),
            StatusPolicy::Extended => write!(f, "extended"),
        }
    }
}

impl std::str::FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "http" => Ok(StatusPolicy::Standard),
            "extended" | "custom" => Ok(StatusPolicy::Extended),
            _ => Err(format!("Invalid status policy: {}", s)),
        }
    }
}

/// Configuration carried by a [`ResponseBuilder`](super::ResponseBuilder)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Accepted status code bands
    #[serde(default)]
    pub status_policy: StatusPolicy,
}

impl BuilderConfig {
    pub fn new(status_policy: StatusPolicy) -> Self {
        Self { status_policy }
    }

    /// Read the policy from `RESPONSE_STATUS_POLICY`, falling back to the default
    pub fn from_env() -> Self {
        match env::var(STATUS_POLICY_ENV) {
            Ok(raw) => Self::from_setting(&raw),
            Err(_) => Self::default(),
        }
    }

    /// Configuration used by builders that were not given one explicitly.
    ///
    /// Resolved once per process from `RESPONSE_STATUS_POLICY`; later changes
    /// to the variable are not picked up.
    pub fn process_default() -> Self {
        *PROCESS_CONFIG
    }

    fn from_setting(raw: &str) -> Self {
        match raw.parse() {
            Ok(status_policy) => Self { status_policy },
            Err(error) => {
                tracing::warn!(%error, "Ignoring {}, using default status policy", STATUS_POLICY_ENV);
                Self::default()
            }
        }
    }
}
