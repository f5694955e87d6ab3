//! Shared utilities and common types for the response builder
//!
//! This crate provides ambient functionality used by the core crate:
//! - Environment and logging configuration
//! - Tracing subscriber initialisation
//! - Language types for localized response messages

pub mod config;
pub mod logging;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig};
pub use logging::init_tracing;
pub use types::{Language, LanguagePreference};
