//! Tracing subscriber setup

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// Error returned when a global subscriber is already installed
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber described by `config`.
///
/// Safe to call more than once; only the first call installs a subscriber,
/// later calls return an error instead of panicking.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), InitError> {
    let builder = fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    match (config.format, config.timestamp) {
        (LogFormat::Json, true) => builder.json().try_init(),
        (LogFormat::Json, false) => builder.json().without_time().try_init(),
        (LogFormat::Pretty, true) => builder.pretty().try_init(),
        (LogFormat::Pretty, false) => builder.pretty().without_time().try_init(),
        (LogFormat::Compact, true) => builder.compact().try_init(),
        (LogFormat::Compact, false) => builder.compact().without_time().try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let config = LoggingConfig {
            level: String::from("warn"),
            format: LogFormat::Compact,
            colored: false,
            timestamp: false,
            source_location: false,
        };
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let config = LoggingConfig {
            level: String::from("[[not a directive"),
            ..LoggingConfig::default()
        };
        // Must not panic regardless of RUST_LOG in the test environment.
        let _ = env_filter(&config);
    }
}
