// Standard library
use std::time::Duration;

// 3rd party crates
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Invalid {field} duration '{value}', expected e.g. 500ms, 5s, 1m or 1h")]
    InvalidDuration { field: &'static str, value: String },
    #[error("{0} must be greater than 0")]
    ZeroDuration(&'static str),
    #[error("{field} '{value}' exceeds the maximum of {max:?}")]
    DurationTooLarge {
        field: &'static str,
        value: String,
        max: Duration,
    },
    #[error("Invalid listen address: {0}")]
    InvalidListen(String),
    #[error("No hosts configured")]
    NoHosts,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}
