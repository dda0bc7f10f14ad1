// Standard library
use std::string::FromUtf8Error;

// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metrics registry error: {0}")]
    Registry(#[from] prometheus::Error),

    #[error("encoded metrics are not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}
