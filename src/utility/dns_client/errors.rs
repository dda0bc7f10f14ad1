// Standard library
use std::io;
use std::time::Duration;

// 3rd party crates
use hickory_proto::error::ProtoError;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid host name '{host}': {source}")]
    InvalidName {
        host: String,
        #[source]
        source: ProtoError,
    },

    #[error("DNS message error: {0}")]
    Proto(#[from] ProtoError),

    #[error("network error: {0}")]
    Io(#[from] io::Error),

    #[error("resolver task failed: {0}")]
    Task(#[from] JoinError),

    #[error("query too large for TCP framing: {0} bytes")]
    QueryTooLarge(usize),

    #[error("response id {got} does not match query id {expected}")]
    IdMismatch { expected: u16, got: u16 },

    #[error("negative response: {0}")]
    NegativeResponse(String),

    #[error("no addresses returned")]
    NoAddresses,
}

impl LookupError {
    /// Response code of the answer, when the server answered at all.
    pub fn response_code(&self) -> Option<&str> {
        match self {
            LookupError::NegativeResponse(code) => Some(code),
            _ => None,
        }
    }
}
