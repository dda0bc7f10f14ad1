// Standard library
use std::io;

// 3rd party crates
use thiserror::Error;

/// Fatal configuration errors raised while building the target set.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("parsing dns servers list failed, wrong format used: '{0}'")]
    Malformed(String),

    #[error("unsupported network '{network}' in dns server '{entry}', expected udp or tcp")]
    UnsupportedNetwork { entry: String, network: String },

    #[error("invalid port in dns server '{0}'")]
    InvalidPort(String),

    #[error("dns server entry '{0}' has no address")]
    EmptyAddress(String),

    #[error("invalid host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("no hosts configured")]
    NoHosts,

    #[error("could not resolve dns server ip address for '{host}': {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("dns server host '{0}' resolved to no addresses")]
    NoAddresses(String),
}
