// Standard library
use std::io;
use std::net::SocketAddr;

// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to listen on {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("metrics server failed: {0}")]
    Serve(#[source] io::Error),
}
