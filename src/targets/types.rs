// Standard library
use std::net::SocketAddr;

/// Transport used to reach a configured resolver server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Udp,
    Tcp,
}

/// A resolver server entry after normalization, before its address is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolverSpec {
    pub network: Network,
    /// Normalized `address:port`, exactly as it will appear in labels.
    pub address: String,
}

/// A resolver server ready to be queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverServer {
    pub network: Network,
    /// Configured name, e.g. `one.one.one.one:53`.
    pub name: String,
    /// Address the queries are sent to.
    pub address: SocketAddr,
}

/// A host probed against one resolver. `resolver: None` means the system resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub resolver: Option<ResolverServer>,
}
