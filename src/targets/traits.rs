// Standard library
use std::io;
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;

/// Resolves resolver server names to addresses during startup.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns every address the name resolves to, in resolver order.
    async fn resolve_ips(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// [`HostResolver`] backed by the operating system resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHostResolver;

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn resolve_ips(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addresses = tokio::net::lookup_host((host, 0)).await?;
        Ok(addresses.map(|address| address.ip()).collect())
    }
}
