// Standard library
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

// Project imports
use crate::metrics::TargetLabels;

// Current module imports
use super::constants::{DEFAULT_DNS_PORT, NETWORK_SEPARATOR, SYSTEM_RESOLVER_LABEL};
use super::errors::TargetError;
use super::types::{Network, ResolverServer, ResolverSpec, Target};

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "udp" => Ok(Network::Udp),
            "tcp" => Ok(Network::Tcp),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Udp => f.write_str("udp"),
            Network::Tcp => f.write_str("tcp"),
        }
    }
}

impl ResolverSpec {
    /// Parses one `[network://]address[:port]` entry.
    pub fn parse(entry: &str) -> Result<Self, TargetError> {
        let entry = entry.trim();
        let parts: Vec<&str> = entry.split(NETWORK_SEPARATOR).collect();

        let (network, address) = match parts.as_slice() {
            [address] => (Network::Udp, *address),
            [network, address] => {
                let network = network.parse::<Network>().map_err(|network| {
                    TargetError::UnsupportedNetwork {
                        entry: entry.to_string(),
                        network,
                    }
                })?;
                (network, *address)
            }
            _ => return Err(TargetError::Malformed(entry.to_string())),
        };

        Ok(ResolverSpec {
            network,
            address: normalize_address(entry, address)?,
        })
    }

    /// Splits the normalized address into its host part and port.
    pub fn host_and_port(&self) -> Option<(&str, u16)> {
        let (host, port) = self.address.rsplit_once(':')?;
        Some((host, port.parse().ok()?))
    }
}

/// Appends the default port when missing. Bare IPv6 literals get brackets.
fn normalize_address(entry: &str, address: &str) -> Result<String, TargetError> {
    if address.is_empty() {
        return Err(TargetError::EmptyAddress(entry.to_string()));
    }

    if address.parse::<SocketAddr>().is_ok() {
        return Ok(address.to_string());
    }

    let unbracketed = address
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(address);
    if let Ok(ip) = unbracketed.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT).to_string());
    }

    match address.rsplit_once(':') {
        Some((host, port)) => {
            if host.is_empty() {
                return Err(TargetError::EmptyAddress(entry.to_string()));
            }
            if host.contains(':') || port.parse::<u16>().is_err() {
                return Err(TargetError::InvalidPort(entry.to_string()));
            }
            Ok(address.to_string())
        }
        None => Ok(format!("{}:{}", address, DEFAULT_DNS_PORT)),
    }
}

impl fmt::Display for ResolverSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.network, NETWORK_SEPARATOR, self.address)
    }
}

impl fmt::Display for ResolverServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.network, NETWORK_SEPARATOR, self.name)
    }
}

impl Target {
    /// Label set identifying this target's metric series.
    pub fn labels(&self) -> TargetLabels {
        TargetLabels {
            host: self.host.clone(),
            dns_server: self
                .resolver
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| SYSTEM_RESOLVER_LABEL.to_string()),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resolver {
            Some(server) => write!(f, "{} via {}", self.host, server),
            None => write!(f, "{} via {}", self.host, SYSTEM_RESOLVER_LABEL),
        }
    }
}
