// Standard library
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;

// 3rd party crates
use async_trait::async_trait;
use hickory_proto::op::Message;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::sync::Mutex;
use tokio::task;
use tracing::{debug, trace};

// Project imports
use crate::targets::Network;

// Current module imports
use super::constants::MAX_UDP_RESPONSE_SIZE;
use super::errors::LookupError;
use super::functions::{build_query, parse_response, resolve_system};
use super::traits::Lookup;
use super::types::{LookupAnswer, ServerLookup, SystemLookup};

impl ServerLookup {
    pub fn new(network: Network, address: SocketAddr) -> Self {
        Self { network, address }
    }

    /// Sends the query in a single datagram from a fresh socket.
    async fn exchange_udp(&self, query: &[u8]) -> Result<Vec<u8>, LookupError> {
        let local: SocketAddr = if self.address.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(local).await?;
        socket.connect(self.address).await?;
        socket.send(query).await?;

        let mut buffer = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let len = socket.recv(&mut buffer).await?;
        buffer.truncate(len);
        Ok(buffer)
    }

    /// Sends the query over a fresh connection with a two byte length prefix.
    async fn exchange_tcp(&self, query: &[u8]) -> Result<Vec<u8>, LookupError> {
        let len = u16::try_from(query.len()).map_err(|_| LookupError::QueryTooLarge(query.len()))?;

        let mut stream = TcpStream::connect(self.address).await?;
        let mut framed: Vec<u8> = Vec::with_capacity(query.len() + 2);
        framed.extend_from_slice(&len.to_be_bytes());
        framed.extend_from_slice(query);
        stream.write_all(&framed).await?;

        let len = stream.read_u16().await? as usize;
        let mut buffer = vec![0u8; len];
        stream.read_exact(&mut buffer).await?;
        Ok(buffer)
    }
}

#[async_trait]
impl Lookup for ServerLookup {
    async fn lookup(&self, host: &str) -> Result<LookupAnswer, LookupError> {
        let id: u16 = rand::random();
        let query: Vec<u8> = build_query(host, id)?;

        trace!(host = %host, server = %self.address, network = %self.network, id, "sending query");
        let response: Vec<u8> = match self.network {
            Network::Udp => self.exchange_udp(&query).await?,
            Network::Tcp => self.exchange_tcp(&query).await?,
        };

        parse_response(&Message::from_vec(&response)?, id)
    }
}

impl SystemLookup {
    pub fn new() -> Self {
        Self {
            resolve: Arc::new(resolve_system),
            pending: Mutex::new(None),
        }
    }
}

impl Default for SystemLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Lookup for SystemLookup {
    async fn lookup(&self, host: &str) -> Result<LookupAnswer, LookupError> {
        let mut pending = self.pending.lock().await;

        // Left behind by a caller that stopped waiting; the slot is only
        // cleared once the resolution has finished.
        if let Some(abandoned) = pending.as_mut() {
            debug!(host = %host, "waiting for an abandoned resolution to finish");
            let _ = abandoned.await;
        }

        let resolve = Arc::clone(&self.resolve);
        let name = host.to_string();
        let handle = pending.insert(task::spawn_blocking(move || resolve(&name)));
        let result = handle.await;
        *pending = None;

        let addresses: Vec<SocketAddr> = result??;
        if addresses.is_empty() {
            return Err(LookupError::NoAddresses);
        }

        Ok(LookupAnswer {
            response_code: None,
            answers: addresses.len(),
        })
    }
}
