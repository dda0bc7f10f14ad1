// Standard library
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

// 3rd party crates
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

// Project imports
use crate::targets::Network;

/// Result of a lookup that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupAnswer {
    /// Response code mnemonic, `None` for the system resolver.
    pub response_code: Option<String>,
    /// Number of records (or addresses) returned.
    pub answers: usize,
}

/// Queries one specific resolver server.
#[derive(Debug, Clone)]
pub struct ServerLookup {
    pub network: Network,
    pub address: SocketAddr,
}

/// Blocking name resolution, run on tokio's blocking pool.
pub type BlockingResolve = Arc<dyn Fn(&str) -> io::Result<Vec<SocketAddr>> + Send + Sync>;

/// Resolves through the operating system resolver.
///
/// A blocking resolution keeps running when the caller stops waiting for it,
/// so its handle is kept in `pending` until it has finished.
pub struct SystemLookup {
    pub(super) resolve: BlockingResolve,
    pub(super) pending: Mutex<Option<JoinHandle<io::Result<Vec<SocketAddr>>>>>,
}
