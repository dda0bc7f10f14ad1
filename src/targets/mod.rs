//! Target configuration resolver.
//!
//! Turns the raw `hosts` and `dns_servers` strings into the deduplicated set
//! of [`Target`]s that get probed. Resolver servers are written as
//! `[network://]address[:port]`; the network defaults to `udp` and the port
//! to `53`. Server addresses given as names are resolved once, here, through
//! the system resolver.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod traits;
pub mod types;

pub use functions::build_targets;
pub use traits::SystemHostResolver;
pub use types::{Network, Target};
