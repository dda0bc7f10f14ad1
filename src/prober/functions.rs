// Standard library
use std::sync::Arc;
use std::time::Duration;

// Project imports
use crate::targets::Target;
use crate::utility::dns_client::{Lookup, ServerLookup, SystemLookup};

// Current module imports
use super::constants::MAX_JITTER;

/// Random start delay, uniformly distributed in `[0, MAX_JITTER)`.
pub fn jitter() -> Duration {
    let max_micros = MAX_JITTER.as_micros() as u64;
    Duration::from_micros(rand::random_range(0..max_micros))
}

/// The lookup matching the target's resolver configuration.
pub fn lookup_for(target: &Target) -> Arc<dyn Lookup> {
    match &target.resolver {
        Some(server) => Arc::new(ServerLookup::new(server.network, server.address)),
        None => Arc::new(SystemLookup::new()),
    }
}
