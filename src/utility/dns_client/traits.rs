// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::LookupError;
use super::types::LookupAnswer;

/// A single name resolution, as issued by a prober on every tick.
#[async_trait]
pub trait Lookup: Send + Sync {
    async fn lookup(&self, host: &str) -> Result<LookupAnswer, LookupError>;
}
