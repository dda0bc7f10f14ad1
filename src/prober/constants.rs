// Standard library
use std::time::Duration;

/// Upper bound (exclusive) of the random start delay of each prober.
pub const MAX_JITTER: Duration = Duration::from_millis(500);
