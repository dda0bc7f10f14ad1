// Standard library
use std::time::Duration;

/// Upper bound for handling one request, answered with `408` when exceeded.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);
