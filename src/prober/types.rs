// Standard library
use std::sync::Arc;
use std::time::{Duration, SystemTime};

// Project imports
use crate::metrics::{MetricsSink, TargetLabels};
use crate::targets::Target;
use crate::utility::dns_client::{Lookup, LookupError};

/// What a single tick observed. Folded into the metrics sink, then dropped.
#[derive(Debug)]
pub struct ProbeOutcome {
    pub timestamp: SystemTime,
    pub elapsed: Duration,
    pub success: bool,
    pub response_code: Option<String>,
    pub answers: usize,
    pub error: Option<LookupError>,
}

/// Periodically looks up one target and records the results.
pub struct Prober {
    pub(super) target: Target,
    pub(super) labels: TargetLabels,
    pub(super) lookup: Arc<dyn Lookup>,
    pub(super) sink: Arc<MetricsSink>,
    pub(super) interval: Duration,
    pub(super) timeout: Duration,
}
