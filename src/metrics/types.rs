// 3rd party crates
use prometheus::{HistogramVec, IntCounterVec, Registry};

/// Labels shared by every series of one target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetLabels {
    pub host: String,
    pub dns_server: String,
}

/// Thread-safe store of the lookup counters and latency histogram.
///
/// Constructed once at startup and shared by `Arc` with every prober and the
/// metrics endpoint. Series are never removed.
#[derive(Clone)]
pub struct MetricsSink {
    pub(super) registry: Registry,
    pub(super) lookup_total: IntCounterVec,
    pub(super) errors_total: IntCounterVec,
    pub(super) lookup_duration: HistogramVec,
    pub(super) buckets: Vec<f64>,
}
