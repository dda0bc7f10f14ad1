// Standard library
use std::time::Duration;

// 3rd party crates
use prometheus::core::Collector;
use prometheus::proto::Metric;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

// Current module imports
use super::constants::{
    DNS_DURATION_NAME, DNS_ERRORS_TOTAL_NAME, DNS_LOOKUP_TOTAL_NAME, DNS_SERVER_LABEL,
    HOST_LABEL, NO_RESPONSE_CODE, RCODE_LABEL,
};
use super::errors::MetricsError;
use super::functions::latency_buckets;
use super::types::{MetricsSink, TargetLabels};

impl MetricsSink {
    /// Creates the sink with histogram buckets derived from the lookup timeout.
    pub fn new(timeout: Duration) -> Result<Self, MetricsError> {
        let registry = Registry::new();
        let buckets = latency_buckets(timeout);

        let lookup_total = IntCounterVec::new(
            Opts::new(DNS_LOOKUP_TOTAL_NAME, "Total number of DNS lookups."),
            &[HOST_LABEL, DNS_SERVER_LABEL, RCODE_LABEL],
        )?;
        let errors_total = IntCounterVec::new(
            Opts::new(DNS_ERRORS_TOTAL_NAME, "Total number of failed DNS lookups."),
            &[HOST_LABEL, DNS_SERVER_LABEL],
        )?;
        let lookup_duration = HistogramVec::new(
            HistogramOpts::new(
                DNS_DURATION_NAME,
                "Duration of successful DNS lookups in seconds.",
            )
            .buckets(buckets.clone()),
            &[HOST_LABEL, DNS_SERVER_LABEL],
        )?;

        registry.register(Box::new(lookup_total.clone()))?;
        registry.register(Box::new(errors_total.clone()))?;
        registry.register(Box::new(lookup_duration.clone()))?;

        Ok(Self {
            registry,
            lookup_total,
            errors_total,
            lookup_duration,
            buckets,
        })
    }

    /// Creates the total and error counters of a target at zero, so a target
    /// without traffic is distinguishable from a target without data.
    pub fn initialize_zero(&self, labels: &TargetLabels) {
        self.lookup_total
            .with_label_values(&[&labels.host, &labels.dns_server, NO_RESPONSE_CODE]);
        self.errors_total
            .with_label_values(&[&labels.host, &labels.dns_server]);
    }

    pub fn increment_total(&self, labels: &TargetLabels, response_code: Option<&str>) {
        self.lookup_total
            .with_label_values(&[
                &labels.host,
                &labels.dns_server,
                response_code.unwrap_or(NO_RESPONSE_CODE),
            ])
            .inc();
    }

    pub fn increment_errors(&self, labels: &TargetLabels) {
        self.errors_total
            .with_label_values(&[&labels.host, &labels.dns_server])
            .inc();
    }

    pub fn observe_latency(&self, labels: &TargetLabels, seconds: f64) {
        self.lookup_duration
            .with_label_values(&[&labels.host, &labels.dns_server])
            .observe(seconds);
    }

    pub fn buckets(&self) -> &[f64] {
        &self.buckets
    }

    /// Renders every series in the Prometheus text exposition format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let mut buffer: Vec<u8> = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Lookups recorded for a target across all response codes, or `None`
    /// if no series exists for it yet.
    pub fn lookup_total(&self, labels: &TargetLabels) -> Option<u64> {
        let values: Vec<u64> = matching(&self.lookup_total, labels)
            .iter()
            .map(|m| m.get_counter().get_value() as u64)
            .collect();
        (!values.is_empty()).then(|| values.iter().sum())
    }

    pub fn errors_total(&self, labels: &TargetLabels) -> Option<u64> {
        matching(&self.errors_total, labels)
            .first()
            .map(|m| m.get_counter().get_value() as u64)
    }

    /// Number of latency observations recorded for a target.
    pub fn latency_count(&self, labels: &TargetLabels) -> u64 {
        matching(&self.lookup_duration, labels)
            .first()
            .map(|m| m.get_histogram().get_sample_count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
impl MetricsSink {
    pub fn lookup_total_with_code(
        &self,
        labels: &TargetLabels,
        response_code: Option<&str>,
    ) -> Option<u64> {
        let code = response_code.unwrap_or(NO_RESPONSE_CODE);
        matching(&self.lookup_total, labels)
            .iter()
            .find(|m| {
                m.get_label()
                    .iter()
                    .any(|pair| pair.get_name() == RCODE_LABEL && pair.get_value() == code)
            })
            .map(|m| m.get_counter().get_value() as u64)
    }
}

/// Collects the series of `collector` carrying the host and server labels.
fn matching(collector: &impl Collector, labels: &TargetLabels) -> Vec<Metric> {
    collector
        .collect()
        .into_iter()
        .flat_map(|family| family.get_metric().to_vec())
        .filter(|metric| {
            let pairs = metric.get_label();
            let has = |name: &str, value: &str| {
                pairs
                    .iter()
                    .any(|pair| pair.get_name() == name && pair.get_value() == value)
            };
            has(HOST_LABEL, &labels.host) && has(DNS_SERVER_LABEL, &labels.dns_server)
        })
        .collect()
}
