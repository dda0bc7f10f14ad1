// Standard library
use std::sync::Arc;
use std::time::{Duration, SystemTime};

// 3rd party crates
use tokio::time::{interval_at, sleep, timeout, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

// Project imports
use crate::metrics::MetricsSink;
use crate::targets::Target;
use crate::utility::dns_client::{Lookup, LookupError};

// Current module imports
use super::functions::jitter;
use super::types::{ProbeOutcome, Prober};

impl Prober {
    pub fn new(
        target: Target,
        lookup: Arc<dyn Lookup>,
        sink: Arc<MetricsSink>,
        interval: Duration,
        timeout: Duration,
    ) -> Self {
        let labels = target.labels();
        Self {
            target,
            labels,
            lookup,
            sink,
            interval,
            timeout,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Runs the prober for the lifetime of the process after a random delay.
    pub async fn run(self) {
        let delay = jitter();
        self.run_after(delay).await
    }

    /// Sleeps for `delay`, zeroes the target's counters, then looks the host
    /// up once per interval. Each lookup is awaited inside the loop, so two
    /// lookups of the same target never overlap; a slow lookup delays the
    /// following tick instead.
    pub async fn run_after(self, delay: Duration) {
        info!(
            host = %self.labels.host,
            dns_server = %self.labels.dns_server,
            jitter = ?delay,
            "start delayed"
        );
        sleep(delay).await;

        self.sink.initialize_zero(&self.labels);

        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let outcome = self.tick().await;
            self.record(&outcome);
        }
    }

    /// Performs one lookup bounded by the configured timeout.
    pub async fn tick(&self) -> ProbeOutcome {
        debug!(host = %self.labels.host, dns_server = %self.labels.dns_server, "lookup host");

        let timestamp = SystemTime::now();
        let started = Instant::now();
        let result = timeout(self.timeout, self.lookup.lookup(&self.target.host))
            .await
            .unwrap_or_else(|_| Err(LookupError::Timeout(self.timeout)));
        let elapsed = started.elapsed();

        match result {
            Ok(answer) => ProbeOutcome {
                timestamp,
                elapsed,
                success: true,
                response_code: answer.response_code,
                answers: answer.answers,
                error: None,
            },
            Err(error) => ProbeOutcome {
                timestamp,
                elapsed,
                success: false,
                response_code: error.response_code().map(str::to_string),
                answers: 0,
                error: Some(error),
            },
        }
    }

    /// Folds a tick's outcome into the metrics sink. Every tick counts
    /// towards the total; only failures count as errors and only successes
    /// are observed in the latency histogram.
    pub fn record(&self, outcome: &ProbeOutcome) {
        self.sink
            .increment_total(&self.labels, outcome.response_code.as_deref());

        if outcome.success {
            self.sink
                .observe_latency(&self.labels, outcome.elapsed.as_secs_f64());
            debug!(
                host = %self.labels.host,
                dns_server = %self.labels.dns_server,
                time = ?outcome.elapsed,
                result_length = outcome.answers,
                "lookup result"
            );
        } else {
            self.sink.increment_errors(&self.labels);
            let cause: String = outcome
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            error!(
                host = %self.labels.host,
                dns_server = %self.labels.dns_server,
                started_at = ?outcome.timestamp,
                time = ?outcome.elapsed,
                err = %cause,
                "dns lookup failed"
            );
        }
    }
}
