// Standard library
use std::collections::HashMap;

// 3rd party crates
use tokio::task::{Id, JoinSet};
use tracing::{debug, error, info, warn};

// Current module imports
use super::types::Prober;

/// Owns the prober tasks, one per target.
#[derive(Default)]
pub struct ProberSupervisor {
    tasks: JoinSet<()>,
    names: HashMap<Id, String>,
}

impl ProberSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the prober as an independent task.
    pub fn spawn(&mut self, prober: Prober) {
        let name = prober.target().to_string();
        let handle = self.tasks.spawn(prober.run());
        debug!(target_name = %name, "prober spawned");
        self.names.insert(handle.id(), name);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Waits until every prober has ended. Probers only end by panicking or
    /// being aborted, so each one that ends is logged.
    pub async fn wait(&mut self) {
        while let Some(result) = self.tasks.join_next_with_id().await {
            match result {
                Ok((id, ())) => {
                    let name = self.names.remove(&id).unwrap_or_default();
                    warn!(target_name = %name, "prober stopped");
                }
                Err(e) if e.is_cancelled() => {
                    self.names.remove(&e.id());
                }
                Err(e) => {
                    let name = self.names.remove(&e.id()).unwrap_or_default();
                    error!(target_name = %name, error = %e, "prober task failed");
                }
            }
        }
    }

    /// Aborts every prober and waits for them to finish.
    pub async fn shutdown(mut self) {
        let count = self.tasks.len();
        self.tasks.shutdown().await;
        self.names.clear();
        info!(count, "all probers stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::metrics::MetricsSink;
    use crate::targets::Target;
    use crate::utility::dns_client::SystemLookup;

    fn prober(host: &str, sink: &Arc<MetricsSink>) -> Prober {
        Prober::new(
            Target {
                host: host.to_string(),
                resolver: None,
            },
            Arc::new(SystemLookup::new()),
            Arc::clone(sink),
            Duration::from_secs(3600),
            Duration::from_secs(1),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn spawns_one_task_per_prober_and_zeroes_their_counters() {
        let sink = Arc::new(MetricsSink::new(Duration::from_secs(1)).unwrap());
        let mut supervisor = ProberSupervisor::new();
        supervisor.spawn(prober("a.example", &sink));
        supervisor.spawn(prober("b.example", &sink));
        assert_eq!(supervisor.len(), 2);

        tokio::time::sleep(Duration::from_millis(600)).await;
        for host in ["a.example", "b.example"] {
            let labels = Target {
                host: host.to_string(),
                resolver: None,
            }
            .labels();
            assert_eq!(sink.errors_total(&labels), Some(0));
            assert_eq!(sink.lookup_total(&labels), Some(0));
        }

        supervisor.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn wait_returns_once_every_task_is_gone() {
        let sink = Arc::new(MetricsSink::new(Duration::from_secs(1)).unwrap());
        let mut supervisor = ProberSupervisor::new();
        supervisor.spawn(prober("a.example", &sink));

        supervisor.tasks.abort_all();
        supervisor.wait().await;
        assert_eq!(supervisor.len(), 0);
        assert!(supervisor.names.is_empty());
    }
}
