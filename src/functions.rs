// Standard library
use std::error::Error;
use std::sync::Arc;

// 3rd party crates
use tokio::sync::broadcast;
use tracing::{error, info};

// Project imports
use crate::metrics::{MetricsSink, TargetLabels};
use crate::prober::{lookup_for, Prober, ProberSupervisor};
use crate::server::{bind, serve};
use crate::settings::ValidatedSettings;
use crate::targets::{build_targets, SystemHostResolver, Target};

/// Main application logic.
///
/// This function:
/// - Resolves the configured hosts and DNS servers into targets
/// - Binds the metrics endpoint before any probing starts
/// - Spawns one prober per target
/// - Serves the metrics until a shutdown signal arrives
pub async fn run(
    settings: ValidatedSettings,
    shutdown_tx: broadcast::Sender<()>,
) -> Result<(), Box<dyn Error>> {
    let mut shutdown_rx = shutdown_tx.subscribe();

    // Configuration problems are fatal, so they are found before probing.
    let targets: Vec<Target> =
        build_targets(&settings.hosts, &settings.dns_servers, &SystemHostResolver).await?;
    let sink: Arc<MetricsSink> = Arc::new(MetricsSink::new(settings.timeout)?);
    let listener = bind(settings.listen).await?;

    info!(
        buckets = ?sink.buckets(),
        "latency histogram buckets derived from timeout"
    );

    let mut supervisor = ProberSupervisor::new();
    for target in &targets {
        supervisor.spawn(Prober::new(
            target.clone(),
            lookup_for(target),
            Arc::clone(&sink),
            settings.interval,
            settings.timeout,
        ));
    }
    info!(count = supervisor.len(), "probers started");

    let mut server = tokio::spawn(serve(
        listener,
        Arc::clone(&sink),
        shutdown_tx.subscribe(),
    ));

    let mut server_done = false;
    tokio::select! {
        Ok(_) = shutdown_rx.recv() => {
            info!("Received shutdown signal, stopping probers...");
        }
        _ = supervisor.wait() => {
            error!("All probers stopped unexpectedly");
            let _ = shutdown_tx.send(());
        }
        result = &mut server => {
            server_done = true;
            result??;
        }
    }

    supervisor.shutdown().await;
    if !server_done {
        server.await??;
    }

    log_summary(&sink, &targets);
    Ok(())
}

/// Logs the accumulated counters of every target.
fn log_summary(sink: &MetricsSink, targets: &[Target]) {
    for target in targets {
        let labels: TargetLabels = target.labels();
        info!(
            host = %labels.host,
            dns_server = %labels.dns_server,
            lookups = sink.lookup_total(&labels).unwrap_or(0),
            errors = sink.errors_total(&labels).unwrap_or(0),
            observed = sink.latency_count(&labels),
            "lookup summary"
        );
    }
}
