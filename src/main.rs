// Standard library
use std::{env, process};

// 3rd party crates
use clap::Parser;
use tokio::signal::ctrl_c;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod functions;
mod metrics;
mod prober;
mod server;
mod settings;
mod targets;
mod utility;

// Project imports
use crate::functions::run;
use crate::settings::{normalize_args, Cli, ConfigManager};

/// Main entry point for hostlookuper.
/// This application continuously resolves a set of hosts, optionally against
/// specific DNS servers, and exposes lookup counts, failures and latencies as
/// Prometheus metrics.
///
/// Features:
/// - One independent, jittered polling loop per host and DNS server
/// - UDP and TCP queries against explicit DNS servers, or the system resolver
/// - Per-query timeout
/// - Metrics endpoint at `/metrics`
/// - Detailed logging
#[tokio::main]
async fn main() {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli: Cli = Cli::parse_from(normalize_args(env::args()));

    let config: ConfigManager = match ConfigManager::new(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("unable to load configuration, exiting. error message: {}", e);
            process::exit(2);
        }
    };

    // setup logging.
    let log_level: LevelFilter = config
        .get_log_level()
        .parse()
        .unwrap_or(LevelFilter::INFO);

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse().unwrap())
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("axum=error".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    let settings = &config.settings;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = ?config.config_path,
        listen = %settings.listen,
        interval = ?settings.interval,
        timeout = ?settings.timeout,
        hosts = %settings.hosts,
        dns_servers = %settings.dns_servers,
        "Settings have been loaded."
    );

    // Create a broadcast channel for shutdown signal
    let (shutdown_tx, _) = broadcast::channel(1);
    let shutdown_tx_clone = shutdown_tx.clone();

    // Handle Ctrl+C
    tokio::spawn(async move {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Received shutdown signal, initiating graceful shutdown...");
        let _ = shutdown_tx_clone.send(());
    });

    if let Err(e) = run(config.settings, shutdown_tx).await {
        error!("Application error: {}", e);
        process::exit(1);
    }

    info!("Shutdown complete.");
}
