// Standard library
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

// 3rd party crates
use clap::Parser;
use serde::Deserialize;

// Current module imports
use super::functions::default_log_level;

/// Command-line flags. Every flag given overrides the configuration file and
/// the environment.
#[derive(Debug, Default, Parser)]
#[command(
    name = "hostlookuper",
    version,
    about = "Periodically resolves hosts and exposes lookup metrics for Prometheus."
)]
pub struct Cli {
    /// Enable verbose logging, overrides --log-level
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub debug: Option<bool>,

    /// Interval between DNS checks, e.g. 500ms, 5s, 5m or 1h
    #[arg(long)]
    pub interval: Option<String>,

    /// Maximum time a single DNS query may take
    #[arg(long)]
    pub timeout: Option<String>,

    /// Address the metrics endpoint listens on, e.g. 0.0.0.0:9090 or :9090
    #[arg(long)]
    pub listen: Option<String>,

    /// Comma-separated list of hosts against which to perform DNS lookups
    #[arg(long)]
    pub hosts: Option<String>,

    /// Comma-separated list of DNS servers; empty uses the system resolver
    #[arg(long)]
    pub dns_servers: Option<String>,

    /// One of error, warn, info, debug or trace
    #[arg(long)]
    pub log_level: Option<String>,

    /// Configuration file, overrides $HOSTLOOKUPER_CONFIG_PATH
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Raw settings as read from the layered configuration sources.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub interval: String,
    pub timeout: String,
    pub listen: String,
    pub hosts: String,

    #[serde(default)]
    pub dns_servers: String,

    #[serde(default)]
    pub debug: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Settings that passed validation, with durations and addresses parsed.
#[derive(Debug, Clone)]
pub struct ValidatedSettings {
    pub interval: Duration,
    pub timeout: Duration,
    pub listen: SocketAddr,
    pub hosts: String,
    pub dns_servers: String,
    pub log_level: String,
}

/// Loads the application settings once at startup.
pub struct ConfigManager {
    pub settings: ValidatedSettings,
    pub config_path: Option<PathBuf>,
}
