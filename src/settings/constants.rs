// Standard library
use std::time::Duration;

/// Prefix for environment variables overriding configuration keys.
pub const ENV_PREFIX: &str = "HOSTLOOKUPER";

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "HOSTLOOKUPER_CONFIG_PATH";

/// Long flags that may also be written with a single dash (`-hosts=...`).
pub const LONG_FLAGS: [&str; 10] = [
    "debug",
    "interval",
    "timeout",
    "listen",
    "hosts",
    "dns-servers",
    "log-level",
    "config",
    "help",
    "version",
];

/// Upper bound for `timeout`; the latency histogram grows one bucket per
/// half second of timeout.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(300);

/// Built-in configuration, always loaded as the lowest-precedence source.
pub const DEFAULT_CONFIG: &str = r#"
# Interval between DNS checks, e.g. "500ms", "5s", "5m" or "1h"
interval = "5s"

# Maximum time a single DNS query may take
timeout = "5s"

# Address the metrics endpoint listens on, e.g. "0.0.0.0:9090" or ":9090"
listen = ":9090"

# Comma-separated list of hosts against which to perform DNS lookups
hosts = "google.ch,ch.ch"

# Comma-separated list of DNS servers. If the protocol is omitted, udp is
# implied, and if the port is omitted, 53 is implied. Leave empty to use the
# system resolver.
dns_servers = "udp://9.9.9.9:53,udp://8.8.8.8:53,udp://one.one.one.one:53"

# Enable verbose logging, overrides log_level
debug = false

# Level can be "error", "warn", "info", "debug", or "trace"
log_level = "info"
"#;
