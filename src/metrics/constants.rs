pub const DNS_DURATION_NAME: &str = "hostlookuper_dns_lookup_duration_seconds";
pub const DNS_LOOKUP_TOTAL_NAME: &str = "hostlookuper_dns_lookup_total";
pub const DNS_ERRORS_TOTAL_NAME: &str = "hostlookuper_dns_errors_total";

pub const HOST_LABEL: &str = "host";
pub const DNS_SERVER_LABEL: &str = "dns_server";
pub const RCODE_LABEL: &str = "rcode";

/// `rcode` label value for lookups that produced no response code.
pub const NO_RESPONSE_CODE: &str = "";

/// Low-latency buckets, in seconds.
pub const FIXED_BUCKETS: [f64; 7] = [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5];

/// First linear bucket, in seconds.
pub const LINEAR_BUCKET_START: f64 = 1.0;

/// Width of each linear bucket, in seconds.
pub const LINEAR_BUCKET_STEP: f64 = 0.5;
