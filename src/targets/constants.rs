/// Port used when a resolver server entry omits one.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Separator between the network and the address of a resolver server entry.
pub const NETWORK_SEPARATOR: &str = "://";

/// `dns_server` label value for targets using the system resolver.
pub const SYSTEM_RESOLVER_LABEL: &str = "system";
