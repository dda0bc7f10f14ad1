// Standard library
use std::collections::HashSet;
use std::net::{IpAddr, SocketAddr};

// 3rd party crates
use futures::future::try_join_all;
use hickory_proto::rr::Name;
use tracing::{info, warn};

// Current module imports
use super::errors::TargetError;
use super::traits::HostResolver;
use super::types::{ResolverServer, ResolverSpec, Target};

/// Splits the comma-separated host list, dropping blanks and duplicates.
pub fn parse_hosts(hosts: &str) -> Result<Vec<String>, TargetError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut parsed: Vec<String> = Vec::new();

    for host in hosts.split(',').map(str::trim).filter(|h| !h.is_empty()) {
        if host.contains(char::is_whitespace) {
            return Err(TargetError::InvalidHost {
                host: host.to_string(),
                reason: "contains whitespace".to_string(),
            });
        }
        Name::from_ascii(host).map_err(|e| TargetError::InvalidHost {
            host: host.to_string(),
            reason: e.to_string(),
        })?;

        if !seen.insert(host) {
            warn!(host = %host, "duplicate host in configuration, ignoring");
            continue;
        }
        parsed.push(host.to_string());
    }

    if parsed.is_empty() {
        return Err(TargetError::NoHosts);
    }

    Ok(parsed)
}

/// Parses the comma-separated resolver server list. Entries that normalize to
/// the same network and address are kept once.
pub fn parse_resolver_specs(dns_servers: &str) -> Result<Vec<ResolverSpec>, TargetError> {
    let mut specs: Vec<ResolverSpec> = Vec::new();

    for entry in dns_servers.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let spec = ResolverSpec::parse(entry)?;
        if specs.contains(&spec) {
            warn!(dns_server = %spec, "duplicate dns server in configuration, ignoring");
            continue;
        }
        specs.push(spec);
    }

    Ok(specs)
}

/// Resolves the address of a resolver server given by name. Literal IPs are
/// used as-is; for names resolving to several addresses the first one wins.
pub async fn resolve_resolver_server(
    spec: ResolverSpec,
    resolver: &dyn HostResolver,
) -> Result<ResolverServer, TargetError> {
    let address: SocketAddr = match spec.address.parse::<SocketAddr>() {
        Ok(address) => address,
        Err(_) => {
            let (host, port) = spec
                .host_and_port()
                .ok_or_else(|| TargetError::InvalidPort(spec.to_string()))?;

            let ips: Vec<IpAddr> =
                resolver
                    .resolve_ips(host)
                    .await
                    .map_err(|source| TargetError::Resolve {
                        host: host.to_string(),
                        source,
                    })?;

            let first: IpAddr = *ips
                .first()
                .ok_or_else(|| TargetError::NoAddresses(host.to_string()))?;

            if ips.len() > 1 {
                warn!(
                    host = %host,
                    resolved_ips = ?ips,
                    "multiple DNS server IPs resolved from host, picking the first resolved ip"
                );
            }

            SocketAddr::new(first, port)
        }
    };

    info!(
        name = %spec.address,
        network = %spec.network,
        address = %address,
        "added a new DNS server"
    );

    Ok(ResolverServer {
        network: spec.network,
        name: spec.address,
        address,
    })
}

/// Builds the full target set: every host against every resolver server, or
/// every host against the system resolver when no server is configured.
pub async fn build_targets(
    hosts: &str,
    dns_servers: &str,
    resolver: &dyn HostResolver,
) -> Result<Vec<Target>, TargetError> {
    let hosts: Vec<String> = parse_hosts(hosts)?;
    let specs: Vec<ResolverSpec> = parse_resolver_specs(dns_servers)?;

    if specs.is_empty() {
        info!("no DNS servers configured, using the system resolver");
        return Ok(hosts
            .into_iter()
            .map(|host| Target {
                host,
                resolver: None,
            })
            .collect());
    }

    let servers: Vec<ResolverServer> = try_join_all(
        specs
            .into_iter()
            .map(|spec| resolve_resolver_server(spec, resolver)),
    )
    .await?;

    Ok(hosts
        .iter()
        .flat_map(|host| {
            servers.iter().map(move |server| Target {
                host: host.clone(),
                resolver: Some(server.clone()),
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::targets::types::Network;

    #[derive(Default)]
    struct FakeResolver {
        names: HashMap<String, Vec<IpAddr>>,
        calls: AtomicUsize,
    }

    impl FakeResolver {
        fn with(mut self, name: &str, ips: &[&str]) -> Self {
            self.names.insert(
                name.to_string(),
                ips.iter().map(|ip| ip.parse().unwrap()).collect(),
            );
            self
        }
    }

    #[async_trait]
    impl HostResolver for FakeResolver {
        async fn resolve_ips(&self, host: &str) -> io::Result<Vec<IpAddr>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.names
                .get(host)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such host"))
        }
    }

    #[test]
    fn hosts_are_trimmed_and_deduplicated() {
        let hosts = parse_hosts(" google.ch, ch.ch,,google.ch ").unwrap();
        assert_eq!(hosts, vec!["google.ch", "ch.ch"]);
    }

    #[test]
    fn invalid_hosts_are_rejected() {
        assert!(matches!(parse_hosts(" , "), Err(TargetError::NoHosts)));
        assert!(matches!(
            parse_hosts("exa mple.com"),
            Err(TargetError::InvalidHost { .. })
        ));
        let long_label = format!("{}.com", "a".repeat(64));
        assert!(matches!(
            parse_hosts(&long_label),
            Err(TargetError::InvalidHost { .. })
        ));
    }

    #[test]
    fn equivalent_resolver_entries_are_deduplicated() {
        let specs = parse_resolver_specs("9.9.9.9, udp://9.9.9.9:53, tcp://9.9.9.9").unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].network, Network::Udp);
        assert_eq!(specs[1].network, Network::Tcp);
    }

    #[tokio::test]
    async fn no_servers_means_one_system_target_per_host() {
        let resolver = FakeResolver::default();
        let targets = build_targets("a.example,b.example", "", &resolver)
            .await
            .unwrap();

        assert_eq!(targets.len(), 2);
        assert!(targets.iter().all(|t| t.resolver.is_none()));
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn targets_are_the_cross_product_of_hosts_and_servers() {
        let resolver = FakeResolver::default().with("dns.example", &["192.0.2.10"]);
        let targets = build_targets(
            "a.example,b.example",
            "9.9.9.9,tcp://dns.example:5353",
            &resolver,
        )
        .await
        .unwrap();

        assert_eq!(targets.len(), 4);
        let labels: Vec<(String, String)> = targets
            .iter()
            .map(|t| {
                let labels = t.labels();
                (labels.host, labels.dns_server)
            })
            .collect();
        assert_eq!(
            labels,
            vec![
                ("a.example".to_string(), "udp://9.9.9.9:53".to_string()),
                ("a.example".to_string(), "tcp://dns.example:5353".to_string()),
                ("b.example".to_string(), "udp://9.9.9.9:53".to_string()),
                ("b.example".to_string(), "tcp://dns.example:5353".to_string()),
            ]
        );

        let named = targets[1].resolver.as_ref().unwrap();
        assert_eq!(named.address, "192.0.2.10:5353".parse().unwrap());
        assert_eq!(named.name, "dns.example:5353");
        // literal addresses never hit the resolver
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn first_address_wins_when_name_is_ambiguous() {
        let resolver =
            FakeResolver::default().with("dns.example", &["192.0.2.20", "192.0.2.21", "2001:db8::1"]);
        let spec = ResolverSpec::parse("dns.example").unwrap();
        let server = resolve_resolver_server(spec, &resolver).await.unwrap();
        assert_eq!(server.address, "192.0.2.20:53".parse().unwrap());
    }

    #[tokio::test]
    async fn unresolvable_server_name_is_fatal() {
        let resolver = FakeResolver::default();
        let result = build_targets("a.example", "9.9.9.9,udp://missing.example", &resolver).await;
        assert!(matches!(result, Err(TargetError::Resolve { ref host, .. }) if host == "missing.example"));
    }

    #[tokio::test]
    async fn server_name_without_addresses_is_fatal() {
        let resolver = FakeResolver::default().with("empty.example", &[]);
        let result = build_targets("a.example", "empty.example", &resolver).await;
        assert!(matches!(result, Err(TargetError::NoAddresses(_))));
    }
}
