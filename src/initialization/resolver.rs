//! DNS resolver initialization.
//!
//! This module builds the resolver used for record lookups, either from the
//! system configuration or from an explicit nameserver list.

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::config::{ResolverSettings, DNS_PORT};

/// Initializes the DNS resolver for record lookups.
///
/// With no nameservers configured, the system configuration
/// (`/etc/resolv.conf` or the platform equivalent) is used; if it cannot be
/// read the resolver falls back to hickory's default upstreams. Explicit
/// nameservers are queried over plain UDP/TCP on port 53.
///
/// `ndots` is forced to 0 so the queried domain is tried as-is before any
/// search domain is appended.
///
/// # Arguments
///
/// * `settings` - Timeout and optional nameserver override
pub fn init_resolver(settings: &ResolverSettings) -> TokioAsyncResolver {
    let (config, mut opts) = if settings.nameservers.is_empty() {
        match read_system_conf() {
            Ok(system) => system,
            Err(e) => {
                log::warn!("Failed to read system DNS configuration, using defaults: {e}");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        }
    } else {
        let group = NameServerConfigGroup::from_ips_clear(&settings.nameservers, DNS_PORT, true);
        (
            ResolverConfig::from_parts(None, vec![], group),
            ResolverOpts::default(),
        )
    };

    opts.timeout = settings.timeout;
    opts.ndots = 0;

    log::debug!(
        "DNS resolver: {} nameserver(s), timeout {:?}",
        config.name_servers().len(),
        opts.timeout
    );

    TokioAsyncResolver::tokio(config, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Duration;

    #[tokio::test]
    async fn test_init_resolver_with_explicit_nameservers() {
        let settings = ResolverSettings {
            timeout: Duration::from_secs(2),
            nameservers: vec![IpAddr::V4(Ipv4Addr::new(192, 0, 2, 53))],
        };
        // Building the resolver must not touch the network
        let _resolver = init_resolver(&settings);
    }

    #[tokio::test]
    async fn test_init_resolver_from_system_conf() {
        // Falls back to defaults when no resolv.conf is available
        let _resolver = init_resolver(&ResolverSettings::default());
    }
}
