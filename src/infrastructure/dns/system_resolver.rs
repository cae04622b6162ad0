//! Reachability checks through the operating system resolver.

use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;
use tokio::net::lookup_host;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::domain::reachability::{HostResolver, Reachability};

/// Resolves hostnames with `getaddrinfo` via [`tokio::net::lookup_host`].
///
/// A host is reachable when the lookup yields at least one address within the
/// configured timeout.
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve_host(&self, hostname: &str) -> Reachability {
        if let Ok(ip) = hostname.parse::<IpAddr>() {
            return Reachability::Reachable(ip);
        }

        match timeout(self.timeout, lookup_host((hostname, 0))).await {
            Ok(Ok(mut addrs)) => match addrs.next() {
                Some(addr) => {
                    debug!(%hostname, address = %addr.ip(), "Host resolved");
                    Reachability::Reachable(addr.ip())
                }
                None => {
                    warn!(%hostname, "DNS lookup returned no address");
                    Reachability::Unreachable
                }
            },
            Ok(Err(e)) => {
                warn!(%hostname, error = %e, "DNS lookup failed");
                Reachability::Unreachable
            }
            Err(_) => {
                warn!(%hostname, timeout_ms = self.timeout.as_millis() as u64, "DNS lookup timed out");
                Reachability::Unreachable
            }
        }
    }
}
