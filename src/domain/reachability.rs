//! Hostname reachability contract.

use async_trait::async_trait;
use std::net::IpAddr;

/// Outcome of a reachability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Reachable(IpAddr),
    Unreachable,
}

impl Reachability {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable(_))
    }
}

/// Resolves a hostname to an address.
///
/// Implementations fold every failure (lookup error, timeout, empty answer)
/// into [`Reachability::Unreachable`]; the caller does not distinguish them.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - operating system resolver
/// - [`crate::infrastructure::dns::PassthroughResolver`] - reports every host reachable
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `hostname` (without scheme, port or brackets).
    async fn resolve_host(&self, hostname: &str) -> Reachability;
}
