//! Reachability oracle implementations.
//!
//! - [`SystemResolver`] - Operating system resolver with a timeout
//! - [`PassthroughResolver`] - Treats every host as reachable

mod passthrough_resolver;
mod system_resolver;

pub use passthrough_resolver::PassthroughResolver;
pub use system_resolver::SystemResolver;
