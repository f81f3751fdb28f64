//! Article edge proxy library.
//!
//! A single-route reverse proxy for the article path family: requests under
//! `/article/` are forwarded to one configured origin, everything else is
//! refused locally. Origin responses come back with the edge cache policy
//! stamped on; misses and outages come back as branded HTML.

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::EdgeConfig;
pub use http::EdgeServer;
pub use lifecycle::Shutdown;
