//! Route selection.
//!
//! The proxy owns exactly one route: the reserved `/article/` prefix. Every
//! inbound path is checked against it once, and anything outside the prefix
//! is answered locally without contacting the upstream.
//!
//! # Design Decisions
//! - Matching is byte-wise and case-sensitive (`/Article/x` is declined)
//! - `/article` without the trailing slash is outside the prefix
//! - The prefix is part of the external contract, not configuration

/// Path prefix reserved for proxied article traffic.
pub const ARTICLE_PREFIX: &str = "/article/";

/// What to do with an inbound request, decided from its path alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The path is under the reserved prefix; forward it upstream.
    Forward,
    /// The path is not ours; answer locally with a plain 404.
    Decline,
}

impl RouteDecision {
    /// Decide the route for a request path (path only, no query string).
    pub fn for_path(path: &str) -> Self {
        if path.starts_with(ARTICLE_PREFIX) {
            RouteDecision::Forward
        } else {
            RouteDecision::Decline
        }
    }
}
