//! Header hygiene for the single proxy hop.
//!
//! # Responsibilities
//! - Strip hop-by-hop headers in both directions
//! - Drop Host on forward so the client derives it from the target URL
//! - Drop the forwarded Content-Length; the body is re-framed as a stream
//!
//! End-to-end headers pass through untouched, including repeated values.

use axum::http::header::{self, HeaderMap, HeaderName};

const KEEP_ALIVE: HeaderName = HeaderName::from_static("keep-alive");

/// Hop-by-hop headers (RFC 9110 §7.6.1) that must not cross this hop.
static HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    KEEP_ALIVE,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Whether a header is tied to a single connection rather than the message.
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name)
}

/// Build the header collection forwarded to the upstream origin.
///
/// Everything end-to-end is copied as-is (repeats included). Host and
/// Content-Length are dropped on top of the hop-by-hop set: Host belongs to
/// the upstream authority, and the streamed body gets fresh framing.
pub fn forwardable_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(inbound.len());
    for (name, value) in inbound {
        if is_hop_by_hop(name) || name == header::HOST || name == header::CONTENT_LENGTH {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    headers
}
