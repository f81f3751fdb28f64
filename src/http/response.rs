//! Response shaping for every edge outcome.
//!
//! Every response leaving the edge is built here as a fresh value with an
//! explicit header map. Relayed origin responses keep their status and body
//! but get the edge cache policy stamped on; branded pages carry their own
//! fixed policies.

use axum::body::Body;
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::{Response, StatusCode};

use crate::http::headers::is_hop_by_hop;
use crate::http::pages;
use crate::upstream::UpstreamOutcome;

/// Cache policy stamped on relayed origin payloads: five minutes in
/// browsers, a day in shared caches.
const CACHE_RELAY: &str = "public, max-age=300, s-maxage=86400";
/// Cache policy for the branded miss page. Kept short because the article
/// may be published right after the miss.
const CACHE_MISS: &str = "public, max-age=60";
/// Outage responses must never be cached.
const CACHE_NONE: &str = "no-cache";
const CORS_ANY: &str = "*";
const HTML_UTF8: &str = "text/html; charset=utf-8";
const PLAIN_UTF8: &str = "text/plain; charset=utf-8";
/// Seconds a client is told to wait before retrying after an outage.
const RETRY_DELAY: &str = "60";

/// Turn a classified upstream outcome into the response sent to the client.
pub fn respond(outcome: UpstreamOutcome, requested_path: &str) -> Response<Body> {
    match outcome {
        UpstreamOutcome::Relay(upstream) => relay(upstream),
        UpstreamOutcome::Missing => not_found(requested_path),
        UpstreamOutcome::Unreachable(_) => unavailable(),
    }
}

/// Refusal for paths outside the article prefix. No upstream call happened,
/// so there is nothing to brand; a terse plain-text 404 is the whole answer.
pub fn outside_prefix() -> Response<Body> {
    let mut response = Response::new(Body::from("not found\n"));
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(PLAIN_UTF8));
    response
}

/// Relay an origin response: same status, same body bytes (streamed), all
/// end-to-end headers preserved, with Cache-Control and the CORS
/// allow-origin header overwritten by the edge policy.
fn relay(upstream: reqwest::Response) -> Response<Body> {
    let status = upstream.status();
    let mut headers = HeaderMap::with_capacity(upstream.headers().len() + 2);
    for (name, value) in upstream.headers() {
        if is_hop_by_hop(name) {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    // insert drops any origin-supplied values for these two names.
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_RELAY));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(CORS_ANY),
    );

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

fn not_found(requested_path: &str) -> Response<Body> {
    branded(
        StatusCode::NOT_FOUND,
        CACHE_MISS,
        pages::not_found_page(requested_path),
    )
}

fn unavailable() -> Response<Body> {
    let mut response = branded(
        StatusCode::SERVICE_UNAVAILABLE,
        CACHE_NONE,
        pages::unavailable_page(),
    );
    response
        .headers_mut()
        .insert(header::RETRY_AFTER, HeaderValue::from_static(RETRY_DELAY));
    response
}

fn branded(status: StatusCode, cache: &'static str, page: String) -> Response<Body> {
    let mut response = Response::new(Body::from(page));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(HTML_UTF8));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(cache));
    response
}
