//! Outbound HTTP client for the configured origin.

use axum::body::{Body, HttpBody};
use axum::http::Request;
use reqwest::redirect;
use thiserror::Error;
use url::Url;

use crate::config::UpstreamConfig;
use crate::config::validation::{parse_origin, ValidationError};
use crate::http::headers::forwardable_headers;

/// Redirect chains longer than this abort the upstream call.
const MAX_REDIRECTS: usize = 10;

/// Why an upstream round trip produced no usable response.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The configured origin URL cannot back a client.
    #[error("unusable upstream origin: {0}")]
    Origin(#[from] ValidationError),
    /// The outbound call failed before a final response arrived.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Reusable connection to the upstream origin.
///
/// One instance serves all requests; the inner client pools connections per
/// authority. Redirects from the origin are followed internally, so callers
/// only ever see the final hop.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    origin: Url,
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let origin = parse_origin(&config.origin)?;
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { origin, client })
    }

    /// The authority requests are rewritten to.
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Send the inbound request to the origin and await the final response.
    ///
    /// Method, path, query string, and end-to-end headers carry over
    /// verbatim; the body is streamed without buffering. Chunk-level read
    /// failures after the response head surface later, on the relayed body
    /// stream, not here.
    pub async fn forward(&self, request: Request<Body>) -> Result<reqwest::Response, UpstreamError> {
        let (parts, body) = request.into_parts();
        let url = upstream_url(&self.origin, parts.uri.path(), parts.uri.query());
        let headers = forwardable_headers(&parts.headers);

        let call = self.client.request(parts.method, url).headers(headers);
        // Requests without a body (GET, HEAD) go out without body framing.
        let call = if body.size_hint().exact() == Some(0) {
            call
        } else {
            call.body(reqwest::Body::wrap_stream(body.into_data_stream()))
        };

        Ok(call.send().await?)
    }
}

/// Swap the inbound authority for the origin's, keeping path and query
/// byte-for-byte.
fn upstream_url(origin: &Url, path: &str, query: Option<&str>) -> Url {
    let mut url = origin.clone();
    url.set_path(path);
    url.set_query(query);
    url
}
