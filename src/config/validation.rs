//! Configuration validation.
//!
//! Semantic checks on an already-deserialized [`EdgeConfig`] (serde handles
//! the syntactic ones). Validation is a pure function and reports all
//! violations, not just the first, so a bad config can be fixed in one
//! round trip.

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::EdgeConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic violation found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not an ip:port socket address")]
    InvalidBindAddress(String),

    #[error("upstream.origin {origin:?} rejected: {reason}")]
    InvalidUpstreamOrigin { origin: String, reason: String },

    #[error("observability.metrics_address {0:?} is not an ip:port socket address")]
    InvalidMetricsAddress(String),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Parse and vet the upstream origin.
///
/// The origin must be an absolute http(s) URL carrying scheme and authority
/// only; the request path and query are appended verbatim at forward time,
/// so a base path, query, or fragment here would corrupt forwarded URLs.
pub fn parse_origin(origin: &str) -> Result<Url, ValidationError> {
    let reject = |reason: &str| ValidationError::InvalidUpstreamOrigin {
        origin: origin.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(origin).map_err(|e| reject(&e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(reject("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(reject("missing host"));
    }
    if !url.path().is_empty() && url.path() != "/" {
        return Err(reject("must not carry a path"));
    }
    if url.query().is_some() {
        return Err(reject("must not carry a query"));
    }
    if url.fragment().is_some() {
        return Err(reject("must not carry a fragment"));
    }

    Ok(url)
}

/// Validate a configuration, collecting every violation.
///
/// The metrics address is only checked when the metrics endpoint is
/// enabled; a disabled endpoint leaves the field unused.
pub fn validate_config(config: &EdgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Err(e) = parse_origin(&config.upstream.origin) {
        errors.push(e);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&EdgeConfig::default()).is_ok());
    }

    #[test]
    fn test_origin_accepts_scheme_and_authority() {
        assert!(parse_origin("https://articles.example.net").is_ok());
        assert!(parse_origin("http://127.0.0.1:9200").is_ok());
        // A bare trailing slash is the parser's normal form for "no path".
        assert!(parse_origin("https://articles.example.net/").is_ok());
    }

    #[test]
    fn test_origin_rejects_path_query_fragment() {
        assert!(parse_origin("https://articles.example.net/base").is_err());
        assert!(parse_origin("https://articles.example.net/?x=1").is_err());
        assert!(parse_origin("https://articles.example.net/#top").is_err());
    }

    #[test]
    fn test_origin_rejects_other_schemes() {
        assert!(parse_origin("ftp://articles.example.net").is_err());
        assert!(parse_origin("articles.example.net").is_err());
    }

    #[test]
    fn test_all_violations_are_collected() {
        let mut config = EdgeConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.upstream.origin = "not a url".to_string();
        config.observability.log_level = "loud".to_string();
        config.observability.metrics_address = "also-bad".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = EdgeConfig::default();
        config.observability.metrics_enabled = false;
        config.observability.metrics_address = "nonsense".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
