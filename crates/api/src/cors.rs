//! CORS allow-list with wildcard subdomain support.
//!
//! Requests without an `Origin` header (curl, server-to-server) never enter
//! CORS processing and are always served; the allow-list only constrains
//! browser clients.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Builds the CORS layer for the given origin patterns. An empty list is
/// the development default and allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let patterns = allowed_origins.to_vec();
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _request_parts| {
                origin
                    .to_str()
                    .map(|origin| origin_allowed(origin, &patterns))
                    .unwrap_or(false)
            },
        ))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Returns true when `origin` matches one of the configured patterns.
///
/// A pattern is either an exact origin (`https://mirror-it.shop`) or a
/// single-wildcard form (`https://*.mirror-it.shop`) matching any non-empty
/// subdomain of the host.
fn origin_allowed(origin: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            origin.starts_with(prefix)
                && origin.ends_with(suffix)
                && origin.len() > prefix.len() + suffix.len()
        }
        None => origin == pattern,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_origin_matches() {
        let allowed = patterns(&["https://mirror-it.shop"]);
        assert!(origin_allowed("https://mirror-it.shop", &allowed));
        assert!(!origin_allowed("https://other.shop", &allowed));
    }

    #[test]
    fn wildcard_matches_any_subdomain() {
        let allowed = patterns(&["https://*.mirror-it.shop"]);
        assert!(origin_allowed("https://www.mirror-it.shop", &allowed));
        assert!(origin_allowed("https://staging.mirror-it.shop", &allowed));
    }

    #[test]
    fn wildcard_requires_a_subdomain() {
        let allowed = patterns(&["https://*.mirror-it.shop"]);
        assert!(!origin_allowed("https://mirror-it.shop", &allowed));
    }

    #[test]
    fn wildcard_does_not_match_suffix_lookalikes() {
        let allowed = patterns(&["https://*.mirror-it.shop"]);
        assert!(!origin_allowed("https://evilmirror-it.shop", &allowed));
        assert!(!origin_allowed("http://www.mirror-it.shop", &allowed));
    }

    #[test]
    fn any_pattern_in_the_list_is_enough() {
        let allowed = patterns(&["https://mirror-it.shop", "https://*.mirror-it.shop"]);
        assert!(origin_allowed("https://mirror-it.shop", &allowed));
        assert!(origin_allowed("https://app.mirror-it.shop", &allowed));
    }
}
