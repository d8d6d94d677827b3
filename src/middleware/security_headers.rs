//! Security-related response headers (helmet-style defaults).
//!
//! Every header is set only when the handler did not set it already.
//! HSTS is added in production only, where TLS terminates in front of the service.

use axum::Router;
use axum::http::header::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;

const BASELINE: &[(&str, &str)] = &[
    // Clickjacking protection (legacy + modern)
    ("x-frame-options", "DENY"),
    (
        "content-security-policy",
        "default-src 'none'; frame-ancestors 'none'",
    ),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "no-referrer"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("x-dns-prefetch-control", "off"),
    (
        "permissions-policy",
        "camera=(), microphone=(), geolocation=()",
    ),
];

const HSTS: (&str, &str) = ("strict-transport-security", "max-age=15552000; includeSubDomains");

/// Apply common security headers to all responses.
pub fn apply(router: Router, config: &Config) -> Router {
    let router = BASELINE
        .iter()
        .fold(router, |router, &(name, value)| with_header(router, name, value));

    if config.app_env.is_production() {
        with_header(router, HSTS.0, HSTS.1)
    } else {
        router
    }
}

fn with_header(router: Router, name: &'static str, value: &'static str) -> Router {
    router.layer(SetResponseHeaderLayer::if_not_present(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    ))
}
