//! Security headers for every HTML and plain-text response.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY,
            X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION,
        },
        HeaderMap, HeaderValue,
    },
    middleware::{self, Next},
    response::Response,
    Router,
};

use crate::config::SecurityHeadersConfig;

/// Build the header set from configuration.
///
/// Values that are not valid header text are skipped rather than failing startup;
/// `Config::validate` already rejects the ones that matter.
#[must_use]
pub fn build_security_headers(config: &SecurityHeadersConfig) -> Arc<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));

    let configured = [
        (X_FRAME_OPTIONS, config.frame_options.to_uppercase()),
        (CONTENT_SECURITY_POLICY, config.content_security_policy.clone()),
        (REFERRER_POLICY, config.referrer_policy.clone()),
    ];
    for (name, value) in configured {
        if let Ok(value) = HeaderValue::from_str(&value) {
            headers.insert(name, value);
        }
    }

    // HSTS only makes sense behind HTTPS
    if config.hsts_enabled {
        let hsts_value = if config.hsts_include_subdomains {
            format!("max-age={}; includeSubDomains", config.hsts_max_age)
        } else {
            format!("max-age={}", config.hsts_max_age)
        };
        if let Ok(value) = HeaderValue::from_str(&hsts_value) {
            headers.insert(STRICT_TRANSPORT_SECURITY, value);
        }
    }

    Arc::new(headers)
}

async fn apply_security_headers(
    State(headers): State<Arc<HeaderMap>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let response_headers = response.headers_mut();
    for (name, value) in headers.iter() {
        response_headers.insert(name.clone(), value.clone());
    }
    response
}

/// Wrap `router` so every response carries the configured security headers.
///
/// Returns the router untouched when headers are disabled. Call this after
/// all routes are added so the headers also cover 404s and rejections.
pub fn with_security_headers(router: Router, config: &SecurityHeadersConfig) -> Router {
    if !config.enabled {
        tracing::info!("Security headers disabled");
        return router;
    }

    tracing::info!(hsts = config.hsts_enabled, "Security headers enabled");
    let headers = build_security_headers(config);
    router.layer(middleware::from_fn_with_state(
        headers,
        apply_security_headers,
    ))
}
