//! Test app builder that mirrors main.rs wiring with an injectable repo.
//!
//! ```ignore
//! let mock = Arc::new(MockVoteRepo::new());
//! let app = TestAppBuilder::with_mock(mock.clone()).build();
//! // app.oneshot(...)
//! ```

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use senate_votes::{
    build_info::BuildInfo,
    config::{SecurityHeadersConfig, SiteConfig},
    http::with_security_headers,
    votes::{self, mock::MockVoteRepo, VoteRepo},
};
use tower::ServiceExt;
use tower_http::trace::TraceLayer;

/// Health check handler (mirrors main.rs)
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

pub struct TestAppBuilder {
    repo: Arc<dyn VoteRepo>,
    site: SiteConfig,
    security_headers: SecurityHeadersConfig,
    build_info: BuildInfo,
}

impl TestAppBuilder {
    /// App backed by any repo implementation.
    pub fn with_repo(repo: Arc<dyn VoteRepo>) -> Self {
        Self {
            repo,
            site: SiteConfig::default(),
            security_headers: SecurityHeadersConfig::default(),
            build_info: BuildInfo::from_lookup(|key| match key {
                "APP_VERSION" => Some("test-build".to_string()),
                _ => None,
            }),
        }
    }

    /// App backed by a shared mock the test can inspect afterwards.
    pub fn with_mock(mock: Arc<MockVoteRepo>) -> Self {
        Self::with_repo(mock)
    }

    pub fn with_votes_limit(mut self, limit: u32) -> Self {
        self.site.recent_votes_limit = limit;
        self
    }

    pub fn with_security_headers(mut self, config: SecurityHeadersConfig) -> Self {
        self.security_headers = config;
        self
    }

    pub fn build(self) -> Router {
        let app = Router::new()
            .merge(votes::http::router())
            .route("/health", get(health_check))
            .layer(Extension(self.repo))
            .layer(Extension(self.site))
            .layer(Extension(self.build_info))
            .layer(TraceLayer::new_for_http());

        with_security_headers(app, &self.security_headers)
    }
}

/// Send a GET to `app` and return the response.
pub async fn get_response(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Send a GET to `app` and return status plus body text.
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = get_response(app, uri).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 4 * 1024 * 1024)
        .await
        .expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}
