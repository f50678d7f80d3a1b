//! HTTP handlers for the vote pages

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use super::repo::{VoteRepo, VoteRepoError};
use super::service::{load_about, load_results};
use crate::build_info::BuildInfo;
use crate::config::SiteConfig;
use crate::state::{State, StateError};
use crate::view;

/// Errors that end a page request.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid state: {0}")]
    InvalidState(#[from] StateError),
    #[error(transparent)]
    Repo(#[from] VoteRepoError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidState(e) => {
                tracing::debug!(error = %e, "rejected state parameter");
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid state: use a two-letter US state code, e.g. CA",
                )
                    .into_response()
            }
            Self::Repo(e) => {
                tracing::error!("Failed to load vote data: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error retrieving vote data",
                )
                    .into_response()
            }
        }
    }
}

/// `?state=` query for `/results`
#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    pub state: Option<String>,
}

/// Create the page router.
///
/// Expects `Arc<dyn VoteRepo>`, `SiteConfig` and `BuildInfo` extensions.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/results", get(results_by_query))
        .route("/results/{state}", get(results_by_path))
        .route("/about", get(about))
}

#[allow(clippy::unused_async)] // Required for Axum handler signature
async fn index() -> Html<String> {
    Html(view::render_index(&State::ALL))
}

/// GET /results?state=XX
async fn results_by_query(
    Extension(repo): Extension<Arc<dyn VoteRepo>>,
    Extension(site): Extension<SiteConfig>,
    Query(query): Query<ResultsQuery>,
) -> Result<Html<String>, PageError> {
    let state: State = query.state.as_deref().unwrap_or_default().parse()?;
    results(repo.as_ref(), &site, state).await
}

/// GET /results/{state}
async fn results_by_path(
    Extension(repo): Extension<Arc<dyn VoteRepo>>,
    Extension(site): Extension<SiteConfig>,
    Path(state): Path<String>,
) -> Result<Html<String>, PageError> {
    let state: State = state.parse()?;
    results(repo.as_ref(), &site, state).await
}

async fn results(
    repo: &dyn VoteRepo,
    site: &SiteConfig,
    state: State,
) -> Result<Html<String>, PageError> {
    let page = load_results(repo, state, site.votes_limit()).await?;
    tracing::debug!(
        state = %state,
        votes = page.votes.len(),
        senators = page.senators.len(),
        "rendering results"
    );
    Ok(Html(view::render_results(&page)))
}

/// GET /about
async fn about(
    Extension(repo): Extension<Arc<dyn VoteRepo>>,
    Extension(build_info): Extension<BuildInfo>,
) -> Html<String> {
    let page = load_about(repo.as_ref(), &build_info.version).await;
    Html(view::render_about(&page))
}
