//! Assembles page data from the vote repository.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::repo::{VoteRepo, VoteRepoError};
use super::types::{RollCall, Senator};
use crate::state::State;

/// Shown when the refresh log is empty or unreadable.
pub const LAST_UPDATED_FALLBACK: &str = "Last update time unavailable";

/// Data behind the `/results` page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsPage {
    pub state: State,
    pub votes: Vec<RollCall>,
    pub senators: Vec<Senator>,
    pub last_updated: String,
}

/// Data behind the `/about` page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPage {
    pub last_updated: String,
    pub version: String,
}

#[must_use]
pub fn format_last_updated(updated_at: NaiveDateTime) -> String {
    updated_at.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// Last refresh time as display text. Never fails: an empty log or a
/// database error yields [`LAST_UPDATED_FALLBACK`].
pub async fn last_updated_text(repo: &dyn VoteRepo) -> String {
    match repo.last_updated().await {
        Ok(Some(updated_at)) => format_last_updated(updated_at),
        Ok(None) => {
            tracing::debug!("update log is empty");
            LAST_UPDATED_FALLBACK.to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read last update time");
            LAST_UPDATED_FALLBACK.to_string()
        }
    }
}

/// Fetch everything the results page needs for `state`.
///
/// The three reads touch different tables and run concurrently. The first
/// vote or senator error ends the request without waiting on the other
/// query; the last-updated read cannot fail.
///
/// # Errors
///
/// Returns the first `VoteRepoError` from the vote or senator query.
pub async fn load_results(
    repo: &dyn VoteRepo,
    state: State,
    limit: Option<i64>,
) -> Result<ResultsPage, VoteRepoError> {
    let (votes, senators, last_updated) = tokio::try_join!(
        repo.recent_votes(state, limit),
        repo.senators_by_state(state),
        async { Ok::<_, VoteRepoError>(last_updated_text(repo).await) },
    )?;

    Ok(ResultsPage {
        state,
        votes,
        senators,
        last_updated,
    })
}

/// Fetch the about page data.
pub async fn load_about(repo: &dyn VoteRepo, version: &str) -> AboutPage {
    AboutPage {
        last_updated: last_updated_text(repo).await,
        version: version.to_string(),
    }
}
