//! Senate roll-call votes and senators, by state.
//!
//! - [`repo`] - read-only queries plus the [`VoteRepo`] trait
//! - [`service`] - concurrent fetches assembled into page data
//! - [`http`] - axum handlers for `/`, `/results` and `/about`

pub mod http;
pub mod repo;
pub mod service;
pub mod types;

pub use repo::{PgVoteRepo, VoteRepo, VoteRepoError};
pub use service::{AboutPage, ResultsPage, LAST_UPDATED_FALLBACK};
pub use types::{RollCall, Senator, Tally};

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    pub use super::repo::mock::MockVoteRepo;
}
