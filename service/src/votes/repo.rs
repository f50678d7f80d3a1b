//! Read-only queries against the `rollcall`, `senator` and `log` tables.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::types::{RollCall, Senator, Tally};
use crate::state::State;

/// Error types for vote queries
#[derive(Debug, thiserror::Error)]
pub enum VoteRepoError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Build the recent-votes query for `state`.
///
/// The per-state vote columns are identifiers, so they cannot be bound as
/// parameters. They come from [`State::vote_columns`], never from input.
fn recent_votes_sql(state: State) -> String {
    let (senior, junior) = state.vote_columns();
    format!(
        r"
        SELECT id, url, congress, session, congress_year, vote_number, vote_date,
               vote_title, vote_document_text, majority_requirement, vote_result,
               count_yea, count_nay, count_abstain,
               republican_yea, republican_nay, republican_abstain,
               democrat_yea, democrat_nay, democrat_abstain,
               independent_yea, independent_nay, independent_abstain,
               tie_breaker_whom, tie_breaker_vote,
               {senior} AS senator_1_vote, {junior} AS senator_2_vote
        FROM rollcall
        ORDER BY congress DESC, session DESC, vote_number DESC
        LIMIT $1
        "
    )
}

fn map_tally(row: &PgRow, prefix: &str) -> Result<Tally, sqlx::Error> {
    Ok(Tally {
        yea: row.try_get(format!("{prefix}_yea").as_str())?,
        nay: row.try_get(format!("{prefix}_nay").as_str())?,
        abstain: row.try_get(format!("{prefix}_abstain").as_str())?,
    })
}

fn map_roll_call_row(row: &PgRow) -> Result<RollCall, sqlx::Error> {
    Ok(RollCall {
        id: row.try_get("id")?,
        url: row.try_get("url")?,
        congress: row.try_get("congress")?,
        session: row.try_get("session")?,
        congress_year: row.try_get("congress_year")?,
        vote_number: row.try_get("vote_number")?,
        vote_date: row.try_get("vote_date")?,
        title: row.try_get("vote_title")?,
        document_text: row.try_get("vote_document_text")?,
        majority_requirement: row.try_get("majority_requirement")?,
        result: row.try_get("vote_result")?,
        total: map_tally(row, "count")?,
        republican: map_tally(row, "republican")?,
        democrat: map_tally(row, "democrat")?,
        independent: map_tally(row, "independent")?,
        tie_breaker_whom: row.try_get("tie_breaker_whom")?,
        tie_breaker_vote: row.try_get("tie_breaker_vote")?,
        senator_1_vote: row.try_get("senator_1_vote")?,
        senator_2_vote: row.try_get("senator_2_vote")?,
    })
}

fn map_senator_row(row: &PgRow) -> Result<Senator, sqlx::Error> {
    Ok(Senator {
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        party: row.try_get("party")?,
        lis_member_id: row.try_get("lis_member_id")?,
        column_designation: row.try_get("column_designation")?,
        address: row.try_get("address")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        website: row.try_get("website")?,
        state: row.try_get("state")?,
    })
}

/// Most recent roll calls, newest first, with `state`'s senators' votes.
///
/// `limit` of `None` returns every roll call.
///
/// # Errors
///
/// Returns `VoteRepoError::Database` on database failures.
pub async fn recent_votes<'e, E>(
    executor: E,
    state: State,
    limit: Option<i64>,
) -> Result<Vec<RollCall>, VoteRepoError>
where
    E: sqlx::Executor<'e, Database = sqlx::Postgres>,
{
    let sql = recent_votes_sql(state);
    let rows = sqlx::query(&sql).bind(limit).fetch_all(executor).await?;

    Ok(rows
        .iter()
        .map(map_roll_call_row)
        .collect::<Result<Vec<_>, _>>()?)
}

/// Senators representing `state`, senior first.
///
/// # Errors
///
/// Returns `VoteRepoError::Database` on database failures.
pub async fn senators_by_state<'e, E>(
    executor: E,
    state: State,
) -> Result<Vec<Senator>, VoteRepoError>
where
    E: sqlx::Executor<'e, Database = sqlx::Postgres>,
{
    let rows = sqlx::query(
        r"
        SELECT first_name, last_name, party, lis_member_id, column_designation,
               address, phone, email, website, state
        FROM senator
        WHERE state = $1
        ORDER BY column_designation ASC, last_name ASC
        ",
    )
    .bind(state.abbreviation())
    .fetch_all(executor)
    .await?;

    Ok(rows
        .iter()
        .map(map_senator_row)
        .collect::<Result<Vec<_>, _>>()?)
}

/// When the dataset was last refreshed, or `None` if the log is empty.
///
/// # Errors
///
/// Returns `VoteRepoError::Database` on database failures.
pub async fn last_updated<'e, E>(executor: E) -> Result<Option<NaiveDateTime>, VoteRepoError>
where
    E: sqlx::Executor<'e, Database = sqlx::Postgres>,
{
    let updated_at = sqlx::query_scalar::<_, Option<NaiveDateTime>>(
        r"
        SELECT MAX(updated_at) FROM log
        ",
    )
    .fetch_one(executor)
    .await?;

    Ok(updated_at)
}

/// Repository trait for the vote pages.
#[async_trait]
pub trait VoteRepo: Send + Sync {
    async fn recent_votes(
        &self,
        state: State,
        limit: Option<i64>,
    ) -> Result<Vec<RollCall>, VoteRepoError>;

    async fn senators_by_state(&self, state: State) -> Result<Vec<Senator>, VoteRepoError>;

    async fn last_updated(&self) -> Result<Option<NaiveDateTime>, VoteRepoError>;
}

/// `PostgreSQL` implementation of [`VoteRepo`].
///
/// Each query checks a connection out of the pool and returns it when the
/// query finishes, whether it succeeded or failed.
pub struct PgVoteRepo {
    pool: PgPool,
}

impl PgVoteRepo {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepo for PgVoteRepo {
    async fn recent_votes(
        &self,
        state: State,
        limit: Option<i64>,
    ) -> Result<Vec<RollCall>, VoteRepoError> {
        recent_votes(&self.pool, state, limit).await
    }

    async fn senators_by_state(&self, state: State) -> Result<Vec<Senator>, VoteRepoError> {
        senators_by_state(&self.pool, state).await
    }

    async fn last_updated(&self) -> Result<Option<NaiveDateTime>, VoteRepoError> {
        last_updated(&self.pool).await
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(clippy::expect_used)]
pub mod mock {
    //! In-memory vote repo for handler tests.
    //!
    //! Mirrors the ordering guarantees of [`PgVoteRepo`](super::PgVoteRepo):
    //! senators are filtered by state and sorted by column designation.

    use super::{async_trait, NaiveDateTime, RollCall, Senator, State, VoteRepo, VoteRepoError};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockVoteRepo {
        votes: Mutex<Vec<RollCall>>,
        senators: Mutex<Vec<Senator>>,
        last_updated: Mutex<Option<NaiveDateTime>>,
        requested: Mutex<Vec<State>>,
        fail_votes: AtomicBool,
        fail_senators: AtomicBool,
        fail_last_updated: AtomicBool,
        stall_senators: AtomicBool,
    }

    impl MockVoteRepo {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// # Panics
        ///
        /// Panics if the internal mutex is poisoned.
        pub fn set_votes(&self, votes: Vec<RollCall>) {
            *self.votes.lock().expect("lock poisoned") = votes;
        }

        /// # Panics
        ///
        /// Panics if the internal mutex is poisoned.
        pub fn set_senators(&self, senators: Vec<Senator>) {
            *self.senators.lock().expect("lock poisoned") = senators;
        }

        /// # Panics
        ///
        /// Panics if the internal mutex is poisoned.
        pub fn set_last_updated(&self, updated_at: Option<NaiveDateTime>) {
            *self.last_updated.lock().expect("lock poisoned") = updated_at;
        }

        /// Make `recent_votes` return a pool timeout.
        pub fn fail_votes(&self) {
            self.fail_votes.store(true, Ordering::SeqCst);
        }

        /// Make `senators_by_state` return a pool timeout.
        pub fn fail_senators(&self) {
            self.fail_senators.store(true, Ordering::SeqCst);
        }

        /// Make `senators_by_state` never complete.
        pub fn stall_senators(&self) {
            self.stall_senators.store(true, Ordering::SeqCst);
        }

        /// Make `last_updated` return a pool timeout.
        pub fn fail_last_updated(&self) {
            self.fail_last_updated.store(true, Ordering::SeqCst);
        }

        /// States passed to any state-scoped query, in call order.
        ///
        /// # Panics
        ///
        /// Panics if the internal mutex is poisoned.
        #[must_use]
        pub fn requested_states(&self) -> Vec<State> {
            self.requested.lock().expect("lock poisoned").clone()
        }

        fn record(&self, state: State) {
            self.requested.lock().expect("lock poisoned").push(state);
        }
    }

    #[async_trait]
    impl VoteRepo for MockVoteRepo {
        async fn recent_votes(
            &self,
            state: State,
            limit: Option<i64>,
        ) -> Result<Vec<RollCall>, VoteRepoError> {
            self.record(state);
            if self.fail_votes.load(Ordering::SeqCst) {
                return Err(sqlx::Error::PoolTimedOut.into());
            }
            let votes = self.votes.lock().expect("lock poisoned").clone();
            let take = limit
                .and_then(|l| usize::try_from(l).ok())
                .unwrap_or(votes.len());
            Ok(votes.into_iter().take(take).collect())
        }

        async fn senators_by_state(&self, state: State) -> Result<Vec<Senator>, VoteRepoError> {
            self.record(state);
            if self.stall_senators.load(Ordering::SeqCst) {
                std::future::pending::<()>().await;
            }
            if self.fail_senators.load(Ordering::SeqCst) {
                return Err(sqlx::Error::PoolTimedOut.into());
            }
            let mut senators: Vec<Senator> = self
                .senators
                .lock()
                .expect("lock poisoned")
                .iter()
                .filter(|s| s.state == state.abbreviation())
                .cloned()
                .collect();
            senators.sort_by(|a, b| {
                a.column_designation
                    .cmp(&b.column_designation)
                    .then_with(|| a.last_name.cmp(&b.last_name))
            });
            Ok(senators)
        }

        async fn last_updated(&self) -> Result<Option<NaiveDateTime>, VoteRepoError> {
            if self.fail_last_updated.load(Ordering::SeqCst) {
                return Err(sqlx::Error::PoolTimedOut.into());
            }
            Ok(*self.last_updated.lock().expect("lock poisoned"))
        }
    }
}
