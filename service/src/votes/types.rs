//! Row types read from the vote tables.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Yea / nay / abstain tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub yea: Option<i32>,
    pub nay: Option<i32>,
    pub abstain: Option<i32>,
}

/// One Senate roll-call vote, with how the requested state's senators voted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollCall {
    /// `congress-session-vote_number`, e.g. `118-1-5`
    pub id: String,
    pub url: Option<String>,
    pub congress: i32,
    pub session: i32,
    pub congress_year: Option<i32>,
    pub vote_number: i32,
    pub vote_date: Option<NaiveDateTime>,
    pub title: Option<String>,
    pub document_text: Option<String>,
    pub majority_requirement: Option<String>,
    pub result: Option<String>,
    pub total: Tally,
    pub republican: Tally,
    pub democrat: Tally,
    pub independent: Tally,
    pub tie_breaker_whom: Option<String>,
    pub tie_breaker_vote: Option<String>,
    /// Vote cast by the state's senior senator (column designation 1).
    pub senator_1_vote: Option<String>,
    /// Vote cast by the state's junior senator (column designation 2).
    pub senator_2_vote: Option<String>,
}

/// A sitting senator and their contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Senator {
    pub first_name: String,
    pub last_name: String,
    pub party: Option<String>,
    /// Senate LIS member identifier, e.g. `S313`
    pub lis_member_id: String,
    /// 1 for the senior senator, 2 for the junior senator
    pub column_designation: i32,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub state: String,
}

impl Senator {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
