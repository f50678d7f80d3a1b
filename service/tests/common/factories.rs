//! Fixtures for vote data, plus helpers that seed them into Postgres.

use chrono::{NaiveDate, NaiveDateTime};
use senate_votes::state::State;
use senate_votes::votes::{RollCall, Senator, Tally};
use sqlx_postgres::PgConnection;

pub fn timestamp(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid date")
}

pub fn roll_call(congress: i32, session: i32, vote_number: i32) -> RollCall {
    RollCall {
        id: format!("{congress}-{session}-{vote_number}"),
        url: Some(format!(
            "https://www.senate.gov/legislative/LIS/roll_call_lists/roll_call_vote_cfm.cfm?congress={congress}&session={session}&vote={vote_number}"
        )),
        congress,
        session,
        congress_year: Some(2023),
        vote_number,
        vote_date: Some(timestamp(2023, 1, 26)),
        title: Some(format!("Vote {vote_number}")),
        document_text: None,
        majority_requirement: Some("1/2".to_string()),
        result: Some("Agreed to".to_string()),
        total: Tally {
            yea: Some(52),
            nay: Some(47),
            abstain: Some(1),
        },
        republican: Tally {
            yea: Some(3),
            nay: Some(45),
            abstain: Some(1),
        },
        democrat: Tally {
            yea: Some(47),
            nay: Some(1),
            abstain: Some(0),
        },
        independent: Tally {
            yea: Some(2),
            nay: Some(1),
            abstain: Some(0),
        },
        tie_breaker_whom: None,
        tie_breaker_vote: None,
        senator_1_vote: None,
        senator_2_vote: None,
    }
}

pub fn senator(first_name: &str, last_name: &str, state: State, designation: i32) -> Senator {
    Senator {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        party: Some("D".to_string()),
        lis_member_id: format!("S{}{designation}", state.abbreviation()),
        column_designation: designation,
        address: Some("331 Hart Senate Office Building Washington DC 20510".to_string()),
        phone: Some("(202) 224-3553".to_string()),
        email: None,
        website: Some(format!(
            "https://www.{}.senate.gov",
            last_name.to_ascii_lowercase()
        )),
        state: state.abbreviation().to_string(),
    }
}

/// Insert `vote`, recording how `state`'s two senators voted.
pub async fn insert_roll_call(
    conn: &mut PgConnection,
    vote: &RollCall,
    state: State,
    senior_vote: &str,
    junior_vote: &str,
) {
    let (senior, junior) = state.vote_columns();
    let sql = format!(
        r"
        INSERT INTO rollcall (
            id, url, congress, session, congress_year, vote_number, vote_date,
            vote_title, vote_document_text, majority_requirement, vote_result,
            count_yea, count_nay, count_abstain,
            republican_yea, republican_nay, republican_abstain,
            democrat_yea, democrat_nay, democrat_abstain,
            independent_yea, independent_nay, independent_abstain,
            tie_breaker_whom, tie_breaker_vote, {senior}, {junior}
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27)
        "
    );

    sqlx::query(&sql)
        .bind(&vote.id)
        .bind(&vote.url)
        .bind(vote.congress)
        .bind(vote.session)
        .bind(vote.congress_year)
        .bind(vote.vote_number)
        .bind(vote.vote_date)
        .bind(&vote.title)
        .bind(&vote.document_text)
        .bind(&vote.majority_requirement)
        .bind(&vote.result)
        .bind(vote.total.yea)
        .bind(vote.total.nay)
        .bind(vote.total.abstain)
        .bind(vote.republican.yea)
        .bind(vote.republican.nay)
        .bind(vote.republican.abstain)
        .bind(vote.democrat.yea)
        .bind(vote.democrat.nay)
        .bind(vote.democrat.abstain)
        .bind(vote.independent.yea)
        .bind(vote.independent.nay)
        .bind(vote.independent.abstain)
        .bind(&vote.tie_breaker_whom)
        .bind(&vote.tie_breaker_vote)
        .bind(senior_vote)
        .bind(junior_vote)
        .execute(conn)
        .await
        .expect("insert rollcall");
}

pub async fn insert_senator(conn: &mut PgConnection, senator: &Senator) {
    sqlx::query(
        r"
        INSERT INTO senator (
            lis_member_id, first_name, last_name, party, state, column_designation,
            address, phone, email, website
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ",
    )
    .bind(&senator.lis_member_id)
    .bind(&senator.first_name)
    .bind(&senator.last_name)
    .bind(&senator.party)
    .bind(&senator.state)
    .bind(senator.column_designation)
    .bind(&senator.address)
    .bind(&senator.phone)
    .bind(&senator.email)
    .bind(&senator.website)
    .execute(conn)
    .await
    .expect("insert senator");
}

pub async fn insert_log_entry(conn: &mut PgConnection, updated_at: NaiveDateTime) {
    sqlx::query("INSERT INTO log (updated_at) VALUES ($1)")
        .bind(updated_at)
        .execute(conn)
        .await
        .expect("insert log entry");
}
