//! HTML rendering for the three pages.
//!
//! Pages are plain strings built from the page-data structs in
//! [`crate::votes::service`]. Every database- or user-derived value passes
//! through [`escape`] before it is written.

use crate::state::State;
use crate::votes::service::{AboutPage, ResultsPage};
use crate::votes::types::{RollCall, Senator, Tally};

const SITE_TITLE: &str = "Senate Votes by State";

const STYLE: &str = "body{font-family:sans-serif;margin:2rem auto;max-width:60rem;padding:0 1rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.3rem .5rem;text-align:left;vertical-align:top}\
nav a{margin-right:1rem}\
ul.states{columns:4}";

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn opt(value: Option<&str>) -> String {
    value.map_or_else(String::new, escape)
}

fn count(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |n| n.to_string())
}

fn tally(t: Tally) -> String {
    format!("{} / {} / {}", count(t.yea), count(t.nay), count(t.abstain))
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | {SITE_TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a><a href=\"/about\">About</a></nav>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

/// Landing page listing every state.
#[must_use]
pub fn render_index(states: &[State]) -> String {
    let mut body = format!(
        "<h1>{SITE_TITLE}</h1>\n<p>Choose a state to see how its senators voted.</p>\n\
         <ul class=\"states\">\n"
    );
    for state in states {
        body.push_str(&format!(
            "<li><a href=\"/results/{abbr}\">{name}</a></li>\n",
            abbr = state.abbreviation(),
            name = state.name(),
        ));
    }
    body.push_str("</ul>\n");
    layout("Home", &body)
}

fn render_senator(body: &mut String, senator: &Senator) {
    body.push_str(&format!(
        "<li><strong>{name}</strong> ({party})",
        name = escape(&senator.full_name()),
        party = opt(senator.party.as_deref()),
    ));
    if let Some(address) = senator.address.as_deref() {
        body.push_str(&format!("<br>{}", escape(address)));
    }
    if let Some(phone) = senator.phone.as_deref() {
        body.push_str(&format!("<br>Phone: {}", escape(phone)));
    }
    if let Some(email) = senator.email.as_deref() {
        body.push_str(&format!("<br>Email: {}", escape(email)));
    }
    if let Some(website) = senator.website.as_deref() {
        let website = escape(website);
        body.push_str(&format!("<br><a href=\"{website}\">{website}</a>"));
    }
    body.push_str("</li>\n");
}

fn render_vote_row(body: &mut String, vote: &RollCall) {
    let date = vote
        .vote_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let title = opt(vote.title.as_deref());
    let title = match vote.url.as_deref() {
        Some(url) => format!("<a href=\"{}\">{title}</a>", escape(url)),
        None => title,
    };
    body.push_str(&format!(
        "<tr><td>{congress}-{session}-{number}</td><td>{date}</td><td>{title}<br><small>{document}</small></td>\
         <td>{result}</td><td>{total}</td><td>{rep}</td><td>{dem}</td><td>{ind}</td>\
         <td>{senior}</td><td>{junior}</td></tr>\n",
        congress = vote.congress,
        session = vote.session,
        number = vote.vote_number,
        document = opt(vote.document_text.as_deref()),
        result = opt(vote.result.as_deref()),
        total = tally(vote.total),
        rep = tally(vote.republican),
        dem = tally(vote.democrat),
        ind = tally(vote.independent),
        senior = opt(vote.senator_1_vote.as_deref()),
        junior = opt(vote.senator_2_vote.as_deref()),
    ));
}

/// Results page for one state.
#[must_use]
pub fn render_results(page: &ResultsPage) -> String {
    let name = page.state.name();
    let mut body = format!("<h1>{name}</h1>\n<h2>Senators</h2>\n");

    if page.senators.is_empty() {
        body.push_str("<p>No senators on record.</p>\n");
    } else {
        body.push_str("<ol>\n");
        for senator in &page.senators {
            render_senator(&mut body, senator);
        }
        body.push_str("</ol>\n");
    }

    body.push_str("<h2>Recent votes</h2>\n");
    if page.votes.is_empty() {
        body.push_str("<p>No roll-call votes on record.</p>\n");
    } else {
        let heading = |i: usize| {
            page.senators
                .get(i)
                .map_or_else(|| format!("Senator {}", i + 1), |s| escape(&s.last_name))
        };
        body.push_str(&format!(
            "<table>\n<tr><th>Vote</th><th>Date</th><th>Question</th><th>Result</th>\
             <th>Yea / Nay / Abstain</th><th>R</th><th>D</th><th>I</th><th>{}</th><th>{}</th></tr>\n",
            heading(0),
            heading(1),
        ));
        for vote in &page.votes {
            render_vote_row(&mut body, vote);
        }
        body.push_str("</table>\n");
    }

    body.push_str(&format!(
        "<p><small>Last updated: {}</small></p>\n",
        escape(&page.last_updated)
    ));
    layout(name, &body)
}

/// About page.
#[must_use]
pub fn render_about(page: &AboutPage) -> String {
    let body = format!(
        "<h1>About</h1>\n<p>Roll-call votes of the United States Senate and contact details \
         for each state's senators, drawn from senate.gov.</p>\n\
         <p>Last updated: {updated}</p>\n<p><small>Version {version}</small></p>\n",
        updated = escape(&page.last_updated),
        version = escape(&page.version),
    );
    layout("About", &body)
}
