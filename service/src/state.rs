//! The fixed set of US states served by the site.
//!
//! [`State`] is the allow-list for every state code that arrives over HTTP.
//! Vote queries select per-state columns by name, so the column identifiers
//! live here as compile-time constants and raw input never reaches SQL text.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

macro_rules! states {
    ($($abbr:ident => ($name:literal, $first:literal, $second:literal)),+ $(,)?) => {
        /// A US state, identified by its two-letter postal abbreviation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(clippy::upper_case_acronyms)]
        pub enum State {
            $($abbr,)+
        }

        impl State {
            /// Every state, ordered by full name as listed on the landing page.
            pub const ALL: [Self; 50] = [$(Self::$abbr,)+];

            /// Two-letter uppercase postal abbreviation.
            #[must_use]
            pub const fn abbreviation(self) -> &'static str {
                match self {
                    $(Self::$abbr => stringify!($abbr),)+
                }
            }

            /// Full state name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$abbr => $name,)+
                }
            }

            /// The `rollcall` columns holding how this state's senators voted,
            /// ordered by column designation (senior first).
            #[must_use]
            pub const fn vote_columns(self) -> (&'static str, &'static str) {
                match self {
                    $(Self::$abbr => ($first, $second),)+
                }
            }
        }
    };
}

states! {
    AL => ("Alabama", "al_vote_1", "al_vote_2"),
    AK => ("Alaska", "ak_vote_1", "ak_vote_2"),
    AZ => ("Arizona", "az_vote_1", "az_vote_2"),
    AR => ("Arkansas", "ar_vote_1", "ar_vote_2"),
    CA => ("California", "ca_vote_1", "ca_vote_2"),
    CO => ("Colorado", "co_vote_1", "co_vote_2"),
    CT => ("Connecticut", "ct_vote_1", "ct_vote_2"),
    DE => ("Delaware", "de_vote_1", "de_vote_2"),
    FL => ("Florida", "fl_vote_1", "fl_vote_2"),
    GA => ("Georgia", "ga_vote_1", "ga_vote_2"),
    HI => ("Hawaii", "hi_vote_1", "hi_vote_2"),
    ID => ("Idaho", "id_vote_1", "id_vote_2"),
    IL => ("Illinois", "il_vote_1", "il_vote_2"),
    IN => ("Indiana", "in_vote_1", "in_vote_2"),
    IA => ("Iowa", "ia_vote_1", "ia_vote_2"),
    KS => ("Kansas", "ks_vote_1", "ks_vote_2"),
    KY => ("Kentucky", "ky_vote_1", "ky_vote_2"),
    LA => ("Louisiana", "la_vote_1", "la_vote_2"),
    ME => ("Maine", "me_vote_1", "me_vote_2"),
    MD => ("Maryland", "md_vote_1", "md_vote_2"),
    MA => ("Massachusetts", "ma_vote_1", "ma_vote_2"),
    MI => ("Michigan", "mi_vote_1", "mi_vote_2"),
    MN => ("Minnesota", "mn_vote_1", "mn_vote_2"),
    MS => ("Mississippi", "ms_vote_1", "ms_vote_2"),
    MO => ("Missouri", "mo_vote_1", "mo_vote_2"),
    MT => ("Montana", "mt_vote_1", "mt_vote_2"),
    NE => ("Nebraska", "ne_vote_1", "ne_vote_2"),
    NV => ("Nevada", "nv_vote_1", "nv_vote_2"),
    NH => ("New Hampshire", "nh_vote_1", "nh_vote_2"),
    NJ => ("New Jersey", "nj_vote_1", "nj_vote_2"),
    NM => ("New Mexico", "nm_vote_1", "nm_vote_2"),
    NY => ("New York", "ny_vote_1", "ny_vote_2"),
    NC => ("North Carolina", "nc_vote_1", "nc_vote_2"),
    ND => ("North Dakota", "nd_vote_1", "nd_vote_2"),
    OH => ("Ohio", "oh_vote_1", "oh_vote_2"),
    OK => ("Oklahoma", "ok_vote_1", "ok_vote_2"),
    OR => ("Oregon", "or_vote_1", "or_vote_2"),
    PA => ("Pennsylvania", "pa_vote_1", "pa_vote_2"),
    RI => ("Rhode Island", "ri_vote_1", "ri_vote_2"),
    SC => ("South Carolina", "sc_vote_1", "sc_vote_2"),
    SD => ("South Dakota", "sd_vote_1", "sd_vote_2"),
    TN => ("Tennessee", "tn_vote_1", "tn_vote_2"),
    TX => ("Texas", "tx_vote_1", "tx_vote_2"),
    UT => ("Utah", "ut_vote_1", "ut_vote_2"),
    VT => ("Vermont", "vt_vote_1", "vt_vote_2"),
    VA => ("Virginia", "va_vote_1", "va_vote_2"),
    WA => ("Washington", "wa_vote_1", "wa_vote_2"),
    WV => ("West Virginia", "wv_vote_1", "wv_vote_2"),
    WI => ("Wisconsin", "wi_vote_1", "wi_vote_2"),
    WY => ("Wyoming", "wy_vote_1", "wy_vote_2"),
}

/// Rejected state code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("state code is required")]
    Missing,
    #[error("unknown state code")]
    Unknown,
}

impl FromStr for State {
    type Err = StateError;

    /// Parse a state code, ignoring case and surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let code = value.trim();
        if code.is_empty() {
            return Err(StateError::Missing);
        }
        Self::ALL
            .into_iter()
            .find(|state| state.abbreviation().eq_ignore_ascii_case(code))
            .ok_or(StateError::Unknown)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl Serialize for State {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.abbreviation())
    }
}
