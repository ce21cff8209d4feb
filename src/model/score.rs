use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::event::{Event, Round};
use crate::model::utils::{lenient_date, optional_string_or_number, string_or_number, whole_number};

/// Temporary identifier handed to a locally-entered score, derived from a millisecond timestamp.
pub type TempId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub id: Option<String>,
    #[serde(skip)]
    pub temp_id: Option<TempId>,
    pub event: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub event_id: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    pub round: String,
    #[serde(default)]
    pub round_codename: String,
    pub score: u32,
    #[serde(deserialize_with = "whole_number")]
    pub handicap: i32,
    #[serde(default)]
    pub verified: bool,
}

impl Score {
    /// A score the athlete typed in; it only gains an id once the list assigns one.
    #[must_use]
    pub fn local(event: &Event, round: &Round, score: u32, handicap: i32) -> Self {
        Self {
            id: None,
            temp_id: None,
            event: event.name.clone(),
            event_id: event.identifier.clone(),
            date: event.date,
            round: round.name.clone(),
            round_codename: round.codename.clone(),
            score,
            handicap,
            verified: false,
        }
    }

    /// Only scores typed in this session carry a temporary id, whether or not the backend sent
    /// ids for the imported ones.
    #[must_use]
    pub fn removable_id(&self) -> Option<TempId> {
        self.temp_id
    }

    #[must_use]
    pub fn is_unsaved(&self) -> bool {
        self.temp_id.is_some()
    }
}

/// One row of the `/api/submit/` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitScore {
    pub score: u32,
    pub round: String,
    pub event: String,
}

impl From<&Score> for SubmitScore {
    fn from(s: &Score) -> Self {
        Self {
            score: s.score,
            round: s.round_codename.clone(),
            event: s.event_id.clone(),
        }
    }
}
