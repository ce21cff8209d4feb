use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::utils::{lenient_date, string_or_number};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub codename: String,
    pub name: String,
}

/// A competition an athlete may add a score from, with the rounds they were eligible to shoot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "string_or_number")]
    pub identifier: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl Event {
    #[must_use]
    pub fn round(&self, codename: &str) -> Option<&Round> {
        self.rounds.iter().find(|r| r.codename == codename)
    }
}

#[must_use]
pub fn find_event<'a>(events: &'a [Event], identifier: &str) -> Option<&'a Event> {
    events.iter().find(|e| e.identifier == identifier)
}
