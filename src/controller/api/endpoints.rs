use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::Params;
use super::error::ApiError;
use crate::model::score::SubmitScore;
use crate::model::utils::whole_number;
use crate::model::{Athlete, Event, Score};

pub const ATHLETE_DETAILS: &str = "athlete-details";
pub const ATHLETE_SCORES: &str = "athlete-scores";
pub const AVAILABLE_EVENTS: &str = "available-events";
pub const HANDICAP: &str = "handicap";
pub const SCORES_TO_VERIFY: &str = "scores-to-verify";
pub const SUBMISSION_DETAILS: &str = "submission-details";
pub const SUBMIT: &str = "submit";
pub const VERIFY_SCORES: &str = "verify-scores";
pub const CONTACT: &str = "contact";

#[must_use]
pub fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// # Errors
///
/// Will return `Err` if the payload does not have the expected shape
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(ApiError::from)
}

#[derive(Debug, Clone, Deserialize)]
pub struct AthleteScores {
    pub scores: Vec<Score>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailableEvents {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HandicapResult {
    #[serde(deserialize_with = "whole_number")]
    pub handicap: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoresToVerify {
    pub to_verify: Vec<Athlete>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDetails {
    #[serde(default)]
    pub scores: Vec<Score>,
    #[serde(default)]
    pub new_scores: Vec<Score>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub agb_no: String,
    pub scores: Vec<SubmitScore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub id: String,
    pub accept: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub scores: Vec<Decision>,
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub email: String,
    pub agb_no: String,
    pub message: String,
}
