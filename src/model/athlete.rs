use serde::{Deserialize, Serialize};

use crate::model::utils::string_or_number;

/// A junior archer as the backend describes them.
///
/// `athlete-details` fills the membership fields; the verification queue adds `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub agb_no: String,
    pub name: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub division: String,
}
