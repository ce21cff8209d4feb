use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Renders a date the way the score cards show it, e.g. `Sat Jun 14 2025`.
#[must_use]
pub fn format_date_for_score_view(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%a %b %d %Y").to_string(),
        None => "Unknown date".to_string(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

/// Membership numbers and ids arrive as strings or numbers depending on the endpoint.
///
/// # Errors
///
/// Returns `Err` if the value is neither a string nor a number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s,
        StringOrNumber::Int(i) => i.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    })
}

/// Handicaps are whole numbers, but the backend may serialize them as `37.0`.
///
/// # Errors
///
/// Returns `Err` if the value is not numeric.
#[allow(clippy::cast_possible_truncation)]
pub fn whole_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Int(i) => i32::try_from(i).map_err(serde::de::Error::custom),
        StringOrNumber::Float(f) => Ok(f.round() as i32),
        StringOrNumber::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Dates come back either as `2025-06-14` or as a full timestamp.
///
/// # Errors
///
/// Never fails on unparseable strings; they map to `None`.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let day = s.get(..10).unwrap_or(&s);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }))
}

/// Same as [`string_or_number`] for fields that may be absent or null.
///
/// # Errors
///
/// Returns `Err` if a present value is neither a string nor a number.
pub fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Int(i) => i.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }),
    )
}
