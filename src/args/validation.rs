use regex::Regex;
use std::path::PathBuf;

use super::types::Args;

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_absolute_url(value: &str) -> Result<String, String> {
    let url = reqwest::Url::parse(value.trim())
        .map_err(|e| format!("The api base url '{value}' is not valid: {e}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("The api base url '{value}' must be http or https."));
    }
    Ok(value.trim().to_string())
}

/// Mount ids end up in `id` attributes and `#id` selectors, so keep them plain.
///
/// # Errors
///
/// Will return `Err` if the id would not work as an html id and css selector
pub fn check_mount_id(value: &str) -> Result<String, String> {
    let re = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").map_err(|e| e.to_string())?;
    if re.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(format!(
            "The mount id '{value}' must start with a letter and contain only letters, digits, '-' or '_'."
        ))
    }
}

/// # Errors
///
/// Will return `Err` if the directory does not exist
pub fn check_readable_dir(value: &str) -> Result<String, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(value.to_string())
    } else {
        Err(format!("The static directory '{value}' is not readable."))
    }
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the options contradict each other
    pub fn validate(&self) -> Result<(), String> {
        if self.no_submission && self.no_verify {
            return Err("Nothing to serve: both --no-submission and --no-verify were given.".into());
        }
        if !self.no_submission && !self.no_verify && self.submission_mount == self.verify_mount {
            return Err("The submission and verify mounts need different ids.".to_string());
        }
        if self.csrf_token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err("--csrf-token must not be empty.".to_string());
        }
        Ok(())
    }
}
