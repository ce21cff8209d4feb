use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::controller::api::endpoints::ContactRequest;
use crate::error::AppError;
use crate::mvu::submission::Msg;

fn field<S: BuildHasher>(form: &HashMap<String, String, S>, key: &str) -> String {
    form.get(key).cloned().unwrap_or_default()
}

/// Turn a posted submission-form action into a `Msg`.
///
/// # Errors
///
/// Returns `AppError::Decode` with a human-readable message for unknown actions or bad fields.
pub fn decode_action<S: BuildHasher>(form: &HashMap<String, String, S>) -> Result<Msg, AppError> {
    let action = form
        .get("action")
        .map(|s| s.trim())
        .ok_or_else(|| AppError::Decode("action parameter is required".into()))?;

    let msg = match action {
        "show" => Msg::Show,
        "start" => Msg::Start(field(form, "agb_number")),
        "confirm-details" => Msg::ConfirmDetails,
        "confirm-scores" => Msg::ConfirmScores,
        "add-more" => Msg::AddMoreScores,
        "select-event" => Msg::EventSelected(field(form, "event")),
        "select-round" => Msg::RoundSelected(field(form, "round")),
        "score" => Msg::ScoreChanged(field(form, "score")),
        "add-score" => Msg::AddScore,
        "remove-score" => {
            let temp_id = form
                .get("temp_id")
                .and_then(|s| s.trim().parse().ok())
                .ok_or_else(|| AppError::Decode("temp_id must be a number".into()))?;
            Msg::RemoveScore(temp_id)
        }
        "back-to-start" => Msg::BackToStart,
        "contact" => Msg::OpenContact,
        "send-contact" => Msg::SendContact(ContactRequest {
            email: field(form, "email").trim().to_string(),
            agb_no: field(form, "agb_number").trim().to_string(),
            message: field(form, "message"),
        }),
        other => return Err(AppError::Decode(format!("unknown action '{other}'"))),
    };
    Ok(msg)
}
