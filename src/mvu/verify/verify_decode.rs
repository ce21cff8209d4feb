use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::AppError;
use crate::mvu::verify::Msg;

/// Turn a posted verification action into a `Msg`.
///
/// # Errors
///
/// Returns `AppError::Decode` for unknown actions or a decision without a score id.
pub fn decode_action<S: BuildHasher>(form: &HashMap<String, String, S>) -> Result<Msg, AppError> {
    let action = form
        .get("action")
        .map(|s| s.trim())
        .ok_or_else(|| AppError::Decode("action parameter is required".into()))?;

    let score_id = || {
        form.get("score_id")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Decode("score_id parameter is required".into()))
    };

    Ok(match action {
        "show" => Msg::Show,
        "start" => Msg::Start,
        "next" => Msg::LoadNext,
        "accept" => Msg::Decide {
            score_id: score_id()?,
            accept: true,
        },
        "reject" => Msg::Decide {
            score_id: score_id()?,
            accept: false,
        },
        "save" => Msg::Save,
        other => return Err(AppError::Decode(format!("unknown action '{other}'"))),
    })
}
