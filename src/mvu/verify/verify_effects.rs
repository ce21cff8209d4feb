use async_trait::async_trait;

use crate::controller::api::endpoints::{self, params};
use crate::mvu::runtime::{Deps, Program};
use crate::mvu::verify::{Effect, Msg, VerifyModel, update};

pub async fn run_effect(effect: Effect, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::LoadQueue => Msg::QueueLoaded(
            deps.backend
                .get(endpoints::SCORES_TO_VERIFY, &Vec::new())
                .await,
        ),
        Effect::LoadSubmission { athlete_id } => {
            let result = deps
                .backend
                .get(
                    endpoints::SUBMISSION_DETAILS,
                    &params(&[("id", athlete_id.to_string().as_str())]),
                )
                .await;
            Msg::SubmissionLoaded { athlete_id, result }
        }
        Effect::SaveDecisions(req) => {
            tracing::info!(athlete_id = req.id, decisions = req.scores.len(), "saving decisions");
            Msg::Saved(deps.post(endpoints::VERIFY_SCORES, &req).await)
        }
    }
}

#[async_trait]
impl Program for VerifyModel {
    type Msg = Msg;
    type Effect = Effect;

    fn update(&mut self, msg: Msg) -> Vec<Effect> {
        update(self, msg)
    }

    async fn run_effect(&self, effect: Effect, deps: Deps<'_>) -> Msg {
        run_effect(effect, deps).await
    }
}
