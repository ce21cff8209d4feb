use async_trait::async_trait;

use crate::controller::api::endpoints::{self, params};
use crate::mvu::runtime::{Deps, Program};
use crate::mvu::submission::{Effect, Msg, SubmissionModel, update};

pub async fn run_effect(effect: Effect, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::LoadAthleteDetails { agb_no } => {
            let result = deps
                .backend
                .get(endpoints::ATHLETE_DETAILS, &params(&[("agb_number", agb_no.as_str())]))
                .await;
            Msg::AthleteDetailsLoaded { agb_no, result }
        }
        Effect::LoadAthleteScores { agb_no } => Msg::AthleteScoresLoaded(
            deps.backend
                .get(endpoints::ATHLETE_SCORES, &params(&[("agb_number", agb_no.as_str())]))
                .await,
        ),
        Effect::LoadAvailableEvents { agb_no } => Msg::EventsLoaded(
            deps.backend
                .get(endpoints::AVAILABLE_EVENTS, &params(&[("agb_number", agb_no.as_str())]))
                .await,
        ),
        Effect::ComputeHandicap { round, score } => {
            let result = deps
                .backend
                .get(
                    endpoints::HANDICAP,
                    &params(&[("round", round.as_str()), ("score", score.to_string().as_str())]),
                )
                .await;
            Msg::HandicapComputed {
                round,
                score,
                result,
            }
        }
        Effect::SubmitScores(req) => {
            tracing::info!(agb_no = %req.agb_no, count = req.scores.len(), "submitting scores");
            Msg::ScoresSubmitted(deps.post(endpoints::SUBMIT, &req).await)
        }
        Effect::SendContact(req) => Msg::ContactSent(deps.post(endpoints::CONTACT, &req).await),
    }
}

#[async_trait]
impl Program for SubmissionModel {
    type Msg = Msg;
    type Effect = Effect;

    fn update(&mut self, msg: Msg) -> Vec<Effect> {
        update(self, msg)
    }

    async fn run_effect(&self, effect: Effect, deps: Deps<'_>) -> Msg {
        run_effect(effect, deps).await
    }
}

