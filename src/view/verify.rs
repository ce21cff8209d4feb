use maud::{Markup, html};

use crate::controller::api::ApiError;
use crate::model::Score;
use crate::mvu::verify::{Review, VerifyModel};
use crate::view::layout::{action_button, card, render_error, render_score_details, wizard_form};

pub const VERIFY_ENDPOINT: &str = "verify-flow";

fn render_score_row(review: &Review, score: &Score, mount: &str) -> Markup {
    let decision = score.id.as_ref().and_then(|id| review.decisions.get(id)).copied();
    let id = score.id.clone().unwrap_or_default();
    let accept_class = if decision == Some(true) { "small active" } else { "small" };
    let reject_class = if decision == Some(false) { "small active" } else { "small" };
    html! {
        h5 {
            (score.event) " "
            @if score.verified {
                button class="small" disabled { "Verified" }
            }
        }
        @if !score.verified {
            (wizard_form(VERIFY_ENDPOINT, mount, &html! {
                input type="hidden" name="score_id" value=(id);
                button type="submit" name="action" value="accept" class=(accept_class)
                    disabled[review.saved] { "Accept" }
                " "
                button type="submit" name="action" value="reject" class=(reject_class)
                    disabled[review.saved] { "Reject" }
            }))
        }
        (render_score_details(score))
    }
}

/// The administrator's view of one athlete's submission.
#[must_use]
pub fn render_score_checker(review: &Review, mount: &str) -> Markup {
    let all_scores = review.all_scores();
    html! {
        h4 { (review.athlete.name) }
        dl {
            dt { "Gender" } dd { (review.athlete.gender) }
            dt { "Class" } dd { (review.athlete.age) }
            dt { "Division" } dd { (review.athlete.division) }
            dt { "Checked scores" } dd { (review.scores.len()) }
            dt { "Submitted scores" } dd { (review.new_scores.len()) }
        }
        @if !all_scores.is_empty() {
            h5 { "Scores" }
            @for score in &all_scores {
                (render_score_row(review, score, mount))
            }
        }
        @if review.saved {
            button type="submit" disabled { "Saved" }
        } @else if review.ready_to_save() {
            (action_button(VERIFY_ENDPOINT, mount, "save", "Save scores", true))
        }
    }
}

#[must_use]
pub fn render_verify(model: &VerifyModel, mount: &str) -> Markup {
    let load_error = |e: &Option<ApiError>| e.as_ref().map(ToString::to_string);
    card(&html! {
        h3 { "Verify submitted scores" }
        p { "Administrator flow to verify or reject scores submitted by athletes." }
        (render_error(load_error(&model.queue_load.error)))
        (render_error(load_error(&model.athlete_load.error)))
        (render_error(load_error(&model.save.error)))
        @if model.queue.is_none() {
            (action_button(VERIFY_ENDPOINT, mount, "start", "Start", !model.queue_load.loading))
        }
        @if let Some(review) = &model.current {
            (render_score_checker(review, mount))
        }
        @if let Some(queue) = &model.queue {
            @if queue.is_empty() {
                p { "There are no submissions waiting to be verified." }
            } @else {
                h4 { "Progress: " (model.remaining) " submissions to verify" }
                @if let Some(next) = &model.next {
                    (action_button(
                        VERIFY_ENDPOINT,
                        mount,
                        "next",
                        &format!("Next: {}", next.name),
                        !model.athlete_load.loading
                    ))
                } @else if model.remaining == 0 {
                    p { "All submissions have been verified." }
                }
            }
        }
    })
}
