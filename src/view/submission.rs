use maud::{Markup, html};

use crate::controller::api::LoadData;
use crate::model::{Athlete, Event, ScoreList};
use crate::mvu::submission::{StepProps, SubmissionModel, SubmissionStep};
use crate::view::layout::{
    action_button, card, render_best_handicap, render_error, render_score_details,
    render_step_fallback, wizard_form,
};

pub const SUBMISSION_ENDPOINT: &str = "submission";

const HELP_TEXT: &str = "Something not quite right? Please contact us.";

#[must_use]
pub fn not_found_message(agb_no: &str) -> String {
    format!("Sorry, we cannot find a junior archer for the membership number {agb_no}.")
}

/// Renders whatever step the wizard is on, inside the card.
#[must_use]
pub fn render_submission(model: &SubmissionModel, mount: &str) -> Markup {
    let step = model.wizard.current(&SubmissionStep::ALL).copied();
    let props = step.and_then(|s| {
        let props = model.wizard.params().project(s);
        if props.is_none() {
            tracing::error!(step = ?s, "step entered without the parameters it needs");
        }
        props
    });

    let body = match props {
        None => render_step_fallback(),
        Some(StepProps::Intro) => render_intro(model, mount),
        Some(StepProps::DetailsCheck { agb_no, athlete }) => {
            render_details_check(model, agb_no, athlete, mount)
        }
        Some(StepProps::AutoScoreReview { scores }) => render_auto_review(model, scores, mount),
        Some(StepProps::ManualScoreEntry { scores, events }) => {
            render_manual_entry(model, scores, events, mount)
        }
        Some(StepProps::Outro) => render_outro(mount),
        Some(StepProps::Contact) => render_contact(model, mount),
    };

    card(&html! {
        (body)
        @if step != Some(SubmissionStep::Contact) {
            p class="contact-link" {
                (action_button(SUBMISSION_ENDPOINT, mount, "contact", "Contact us", true))
            }
        }
    })
}

fn loader_error(load: &LoadData) -> Option<String> {
    load.error.as_ref().map(ToString::to_string)
}

fn render_help(mount: &str) -> Markup {
    html! {
        p class="help" {
            (HELP_TEXT) " "
            (action_button(SUBMISSION_ENDPOINT, mount, "contact", "Contact us", true))
        }
    }
}

fn render_intro(model: &SubmissionModel, mount: &str) -> Markup {
    let error = match &model.intro.not_found {
        Some(agb_no) => Some(not_found_message(agb_no)),
        None => loader_error(&model.loads.details),
    };
    html! {
        p {
            "We are currently in the score submission phase. Please enter your Archery GB number below to start checking your scores."
        }
        (render_error(error))
        (wizard_form(SUBMISSION_ENDPOINT, mount, &html! {
            input type="number" class="standout" name="agb_number" placeholder="Archery GB Number"
                value=(model.intro.agb_no) required;
            button type="submit" name="action" value="start" disabled[model.loads.details.loading] { "Start" }
        }))
    }
}

fn render_details_check(
    model: &SubmissionModel,
    agb_no: &str,
    athlete: &Athlete,
    mount: &str,
) -> Markup {
    html! {
        h4 { "Step 1: Check your details" }
        dl {
            dt { "Archery GB Number" }
            dd { (agb_no) }
            dt { "Name" }
            dd { (athlete.name) }
            dt { "Year of Birth" }
            dd {
                @if let Some(year) = athlete.year { (year) }
            }
            dt { "Gender" }
            dd { (athlete.gender) }
            dt { "Age class" }
            dd { (athlete.age) }
            dt { "Division" }
            dd { (athlete.division) }
        }
        (render_help(mount))
        (render_error(loader_error(&model.loads.scores)))
        (action_button(SUBMISSION_ENDPOINT, mount, "confirm-details", "Confirm", !model.loads.scores.loading))
    }
}

fn render_score_list(scores: &ScoreList, mount: &str) -> Markup {
    html! {
        @for score in scores.scores() {
            hr;
            h5 { (score.event) }
            (render_score_details(score))
            @if let Some(temp_id) = score.removable_id() {
                (wizard_form(SUBMISSION_ENDPOINT, mount, &html! {
                    input type="hidden" name="temp_id" value=(temp_id);
                    button type="submit" class="small" name="action" value="remove-score" { "Remove" }
                }))
            }
        }
        hr;
        (render_best_handicap(scores.best_handicap()))
    }
}

fn render_auto_review(model: &SubmissionModel, scores: &ScoreList, mount: &str) -> Markup {
    html! {
        h4 { "Step 2: Check scores automatically imported" }
        p {
            "We have automatically included scores from a range of competitions for which we received digital data. "
            "If your best scores are already included, you don't need to do anything. "
            "If you have better scores from another event, you can submit them on the next page."
        }
        @if scores.is_empty() {
            hr;
            p { "We have not found any scores for you yet." }
        }
        (render_score_list(scores, mount))
        (render_help(mount))
        (render_error(loader_error(&model.loads.events)))
        (action_button(SUBMISSION_ENDPOINT, mount, "confirm-scores", "Confirm scores", model.can_confirm_scores()))
        (action_button(SUBMISSION_ENDPOINT, mount, "add-more", "Add more scores", !model.loads.events.loading))
    }
}

fn render_manual_entry(
    model: &SubmissionModel,
    scores: &ScoreList,
    events: &[Event],
    mount: &str,
) -> Markup {
    let target = format!("#{mount}");
    let selected = model.selected_event();
    html! {
        h4 { "Step 3: Add additional scores" }
        p {
            "Scores must have been shot during the current season at a World or UK Record status competition, "
            "and they must have been on a qualifying round for your age group and division."
        }
        hr;
        h4 { "Add a score" }
        label for="entry-event" { "Event" }
        select id="entry-event" name="event" hx-post=(SUBMISSION_ENDPOINT) hx-trigger="change"
            hx-target=(target) hx-vals=(r#"{"action": "select-event"}"#) {
            option value="" selected[selected.is_none()] { "Choose an event" }
            @for event in events {
                option value=(event.identifier) selected[selected.is_some_and(|e| e.identifier == event.identifier)] {
                    (event.name)
                }
            }
        }
        @if let Some(event) = selected {
            label for="entry-round" { "Round" }
            select id="entry-round" name="round" hx-post=(SUBMISSION_ENDPOINT) hx-trigger="change"
                hx-target=(target) hx-vals=(r#"{"action": "select-round"}"#) {
                option value="" selected[model.entry.round.is_none()] { "Choose a round" }
                @for round in &event.rounds {
                    option value=(round.codename) selected[model.entry.round.as_deref() == Some(round.codename.as_str())] {
                        (round.name)
                    }
                }
            }
        }
        @if model.entry.round.is_some() {
            label for="entry-score" { "Score" }
            input id="entry-score" type="text" inputmode="numeric" name="score" value=(model.entry.score) autofocus
                hx-post=(SUBMISSION_ENDPOINT) hx-trigger="keyup changed delay:300ms"
                hx-target=(target) hx-vals=(r#"{"action": "score"}"#);
            label { "Handicap" }
            p class="handicap" {
                @if let Some(handicap) = model.entry.handicap { (handicap) }
                @else if model.loads.handicap.loading { "…" }
            }
            (render_error(loader_error(&model.loads.handicap)))
        }
        (action_button(SUBMISSION_ENDPOINT, mount, "add-score", "Add score", model.can_add_score()))
        hr;
        h4 { "Scores so far" }
        (render_score_list(scores, mount))
        (render_help(mount))
        (render_error(loader_error(&model.loads.submit)))
        (action_button(
            SUBMISSION_ENDPOINT,
            mount,
            "confirm-scores",
            "Confirm scores",
            model.can_confirm_scores() && !model.loads.submit.loading
        ))
    }
}

fn render_outro(mount: &str) -> Markup {
    html! {
        h4 { "Thank you!" }
        p { "Your scores will be verified and the final rankings will be published in November." }
        (action_button(SUBMISSION_ENDPOINT, mount, "back-to-start", "Back to start", true))
    }
}

fn render_contact(model: &SubmissionModel, mount: &str) -> Markup {
    let form = &model.contact;
    html! {
        h4 { "Contact us" }
        @if form.sent {
            p { "Thank you for your message, we will get back to you as soon as we can." }
        } @else {
            p { "Tell us what is not quite right and we will look into it." }
            (render_error(form.invalid.clone().or_else(|| loader_error(&model.loads.contact))))
            (wizard_form(SUBMISSION_ENDPOINT, mount, &html! {
                label for="contact-email" { "Email" }
                input id="contact-email" type="email" name="email" value=(form.email) required;
                label for="contact-agb" { "Archery GB Number" }
                input id="contact-agb" type="number" name="agb_number" value=(form.agb_no);
                label for="contact-message" { "Message" }
                textarea id="contact-message" name="message" required { (form.message) }
                button type="submit" name="action" value="send-contact" disabled[model.loads.contact.loading] { "Send" }
            }))
        }
        (action_button(SUBMISSION_ENDPOINT, mount, "back-to-start", "Back to start", true))
    }
}
