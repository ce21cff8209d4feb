use maud::{Markup, html};

use crate::model::Score;
use crate::model::utils::format_date_for_score_view;

#[must_use]
pub fn card(content: &Markup) -> Markup {
    html! {
        div class="card" {
            (content)
        }
    }
}

/// Shown instead of a step that cannot be rendered.
#[must_use]
pub fn render_step_fallback() -> Markup {
    html! {
        h1 { "Error" }
        p class="error" { "Something went wrong with this form. Please start again." }
    }
}

/// Wraps a form so that it posts back to `endpoint` and swaps the answer into the mount.
#[must_use]
pub fn wizard_form(endpoint: &str, mount: &str, content: &Markup) -> Markup {
    html! {
        form hx-post=(endpoint) hx-target=(format!("#{mount}")) hx-swap="innerHTML" {
            (content)
        }
    }
}

/// A single button posting `action`.
#[must_use]
pub fn action_button(endpoint: &str, mount: &str, action: &str, label: &str, enabled: bool) -> Markup {
    html! {
        button type="submit" name="action" value=(action)
            hx-post=(endpoint) hx-target=(format!("#{mount}")) hx-swap="innerHTML"
            disabled[!enabled] { (label) }
    }
}

#[must_use]
pub fn render_error(message: Option<String>) -> Markup {
    html! {
        @if let Some(message) = message {
            p class="error" { (message) }
        }
    }
}

#[must_use]
pub fn render_score_details(score: &Score) -> Markup {
    html! {
        dl {
            dt { "Date" }
            dd { (format_date_for_score_view(score.date)) }
            dt { "Round" }
            dd { (score.round) }
            dt { "Score" }
            dd { (score.score) }
            dt { "Handicap" }
            dd { (score.handicap) }
        }
    }
}

#[must_use]
pub fn render_best_handicap(best: Option<i32>) -> Markup {
    html! {
        h5 { "Best handicap total" }
        @match best {
            Some(total) => {
                p class="best-handicap" {
                    "Your best three scores give an aggregate handicap of "
                    strong { (total) }
                    "."
                }
            }
            None => {
                p class="best-handicap" { "You need at least three scores to receive a ranking." }
            }
        }
    }
}
