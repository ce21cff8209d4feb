use maud::{Markup, html};

use crate::HTMX_PATH;

pub const SUBMISSION_TITLE: &str = "Junior Rankings";
pub const VERIFY_TITLE: &str = "Verify submitted scores";

/// Page chrome around one wizard. `mount` is `None` when that wizard is switched off, in which
/// case the container is left out and nothing gets initialised.
#[must_use]
pub fn render_index_template(title: &str, mount: Option<&str>, fragment_path: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) {}
        }
        body {
            h1 { (title) }
            @if let Some(mount) = mount {
                div id=(mount) hx-get=(fragment_path) hx-trigger="load" hx-swap="innerHTML" {
                    img alt="Loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
                }
            } @else {
                p { "This form is not available at the moment." }
            }
        }
    }
}
