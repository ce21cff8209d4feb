use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse};

use crate::args::CleanArgs;
use crate::controller::api::Backend;
use crate::controller::session::{SessionStore, fragment_response};
use crate::error::AppError;
use crate::mvu::runtime::{self, Deps};
use crate::mvu::submission::{Msg, decode_action};
use crate::view::index::{SUBMISSION_TITLE, render_index_template};
use crate::view::submission::{SUBMISSION_ENDPOINT, render_submission};

fn mount(config: &CleanArgs) -> Result<&str, AppError> {
    config
        .submission_mount
        .as_deref()
        .ok_or(AppError::NotMounted("score submission form"))
}

pub async fn submission_page(config: Data<CleanArgs>) -> HttpResponse {
    let markup = render_index_template(
        SUBMISSION_TITLE,
        config.submission_mount.as_deref(),
        SUBMISSION_ENDPOINT,
    );
    HttpResponse::Ok().content_type("text/html").body(markup.into_string())
}

/// The current step, as the mount container asks for it on load.
///
/// # Errors
///
/// `AppError::NotMounted` when the submission form is switched off.
pub async fn submission_fragment(
    req: HttpRequest,
    config: Data<CleanArgs>,
    store: Data<SessionStore>,
    backend: Data<dyn Backend>,
) -> Result<HttpResponse, AppError> {
    apply(&req, &config, &store, backend.get_ref(), Msg::Show).await
}

/// Applies one posted action and answers with the step it leads to.
///
/// # Errors
///
/// `AppError::NotMounted` when the submission form is switched off, `AppError::Decode` when
/// the action cannot be understood.
pub async fn submission_action(
    req: HttpRequest,
    form: web::Form<HashMap<String, String>>,
    config: Data<CleanArgs>,
    store: Data<SessionStore>,
    backend: Data<dyn Backend>,
) -> Result<HttpResponse, AppError> {
    mount(&config)?;
    let msg = decode_action(&form.into_inner())?;
    apply(&req, &config, &store, backend.get_ref(), msg).await
}

async fn apply(
    req: &HttpRequest,
    config: &CleanArgs,
    store: &SessionStore,
    backend: &dyn Backend,
    msg: Msg,
) -> Result<HttpResponse, AppError> {
    let mount = mount(config)?;
    let (id, session, is_new) = store.resolve(req);
    let csrf = config.csrf.token(req);
    let deps = Deps {
        backend,
        csrf: csrf.as_deref(),
    };

    let mut session = session.lock().await;
    runtime::run(&mut session.submission, msg, deps).await;
    let scroll = session.submission.wizard.take_scroll_to_top();
    let markup = render_submission(&session.submission, mount);
    Ok(fragment_response(markup, scroll, is_new.then_some(id)))
}
