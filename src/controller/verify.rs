use std::collections::HashMap;

use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse};

use crate::args::CleanArgs;
use crate::controller::api::Backend;
use crate::controller::session::{SessionStore, fragment_response};
use crate::error::AppError;
use crate::mvu::runtime::{self, Deps};
use crate::mvu::verify::{Msg, decode_action};
use crate::view::index::{VERIFY_TITLE, render_index_template};
use crate::view::verify::{VERIFY_ENDPOINT, render_verify};

fn mount(config: &CleanArgs) -> Result<&str, AppError> {
    config
        .verify_mount
        .as_deref()
        .ok_or(AppError::NotMounted("verification flow"))
}

pub async fn verify_page(config: Data<CleanArgs>) -> HttpResponse {
    let markup =
        render_index_template(VERIFY_TITLE, config.verify_mount.as_deref(), VERIFY_ENDPOINT);
    HttpResponse::Ok().content_type("text/html").body(markup.into_string())
}

/// # Errors
///
/// `AppError::NotMounted` when the verification flow is switched off.
pub async fn verify_fragment(
    req: HttpRequest,
    config: Data<CleanArgs>,
    store: Data<SessionStore>,
    backend: Data<dyn Backend>,
) -> Result<HttpResponse, AppError> {
    apply(&req, &config, &store, backend.get_ref(), Msg::Show).await
}

/// # Errors
///
/// `AppError::NotMounted` when the verification flow is switched off, `AppError::Decode` for
/// an action it does not know.
pub async fn verify_action(
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
    runtime::run(&mut session.verify, msg, deps).await;
    let scroll = session.verify.take_scroll_to_top();
    let markup = render_verify(&session.verify, mount);
    Ok(fragment_response(markup, scroll, is_new.then_some(id)))
}
