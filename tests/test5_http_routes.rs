mod common;

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{App, test};
use scraper::{Html, Selector};
use serde_json::{Value, json};

use common::{FakeBackend, athlete_json, persisted_scores_json};
use junior_rankings::args::CleanArgs;
use junior_rankings::controller::api::{Backend, endpoints};
use junior_rankings::controller::routes;
use junior_rankings::controller::session::{SESSION_COOKIE, SessionStore};

fn fake() -> Arc<FakeBackend> {
    Arc::new(
        FakeBackend::new()
            .on_get(endpoints::ATHLETE_DETAILS, Ok(athlete_json()))
            .on_get(endpoints::ATHLETE_SCORES, Ok(persisted_scores_json()))
            .on_get(
                endpoints::SCORES_TO_VERIFY,
                Ok(json!({"toVerify": [{"id": 42, "name": "Sam Bowman"}]})),
            )
            .on_get(
                endpoints::SUBMISSION_DETAILS,
                Ok(json!({"scores": [], "newScores": [
                    {"id": "n1", "event": "Summer Shoot", "round": "Windsor", "score": 900, "handicap": 12}
                ]})),
            ),
    )
}

macro_rules! app {
    ($config:expr, $backend:expr) => {{
        let backend: Arc<dyn Backend> = $backend.clone();
        test::init_service(
            App::new()
                .app_data(Data::new($config))
                .app_data(Data::new(SessionStore::new()))
                .app_data(Data::from(backend))
                .configure(routes::configure),
        )
        .await
    }};
}

fn config() -> CleanArgs {
    CleanArgs::with_api_base("http://backend.invalid")
}

fn attr_of(html: &str, selector: &str, attr: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .filter_map(|e| e.value().attr(attr).map(str::to_string))
        .collect()
}

#[actix_web::test]
async fn test_pages_render_mount_containers() {
    let app = app!(config(), fake());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(
        attr_of(&body, "div#app-submission-form", "hx-get"),
        vec!["submission".to_string()]
    );
    assert_eq!(
        attr_of(&body, "div#app-submission-form", "hx-trigger"),
        vec!["load".to_string()]
    );

    let resp = test::call_service(&app, test::TestRequest::get().uri("/verify").to_request()).await;
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(
        attr_of(&body, "div#app-verify-flow", "hx-get"),
        vec!["verify-flow".to_string()]
    );

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_disabled_wizard_is_not_mounted() {
    let mut config = config();
    config.submission_mount = None;
    let app = app!(config, fake());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(attr_of(&body, "div#app-submission-form", "id").is_empty());

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/submission").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/submission")
        .set_form([("action", "show")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // the other wizard is unaffected
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/verify-flow").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_unknown_action_is_a_bad_request() {
    let app = app!(config(), fake());
    let req = test::TestRequest::post()
        .uri("/submission")
        .set_form([("action", "launch")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "unknown action 'launch'");
}

#[actix_web::test]
async fn test_submission_session_across_requests() {
    let backend = fake();
    let app = app!(config(), backend);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/submission").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie: Cookie<'static> = resp
        .response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
        .expect("a session cookie");
    assert!(resp.headers().get("HX-Reswap").is_none());
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(
        attr_of(&body, "form", "hx-post"),
        vec!["submission".to_string()]
    );
    assert_eq!(
        attr_of(&body, "form", "hx-target"),
        vec!["#app-submission-form".to_string()]
    );

    let req = test::TestRequest::post()
        .uri("/submission")
        .cookie(cookie.clone())
        .set_form([("action", "start"), ("agb_number", "1234567")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("HX-Reswap").and_then(|v| v.to_str().ok()),
        Some("innerHTML show:window:top")
    );
    assert!(resp.response().cookies().next().is_none());
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Robin Fletcher"));

    let req = test::TestRequest::post()
        .uri("/submission")
        .cookie(cookie)
        .set_form([("action", "confirm-details")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Step 2: Check scores automatically imported"));
    assert_eq!(backend.gets_to(endpoints::ATHLETE_SCORES).len(), 1);
}

#[actix_web::test]
async fn test_verify_save_forwards_csrf_cookie() {
    let backend = fake();
    let app = app!(config(), backend);
    let session = Cookie::new(SESSION_COOKIE, uuid::Uuid::new_v4().to_string());
    let csrf = Cookie::new("csrftoken", "browser-token");

    let mut session_cookie = session;
    for form in [
        vec![("action", "start")],
        vec![("action", "next")],
        vec![("action", "accept"), ("score_id", "n1")],
        vec![("action", "save")],
    ] {
        let req = test::TestRequest::post()
            .uri("/verify-flow")
            .cookie(session_cookie.clone())
            .cookie(csrf.clone())
            .set_form(form)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        if let Some(c) = resp.response().cookies().find(|c| c.name() == SESSION_COOKIE) {
            session_cookie = c.into_owned();
        }
    }

    let posts = backend.posts_to(endpoints::VERIFY_SCORES);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].0, json!({"scores": [{"id": "n1", "accept": true}], "id": 42}));
    assert_eq!(posts[0].1.as_deref(), Some("browser-token"));
}
