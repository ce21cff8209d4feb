use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use actix_web::{HttpRequest, HttpResponse};
use actix_web::cookie::{Cookie, SameSite};
use maud::Markup;
use tokio::sync::Mutex as AsyncMutex;
use uuid::Uuid;

use crate::mvu::submission::SubmissionModel;
use crate::mvu::verify::VerifyModel;

pub const SESSION_COOKIE: &str = "jr_session";
pub const HX_RESWAP: &str = "HX-Reswap";

/// Sessions untouched for this long are dropped on the next lookup.
const IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

/// Both wizards' state for one browser.
#[derive(Debug, Default)]
pub struct Session {
    pub submission: SubmissionModel,
    pub verify: VerifyModel,
}

pub type SharedSession = Arc<AsyncMutex<Session>>;

struct Entry {
    session: SharedSession,
    last_seen: Instant,
}

/// In-memory sessions keyed by the cookie value.
///
/// Each session sits behind its own async mutex, so actions from one browser are handled one
/// at a time (including their backend round trips) while other browsers are not held up.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Entry>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The session named by the request's cookie, or a fresh one. The flag is `true` when the
    /// session was just created and the cookie still has to be set.
    pub fn resolve(&self, req: &HttpRequest) -> (Uuid, SharedSession, bool) {
        let requested = req
            .cookie(SESSION_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok());

        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < IDLE_TIMEOUT);
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::debug!(purged, "dropped idle sessions");
        }

        if let Some(id) = requested {
            if let Some(entry) = sessions.get_mut(&id) {
                entry.last_seen = now;
                return (id, Arc::clone(&entry.session), false);
            }
        }

        let id = Uuid::new_v4();
        let session = SharedSession::default();
        sessions.insert(
            id,
            Entry {
                session: Arc::clone(&session),
                last_seen: now,
            },
        );
        tracing::debug!(%id, "new session");
        (id, session, true)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[must_use]
pub fn session_cookie(id: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// htmx fragment answer. A step transition asks htmx to bring the top of the page into view.
#[must_use]
pub fn fragment_response(markup: Markup, scroll_to_top: bool, new_session: Option<Uuid>) -> HttpResponse {
    let mut response = HttpResponse::Ok();
    response.content_type("text/html");
    if scroll_to_top {
        response.insert_header((HX_RESWAP, "innerHTML show:window:top"));
    }
    if let Some(id) = new_session {
        response.cookie(session_cookie(id));
    }
    response.body(markup.into_string())
}
