use actix_web::{HttpResponse, web};

use crate::controller::submission::{submission_action, submission_fragment, submission_page};
use crate::controller::verify::{verify_action, verify_fragment, verify_page};

/// Every route except `/static`, which depends on where the stylesheet lives.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(submission_page))
        .route("/verify", web::get().to(verify_page))
        .route("/submission", web::get().to(submission_fragment))
        .route("/submission", web::post().to(submission_action))
        .route("/verify-flow", web::get().to(verify_fragment))
        .route("/verify-flow", web::post().to(verify_action))
        .route("/health", web::get().to(HttpResponse::Ok));
}
