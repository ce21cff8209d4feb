use std::sync::Arc;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use junior_rankings::args;
use junior_rankings::controller::api::{Backend, HttpBackend};
use junior_rankings::controller::routes;
use junior_rankings::controller::session::SessionStore;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(&args.api_base)?);
    let backend = Data::from(backend);
    let sessions = Data::new(SessionStore::new());
    let static_dir = args.static_dir.clone();
    let bind = args.bind.clone();

    tracing::info!(
        %bind,
        api_base = %args.api_base,
        submission = ?args.submission_mount,
        verify = ?args.verify_mount,
        "starting junior rankings forms"
    );

    let config = Data::new(args);
    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .app_data(sessions.clone())
            .app_data(backend.clone())
            .configure(routes::configure)
            .service(Files::new("/static", &static_dir))
    })
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}
