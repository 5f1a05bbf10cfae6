use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod error;
mod models;
mod notes;

use config::Config;
use notes::NoteStore;

pub struct AppState {
    /// The note collection, shared by every worker
    pub notes: Arc<NoteStore>,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

impl AppState {
    pub fn new(notes: Arc<NoteStore>) -> Self {
        Self {
            notes,
            started_at: std::time::Instant::now(),
        }
    }
}

/// Register every controller's routes
fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(controllers::root::config)
        .configure(controllers::health::config_routes)
        .configure(controllers::notes::config);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!("Notes backend v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Seeding notes from {:?}", config.seed);

    let seed = config.load_seed().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;
    let store = NoteStore::with_seed(seed).map_err(|e| {
        log::error!("Failed to seed notes: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;
    let store = Arc::new(store);

    let state = web::Data::new(AppState::new(Arc::clone(&store)));

    log::info!(
        "Starting server on {}:{} with {} notes",
        config.bind_address,
        config.port,
        store.len()
    );

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(configure_routes)
            .default_service(web::to(controllers::root::unknown_endpoint))
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run();

    let server_handle = server.handle();

    // Spawn Ctrl+C handler
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_notes_scenario_against_full_app() {
        let store = Arc::new(NoteStore::with_seed(notes::fixtures::fixture_notes().unwrap()).unwrap());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(store)))
                .configure(configure_routes)
                .default_service(web::to(controllers::root::unknown_endpoint)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "<h1>Hello World!</h1>");

        let req = test::TestRequest::get().uri("/api/notes").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 3);

        let req = test::TestRequest::post()
            .uri("/api/notes")
            .set_json(serde_json::json!({ "content": "We had a great experience with TDD" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["content"], "We had a great experience with TDD");

        let req = test::TestRequest::get().uri("/api/notes/2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["content"], "Browser can execute only Javascript");
        assert_eq!(body["date"], "2022-01-10T18:39:34.091Z");

        let req = test::TestRequest::delete().uri("/api/notes/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/notes").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 3);

        let req = test::TestRequest::get().uri("/api/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
