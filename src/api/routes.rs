// src/api/routes.rs
use actix_web::web;
use super::handlers;
use super::AppState;

fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check))
        .service(
            web::scope("/api")
                .route("/summarize", web::post().to(handlers::summarize))
        );
}

/// Registers shared state, the JSON body limits and all routes.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let limit = state.config.max_body_bytes;
        cfg.app_data(web::Data::new(state))
            .app_data(handlers::json_config(limit));
        configure_routes(cfg);
    }
}
