use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use legalease::api::{configure_app, AppState};
use legalease::banner;
use legalease::config::{self, AppConfig};
use log::{error, info};
use std::path::Path;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    // The env file only fills in variables the environment leaves unset.
    let env_file = std::env::var("LEG_ENV_FILE").unwrap_or_else(|_| config::DEFAULT_ENV_FILE.to_string());
    let file_vars = config::read_env_file(Path::new(&env_file));
    let log_filter = config::env_or_file("RUST_LOG", &file_vars).unwrap_or_else(|| "info".to_string());

    env_logger::Builder::new().parse_filters(&log_filter).init();

    if file_vars.is_empty() {
        info!("No settings found in {}, using the process environment", env_file);
    } else {
        info!("Loaded {} settings from {}", file_vars.len(), env_file);
    }

    let app_config = AppConfig::from_env().map_err(|e| {
        error!("Failed to load app configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let bind = (app_config.host.clone(), app_config.port);
    info!(
        "Mode: {} | model: {} | static dir: {}",
        app_config.mode,
        app_config.gemini.model,
        app_config.static_dir.display()
    );

    let state = AppState::new(app_config);

    info!("Starting LegalEase AI server on http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_app(state.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
