// src/api/handlers/index.rs
use actix_files::NamedFile;
use actix_web::{web, Result};
use log::warn;

use crate::api::AppState;

/// Serves the frontend entry document from the static directory.
pub async fn index(state: web::Data<AppState>) -> Result<NamedFile> {
    let path = state.config.static_dir.join("index.html");
    NamedFile::open_async(&path).await.map_err(|e| {
        warn!("Could not serve {}: {}", path.display(), e);
        e.into()
    })
}
