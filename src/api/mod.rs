// src/api/mod.rs
pub mod routes;
pub mod handlers;
pub mod state;

pub use routes::configure_app;
pub use state::AppState;
