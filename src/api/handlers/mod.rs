// src/api/handlers/mod.rs
mod health;
mod index;
mod summarize;

pub use health::health_check;
pub use index::index;
pub use summarize::{json_config, summarize};
