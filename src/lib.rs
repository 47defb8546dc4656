//! Bibliotheca book catalog server
//!
//! Serves the book collection over a REST JSON API: listing with an
//! optional free-text search and genre filter, each book returned with
//! its authors already attached.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
