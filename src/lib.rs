//! Studio server
//!
//! REST JSON API behind the body-art studio website: public booking
//! requests, the services catalog, gallery and previous-work showcases, and
//! token-based admin authentication.

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use routes::create_router;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire repositories and services on top of a connection pool
    pub fn new(config: AppConfig, pool: Pool<Postgres>) -> Self {
        let repository = repository::Repository::new(pool);
        let services = services::Services::new(repository, &config.auth);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
