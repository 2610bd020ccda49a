//! Business logic services

pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod showcase;
pub mod tokens;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub tokens: tokens::TokenService,
    pub bookings: bookings::BookingsService,
    pub catalog: catalog::CatalogService,
    pub showcase: showcase::ShowcaseService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: &AuthConfig) -> Self {
        let tokens = tokens::TokenService::new(auth_config);
        Self {
            auth: auth::AuthService::new(repository.clone(), tokens.clone()),
            tokens,
            bookings: bookings::BookingsService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            showcase: showcase::ShowcaseService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn ready(&self) -> crate::error::AppResult<()> {
        self.repository.ping().await
    }
}
