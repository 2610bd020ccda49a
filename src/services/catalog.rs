//! Studio services catalog

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::service::{CreateService, Service, UpdateService},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Service>> {
        self.repository.services.list().await
    }

    pub async fn create(&self, data: CreateService) -> AppResult<Service> {
        let service = data.validate()?;
        let service = self.repository.services.create(&service).await?;
        tracing::info!("Created service {} ({})", service.id, service.name);
        Ok(service)
    }

    /// Apply a partial update
    pub async fn update(&self, id: Uuid, data: UpdateService) -> AppResult<Service> {
        let data = data.validate()?;
        if data.is_empty() {
            tracing::debug!("Empty update for service {}, refreshing timestamp only", id);
        }
        self.repository.services.update(id, &data).await
    }

    pub async fn toggle_active(&self, id: Uuid) -> AppResult<Service> {
        let service = self.repository.services.toggle_active(id).await?;
        tracing::info!("Service {} active = {}", id, service.is_active);
        Ok(service)
    }
}
