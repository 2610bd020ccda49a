//! Gallery and previous-work showcases

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::gallery::{CreateMediaItem, GalleryItem, PreviousWork},
    repository::Repository,
};

#[derive(Clone)]
pub struct ShowcaseService {
    repository: Repository,
}

impl ShowcaseService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_gallery(&self) -> AppResult<Vec<GalleryItem>> {
        self.repository.gallery.list().await
    }

    pub async fn create_gallery_item(&self, data: CreateMediaItem) -> AppResult<GalleryItem> {
        let item = data.validate_gallery()?;
        self.repository.gallery.create(&item).await
    }

    pub async fn delete_gallery_item(&self, id: Uuid) -> AppResult<()> {
        self.repository.gallery.delete(id).await
    }

    pub async fn list_previous_work(&self) -> AppResult<Vec<PreviousWork>> {
        self.repository.previous_work.list().await
    }

    pub async fn create_previous_work(&self, data: CreateMediaItem) -> AppResult<PreviousWork> {
        let item = data.validate_previous_work()?;
        let created = self.repository.previous_work.create(&item).await?;
        tracing::info!("Previous work item created: {}", created.id);
        Ok(created)
    }

    pub async fn delete_previous_work(&self, id: Uuid) -> AppResult<()> {
        self.repository.previous_work.delete(id).await
    }
}
