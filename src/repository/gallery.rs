//! Gallery repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::gallery::{GalleryItem, NewMediaItem},
};

#[derive(Clone)]
pub struct GalleryRepository {
    pool: Pool<Postgres>,
}

impl GalleryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List gallery items, newest first
    pub async fn list(&self) -> AppResult<Vec<GalleryItem>> {
        let rows = sqlx::query_as::<_, GalleryItem>(
            "SELECT * FROM gallery_items ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a gallery item
    pub async fn create(&self, data: &NewMediaItem) -> AppResult<GalleryItem> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, GalleryItem>(
            r#"
            INSERT INTO gallery_items (
                id, title, description, media_urls, media_type, service_type,
                is_featured, event_type, location, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.media_urls)
        .bind(data.media_type)
        .bind(&data.service_type)
        .bind(data.is_featured)
        .bind(&data.event_type)
        .bind(&data.location)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a gallery item
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Gallery item not found".to_string()));
        }
        Ok(())
    }
}
