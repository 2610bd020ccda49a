//! Previous work repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::gallery::{NewMediaItem, PreviousWork},
};

#[derive(Clone)]
pub struct PreviousWorkRepository {
    pool: Pool<Postgres>,
}

impl PreviousWorkRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List previous work, newest first
    pub async fn list(&self) -> AppResult<Vec<PreviousWork>> {
        let rows = sqlx::query_as::<_, PreviousWork>(
            "SELECT * FROM previous_work ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a previous work item
    pub async fn create(&self, data: &NewMediaItem) -> AppResult<PreviousWork> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, PreviousWork>(
            r#"
            INSERT INTO previous_work (
                id, title, description, media_urls, media_type, service_type,
                is_featured, event_type, location, event_date, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
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
        .bind(&data.event_date)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a previous work item
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM previous_work WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Item not found".to_string()));
        }
        Ok(())
    }
}
