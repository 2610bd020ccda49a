//! Admin accounts repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{error::AppResult, models::admin::Admin};

#[derive(Clone)]
pub struct AdminsRepository {
    pool: Pool<Postgres>,
}

impl AdminsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get admin by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(admin)
    }

    /// Get admin by email (case-insensitive)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT * FROM admins WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(admin)
    }

    /// Insert an admin or replace the password hash of an existing one
    pub async fn upsert(&self, email: &str, password_hash: &str) -> AppResult<Admin> {
        let row = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (id, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (email) DO UPDATE
            SET password_hash = EXCLUDED.password_hash, updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
