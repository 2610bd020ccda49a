//! Services repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::service::{NewService, Service, UpdateService},
};

#[derive(Clone)]
pub struct ServicesRepository {
    pool: Pool<Postgres>,
}

impl ServicesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all services, oldest first
    pub async fn list(&self) -> AppResult<Vec<Service>> {
        let rows = sqlx::query_as::<_, Service>(
            "SELECT * FROM services ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a service
    pub async fn create(&self, data: &NewService) -> AppResult<Service> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (
                id, name, description, service_type, price_range,
                image_url, features, is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.service_type)
        .bind(&data.price_range)
        .bind(&data.image_url)
        .bind(&data.features)
        .bind(data.is_active)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update the fields present in `data`
    pub async fn update(&self, id: Uuid, data: &UpdateService) -> AppResult<Service> {
        let mut sets = vec!["updated_at = $2".to_string()];
        let mut idx = 3;

        macro_rules! add_f {
            ($field:expr, $name:expr) => {
                if $field.is_some() { sets.push(format!("{} = ${}", $name, idx)); idx += 1; }
            };
        }

        add_f!(data.name, "name");
        add_f!(data.description, "description");
        add_f!(data.price_range, "price_range");
        add_f!(data.image_url, "image_url");
        add_f!(data.features, "features");
        add_f!(data.is_active, "is_active");

        let query = format!("UPDATE services SET {} WHERE id = $1 RETURNING *", sets.join(", "));

        let mut builder = sqlx::query_as::<_, Service>(&query).bind(id).bind(Utc::now());

        macro_rules! bind_f {
            ($field:expr) => {
                if let Some(ref val) = $field { builder = builder.bind(val); }
            };
        }

        bind_f!(data.name);
        bind_f!(data.description);
        bind_f!(data.price_range);
        bind_f!(data.image_url);
        bind_f!(data.features);
        bind_f!(data.is_active);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    /// Flip `is_active` in a single statement
    pub async fn toggle_active(&self, id: Uuid) -> AppResult<Service> {
        sqlx::query_as::<_, Service>(
            "UPDATE services SET is_active = NOT is_active, updated_at = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }
}
