//! Bookings repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, NewBooking},
        enums::BookingStatus,
    },
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List bookings, newest first
    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a booking; new bookings always start as pending
    pub async fn create(&self, data: &NewBooking) -> AppResult<Booking> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                id, name, email, phone, location, service_type,
                preferred_date, preferred_time_slot, additional_info,
                status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.location)
        .bind(data.service_type)
        .bind(data.preferred_date)
        .bind(&data.preferred_time_slot)
        .bind(&data.additional_info)
        .bind(BookingStatus::Pending)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Set the status of a booking
    pub async fn update_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }
}
