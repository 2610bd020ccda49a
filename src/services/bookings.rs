//! Bookings service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        booking::{Booking, CreateBooking},
        enums::BookingStatus,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list().await
    }

    /// Validate and store a public booking request
    pub async fn create(&self, data: CreateBooking) -> AppResult<Booking> {
        let booking = data.validate()?;
        let created = self.repository.bookings.create(&booking).await?;
        tracing::info!("Booking {} created for {}", created.id, created.service_type);
        Ok(created)
    }

    pub async fn update_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking> {
        let booking = self.repository.bookings.update_status(id, status).await?;
        tracing::info!("Booking {} is now {}", id, status);
        Ok(booking)
    }
}
