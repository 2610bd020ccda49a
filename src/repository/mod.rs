//! Repository layer for database operations

pub mod admins;
pub mod bookings;
pub mod gallery;
pub mod previous_work;
pub mod services;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub admins: admins::AdminsRepository,
    pub bookings: bookings::BookingsRepository,
    pub services: services::ServicesRepository,
    pub gallery: gallery::GalleryRepository,
    pub previous_work: previous_work::PreviousWorkRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            admins: admins::AdminsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            services: services::ServicesRepository::new(pool.clone()),
            gallery: gallery::GalleryRepository::new(pool.clone()),
            previous_work: previous_work::PreviousWorkRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database, used by the readiness probe
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
