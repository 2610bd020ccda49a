//! Data models for the studio

pub mod admin;
pub mod booking;
pub mod enums;
pub mod gallery;
pub mod media;
pub mod service;

// Re-export commonly used types
pub use admin::{AccessPolicy, Admin, AdminInfo, Identity, Role};
pub use booking::Booking;
pub use enums::{BookingStatus, MediaType, ServiceCode};
pub use gallery::{GalleryItem, PreviousWork};
pub use service::Service;
