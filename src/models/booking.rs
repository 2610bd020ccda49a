//! Booking model (public booking requests)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{
    enums::{BookingStatus, ServiceCode},
    media::{optional_text, required_text},
};
use crate::error::{AppError, AppResult};

/// Booking record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub service_type: ServiceCode,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time_slot: Option<String>,
    pub additional_info: Option<String>,
    pub status: BookingStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create booking request, as submitted by the public contact form
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBooking {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub service_type: Option<String>,
    /// Date (YYYY-MM-DD) or RFC 3339 timestamp
    pub preferred_date: Option<String>,
    pub preferred_time_slot: Option<String>,
    pub additional_info: Option<String>,
}

/// Validated booking, ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub service_type: ServiceCode,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time_slot: Option<String>,
    pub additional_info: Option<String>,
}

impl CreateBooking {
    pub fn validate(self) -> AppResult<NewBooking> {
        let missing = || AppError::Validation("Missing required fields".to_string());

        let name = required_text(self.name.as_deref()).ok_or_else(missing)?;
        let email = required_text(self.email.as_deref()).ok_or_else(missing)?;
        let phone = required_text(self.phone.as_deref()).ok_or_else(missing)?;
        let location = required_text(self.location.as_deref()).ok_or_else(missing)?;
        let service_type = required_text(self.service_type.as_deref())
            .ok_or_else(missing)?
            .parse::<ServiceCode>()
            .map_err(|_| AppError::Validation("Invalid service type".to_string()))?;

        let preferred_date = match optional_text(self.preferred_date) {
            Some(raw) => Some(
                parse_preferred_date(&raw)
                    .ok_or_else(|| AppError::Validation("Invalid preferred date".to_string()))?,
            ),
            None => None,
        };

        Ok(NewBooking {
            name,
            email,
            phone,
            location,
            service_type,
            preferred_date,
            preferred_time_slot: optional_text(self.preferred_time_slot),
            additional_info: optional_text(self.additional_info),
        })
    }
}

fn parse_preferred_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Update booking status request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatus {
    /// One of pending, confirmed, completed, cancelled
    pub status: Option<String>,
}

impl UpdateBookingStatus {
    pub fn validate(&self) -> AppResult<BookingStatus> {
        self.status
            .as_deref()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| AppError::Validation("Invalid status".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> CreateBooking {
        CreateBooking {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            phone: Some("+44 1234".into()),
            location: Some("Brighton".into()),
            service_type: Some("neon_tattoo".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_booking() {
        let booking = complete().validate().unwrap();
        assert_eq!(booking.service_type, ServiceCode::NeonTattoo);
        assert_eq!(booking.preferred_date, None);
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        let cases: [fn(&mut CreateBooking); 5] = [
            |b| b.name = None,
            |b| b.email = None,
            |b| b.phone = Some("  ".into()),
            |b| b.location = None,
            |b| b.service_type = Some(String::new()),
        ];

        for strip in cases {
            let mut booking = complete();
            strip(&mut booking);
            match booking.validate() {
                Err(AppError::Validation(msg)) => assert_eq!(msg, "Missing required fields"),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_service_code() {
        let mut booking = complete();
        booking.service_type = Some("laser_removal".into());
        assert!(matches!(booking.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_preferred_date_formats() {
        let mut booking = complete();
        booking.preferred_date = Some("2025-07-14".into());
        let parsed = booking.validate().unwrap();
        assert_eq!(parsed.preferred_date, NaiveDate::from_ymd_opt(2025, 7, 14));

        let mut booking = complete();
        booking.preferred_date = Some("2025-07-14T10:30:00.000Z".into());
        assert_eq!(
            booking.validate().unwrap().preferred_date,
            NaiveDate::from_ymd_opt(2025, 7, 14)
        );

        let mut booking = complete();
        booking.preferred_date = Some("next tuesday".into());
        assert!(booking.validate().is_err());

        let mut booking = complete();
        booking.preferred_date = Some("".into());
        assert_eq!(booking.validate().unwrap().preferred_date, None);
    }

    #[test]
    fn test_status_update_validation() {
        let update = UpdateBookingStatus { status: Some("completed".into()) };
        assert_eq!(update.validate().unwrap(), BookingStatus::Completed);

        let update = UpdateBookingStatus { status: Some("done".into()) };
        assert!(update.validate().is_err());

        let update = UpdateBookingStatus { status: None };
        assert!(update.validate().is_err());
    }
}
