//! Service model (the studio's offer, shown on the public services page)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::media::required_text;
use crate::error::{AppError, AppResult, IMAGE_TOO_LARGE};

/// Longest accepted inline (data URI) image, in characters of base64 text
pub const MAX_INLINE_IMAGE_LEN: usize = 4 * 1024 * 1024;

/// Service record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Free-form category; not restricted to the booking service codes
    pub service_type: String,
    pub price_range: String,
    /// Image URL or inline data URI
    pub image_url: String,
    pub features: Vec<String>,
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create service request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateService {
    pub name: Option<String>,
    pub description: Option<String>,
    pub service_type: Option<String>,
    pub price_range: Option<String>,
    pub image_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Validated service, ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub price_range: String,
    pub image_url: String,
    pub features: Vec<String>,
    pub is_active: bool,
}

impl CreateService {
    pub fn validate(self) -> AppResult<NewService> {
        let required = || AppError::Validation("Name and service type are required".to_string());

        let name = required_text(self.name.as_deref()).ok_or_else(required)?;
        let service_type = required_text(self.service_type.as_deref()).ok_or_else(required)?;
        let image_url = self.image_url.unwrap_or_default();
        check_inline_image(&image_url)?;

        Ok(NewService {
            name,
            description: self.description.unwrap_or_default(),
            service_type,
            price_range: self.price_range.unwrap_or_default(),
            image_url,
            features: self.features.unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

/// Partial service update; absent fields are left untouched
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateService {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_range: Option<String>,
    pub image_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl UpdateService {
    pub fn validate(mut self) -> AppResult<Self> {
        if let Some(name) = self.name.take() {
            let name = required_text(Some(&name))
                .ok_or_else(|| AppError::Validation("Name cannot be empty".to_string()))?;
            self.name = Some(name);
        }
        if let Some(image_url) = &self.image_url {
            check_inline_image(image_url)?;
        }
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price_range.is_none()
            && self.image_url.is_none()
            && self.features.is_none()
            && self.is_active.is_none()
    }
}

/// Reject oversized inline images before they reach the store
fn check_inline_image(image_url: &str) -> AppResult<()> {
    if image_url.starts_with("data:") && image_url.len() > MAX_INLINE_IMAGE_LEN {
        return Err(AppError::Validation(IMAGE_TOO_LARGE.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> CreateService {
        CreateService {
            name: Some("  UV Body Paint ".into()),
            service_type: Some("uv_body_paint".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let service = minimal().validate().unwrap();
        assert_eq!(service.name, "UV Body Paint");
        assert_eq!(service.description, "");
        assert_eq!(service.image_url, "");
        assert!(service.features.is_empty());
        assert!(service.is_active);
    }

    #[test]
    fn test_service_type_is_free_form() {
        let mut service = minimal();
        service.service_type = Some("henna".into());
        assert_eq!(service.validate().unwrap().service_type, "henna");
    }

    #[test]
    fn test_name_and_type_required() {
        let mut service = minimal();
        service.name = Some("   ".into());
        assert!(matches!(service.validate(), Err(AppError::Validation(_))));

        let mut service = minimal();
        service.service_type = None;
        assert!(matches!(service.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_inline_image_size_guard() {
        let mut service = minimal();
        let mut data_uri = String::from("data:image/png;base64,");
        data_uri.push_str(&"A".repeat(MAX_INLINE_IMAGE_LEN));
        service.image_url = Some(data_uri);
        match service.validate() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, IMAGE_TOO_LARGE),
            other => panic!("expected size rejection, got {other:?}"),
        }

        // Plain URLs are not subject to the guard
        let mut service = minimal();
        service.image_url = Some(format!("https://cdn.example.com/{}", "a".repeat(MAX_INLINE_IMAGE_LEN)));
        assert!(service.validate().is_ok());
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let update = UpdateService {
            name: Some(" ".into()),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = UpdateService {
            name: Some(" Glitter ".into()),
            ..Default::default()
        };
        assert_eq!(update.validate().unwrap().name.as_deref(), Some("Glitter"));
    }

    #[test]
    fn test_explicit_inactive_is_kept() {
        let mut service = minimal();
        service.is_active = Some(false);
        assert!(!service.validate().unwrap().is_active);
    }
}
