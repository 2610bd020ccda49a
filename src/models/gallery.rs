//! Gallery and previous-work models
//!
//! Both collections hold the same kind of media showcase; previous-work items
//! also carry a free-form event date.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{
    enums::MediaType,
    media::{coerce_media_urls, optional_text, required_text, truthy},
};
use crate::error::{AppError, AppResult};

/// Gallery item record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct GalleryItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub media_urls: Vec<String>,
    pub media_type: MediaType,
    pub service_type: Option<String>,
    pub is_featured: bool,
    pub event_type: String,
    pub location: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Previous work record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PreviousWork {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub media_urls: Vec<String>,
    pub media_type: MediaType,
    pub service_type: Option<String>,
    pub is_featured: bool,
    pub event_type: String,
    pub location: String,
    /// Free-form date label ("Summer 2024", "2024-08-10", ...)
    pub event_date: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Create request for gallery and previous-work items
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateMediaItem {
    pub title: Option<String>,
    pub description: Option<String>,
    /// A single URL or a list of URLs
    #[schema(value_type = Option<Vec<String>>)]
    pub media_urls: Option<Value>,
    /// Single URL field sent by older admin forms
    #[schema(value_type = Option<String>)]
    pub media_url: Option<Value>,
    pub media_type: Option<String>,
    pub service_type: Option<String>,
    /// Any truthy value marks the item as featured
    #[schema(value_type = Option<bool>)]
    pub is_featured: Option<Value>,
    pub event_type: Option<String>,
    pub location: Option<String>,
    /// Only used by previous-work items
    pub event_date: Option<String>,
}

/// Validated media item, ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewMediaItem {
    pub title: String,
    pub description: String,
    pub media_urls: Vec<String>,
    pub media_type: MediaType,
    pub service_type: Option<String>,
    pub is_featured: bool,
    pub event_type: String,
    pub location: String,
    pub event_date: String,
}

impl CreateMediaItem {
    /// Gallery rules: unknown media types fall back to image
    pub fn validate_gallery(self) -> AppResult<NewMediaItem> {
        let media_type = match self.media_type.as_deref() {
            Some("video") => MediaType::Video,
            _ => MediaType::Image,
        };
        self.into_new_item(media_type)
    }

    /// Previous-work rules: unknown media types are rejected
    pub fn validate_previous_work(self) -> AppResult<NewMediaItem> {
        let media_type = match optional_text(self.media_type.clone()) {
            Some(raw) => raw
                .trim()
                .parse::<MediaType>()
                .map_err(|_| AppError::Validation("Media type must be image or video".to_string()))?,
            None => MediaType::default(),
        };
        self.into_new_item(media_type)
    }

    fn into_new_item(self, media_type: MediaType) -> AppResult<NewMediaItem> {
        let title = required_text(self.title.as_deref())
            .ok_or_else(|| AppError::Validation("Title is required".to_string()))?;
        let media_urls = coerce_media_urls(self.media_urls.as_ref(), self.media_url.as_ref())?;

        Ok(NewMediaItem {
            title,
            description: self.description.unwrap_or_default(),
            media_urls,
            media_type,
            service_type: optional_text(self.service_type),
            is_featured: truthy(self.is_featured.as_ref()),
            event_type: optional_text(self.event_type).unwrap_or_else(|| "other".to_string()),
            location: self.location.unwrap_or_default(),
            event_date: self.event_date.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> CreateMediaItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_gallery_defaults() {
        let item = request(json!({"title": " Festival ", "media_urls": ["a.jpg"]}))
            .validate_gallery()
            .unwrap();
        assert_eq!(item.title, "Festival");
        assert_eq!(item.media_type, MediaType::Image);
        assert!(!item.is_featured);
        assert_eq!(item.event_type, "other");
        assert_eq!(item.location, "");
        assert_eq!(item.service_type, None);
    }

    #[test]
    fn test_title_required() {
        let err = request(json!({"title": "   ", "media_urls": ["a.jpg"]}))
            .validate_gallery()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Title is required"));
    }

    #[test]
    fn test_media_urls_required() {
        let err = request(json!({"title": "X", "media_urls": []}))
            .validate_gallery()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("At least one media URL")));
    }

    #[test]
    fn test_single_string_media_urls() {
        let item = request(json!({"title": "X", "media_urls": "single-string"}))
            .validate_previous_work()
            .unwrap();
        assert_eq!(item.media_urls, vec!["single-string"]);
    }

    #[test]
    fn test_gallery_coerces_unknown_media_type() {
        let item = request(json!({"title": "X", "media_urls": "a.gif", "media_type": "gif"}))
            .validate_gallery()
            .unwrap();
        assert_eq!(item.media_type, MediaType::Image);

        let item = request(json!({"title": "X", "media_urls": "a.mp4", "media_type": "video"}))
            .validate_gallery()
            .unwrap();
        assert_eq!(item.media_type, MediaType::Video);
    }

    #[test]
    fn test_previous_work_rejects_unknown_media_type() {
        let result = request(json!({"title": "X", "media_urls": "a.gif", "media_type": "gif"}))
            .validate_previous_work();
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_previous_work_keeps_event_date() {
        let item = request(json!({
            "title": "Beach party",
            "media_urls": ["a.jpg", "b.jpg"],
            "event_date": "Summer 2024",
            "is_featured": true
        }))
        .validate_previous_work()
        .unwrap();
        assert_eq!(item.event_date, "Summer 2024");
        assert!(item.is_featured);
        assert_eq!(item.media_urls.len(), 2);
    }

    #[test]
    fn test_featured_flag_accepts_form_values() {
        let featured = |flag: Value| {
            request(json!({"title": "X", "media_urls": "a.jpg", "is_featured": flag}))
                .validate_gallery()
                .unwrap()
                .is_featured
        };
        assert!(featured(json!(1)));
        assert!(featured(json!("true")));
        assert!(!featured(json!(0)));
        assert!(!featured(json!("")));
        assert!(!featured(Value::Null));
    }
}
