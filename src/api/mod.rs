//! API handlers for the studio REST endpoints

pub mod auth;
pub mod bookings;
pub mod gallery;
pub mod health;
pub mod openapi;
pub mod previous_work;
pub mod services;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::admin::Identity,
    AppState,
};

/// Extractor for an authenticated admin, built from the bearer token
pub struct AuthenticatedUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(|| AppError::Authentication("Access token required".to_string()))?;

        let identity = state
            .services
            .auth
            .authenticate(token)
            .ok_or_else(|| AppError::Forbidden("Invalid or expired token".to_string()))?;

        Ok(AuthenticatedUser(identity))
    }
}

/// Token part of a `Bearer <token>` header value
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// JSON body extractor whose rejections use the API error format
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Parse a path id; malformed ids are reported like unknown ones
pub(crate) fn parse_id(raw: &str, not_found: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(not_found.to_string()))
}

/// Plain confirmation body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token(""), None);
    }

    #[test]
    fn test_malformed_id_is_not_found() {
        let err = parse_id("507f1f77bcf86cd799439011", "Booking not found").unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Booking not found"));

        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "x").unwrap(), id);
    }
}
