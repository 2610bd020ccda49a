//! Booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::booking::{Booking, CreateBooking, UpdateBookingStatus},
};

use super::{parse_id, ApiJson, AuthenticatedUser};

/// Booking creation response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct BookingCreatedResponse {
    pub message: String,
    #[serde(rename = "bookingId")]
    pub booking_id: Uuid,
}

/// Booking update response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct BookingResponse {
    pub message: String,
    pub booking: Booking,
}

/// List all bookings, newest first
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bookings", body = Vec<Booking>),
        (status = 401, description = "Missing token")
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> AppResult<Json<Vec<Booking>>> {
    identity.require_admin()?;
    let bookings = state.services.bookings.list().await?;
    Ok(Json(bookings))
}

/// Submit a booking request (public)
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = BookingCreatedResponse),
        (status = 400, description = "Missing or invalid fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<BookingCreatedResponse>)> {
    let booking = state.services.bookings.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            message: "Booking created successfully".to_string(),
            booking_id: booking.id,
        }),
    ))
}

/// Change the status of a booking
#[utoipa::path(
    patch,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking ID")),
    request_body = UpdateBookingStatus,
    responses(
        (status = 200, description = "Booking updated", body = BookingResponse),
        (status = 400, description = "Invalid status", body = crate::error::ErrorResponse),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_booking_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateBookingStatus>,
) -> AppResult<Json<BookingResponse>> {
    identity.require_admin()?;
    let status = data.validate()?;
    let id = parse_id(&id, "Booking not found")?;
    let booking = state.services.bookings.update_status(id, status).await?;
    Ok(Json(BookingResponse {
        message: "Booking updated successfully".to_string(),
        booking,
    }))
}
