//! API routes

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, config::CorsConfig, error::ErrorResponse, AppState};

/// Largest accepted request body (inline images travel as data URIs)
pub const MAX_BODY_BYTES: usize = 15 * 1024 * 1024;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    let api = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/signup", post(api::auth::sign_up))
        .route("/auth/signin", post(api::auth::sign_in))
        .route("/auth/me", get(api::auth::me))
        .route("/auth/check-admin", get(api::auth::check_admin))
        // Bookings
        .route(
            "/bookings",
            get(api::bookings::list_bookings).post(api::bookings::create_booking),
        )
        .route("/bookings/:id", patch(api::bookings::update_booking_status))
        // Gallery
        .route(
            "/gallery",
            get(api::gallery::list_gallery).post(api::gallery::create_gallery_item),
        )
        .route("/gallery/:id", delete(api::gallery::delete_gallery_item))
        // Services
        .route(
            "/services",
            get(api::services::list_services).post(api::services::create_service),
        )
        .route("/services/:id", patch(api::services::update_service))
        .route("/services/:id/toggle", patch(api::services::toggle_service))
        // Previous work
        .route(
            "/previous-work",
            get(api::previous_work::list_previous_work).post(api::previous_work::create_previous_work),
        )
        .route(
            "/previous-work/:id",
            delete(api::previous_work::delete_previous_work),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .route("/health", get(api::health::health_check))
        .nest("/api", api)
        .merge(openapi)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS for the configured frontend origins
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Last-resort handler: log the panic and answer with a JSON 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!("Unhandled panic in request handler: {}", detail);

    let body = Json(ErrorResponse {
        error: "Internal server error".to_string(),
        code: "Failure".to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
