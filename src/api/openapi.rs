//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, bookings, gallery, health, previous_work, services};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Studio API",
        version = "1.0.0",
        description = "Bookings, services and showcase management for the studio website"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::sign_up,
        auth::sign_in,
        auth::me,
        auth::check_admin,
        // Bookings
        bookings::list_bookings,
        bookings::create_booking,
        bookings::update_booking_status,
        // Services
        services::list_services,
        services::create_service,
        services::update_service,
        services::toggle_service,
        // Gallery
        gallery::list_gallery,
        gallery::create_gallery_item,
        gallery::delete_gallery_item,
        // Previous work
        previous_work::list_previous_work,
        previous_work::create_previous_work,
        previous_work::delete_previous_work,
    ),
    components(
        schemas(
            // Auth
            crate::models::admin::SignInRequest,
            crate::models::admin::AdminInfo,
            auth::SignInResponse,
            auth::AdminCheckResponse,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::CreateBooking,
            crate::models::booking::UpdateBookingStatus,
            crate::models::enums::BookingStatus,
            crate::models::enums::ServiceCode,
            bookings::BookingCreatedResponse,
            bookings::BookingResponse,
            // Services
            crate::models::service::Service,
            crate::models::service::CreateService,
            crate::models::service::UpdateService,
            services::ServiceResponse,
            // Gallery & previous work
            crate::models::gallery::GalleryItem,
            crate::models::gallery::PreviousWork,
            crate::models::gallery::CreateMediaItem,
            crate::models::enums::MediaType,
            gallery::GalleryCreatedResponse,
            // Health
            health::HealthResponse,
            // Common
            super::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Admin authentication"),
        (name = "bookings", description = "Booking requests"),
        (name = "services", description = "Studio services"),
        (name = "gallery", description = "Gallery media"),
        (name = "previous-work", description = "Previous work showcase")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected paths
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
