//! Studio service endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::service::{CreateService, Service, UpdateService},
};

use super::{parse_id, ApiJson, AuthenticatedUser};

const NOT_FOUND: &str = "Service not found";

/// Service mutation response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ServiceResponse {
    pub message: String,
    pub service: Service,
}

/// List all services, oldest first (public)
#[utoipa::path(
    get,
    path = "/services",
    tag = "services",
    responses(
        (status = 200, description = "Services, active and inactive", body = Vec<Service>)
    )
)]
pub async fn list_services(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = state.services.catalog.list().await?;
    Ok(Json(services))
}

/// Create a service
#[utoipa::path(
    post,
    path = "/services",
    tag = "services",
    security(("bearer_auth" = [])),
    request_body = CreateService,
    responses(
        (status = 201, description = "Service created", body = ServiceResponse),
        (status = 400, description = "Missing fields or image too large", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_service(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    ApiJson(data): ApiJson<CreateService>,
) -> AppResult<(StatusCode, Json<ServiceResponse>)> {
    identity.require_admin()?;
    let service = state.services.catalog.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ServiceResponse {
            message: "Service created successfully".to_string(),
            service,
        }),
    ))
}

/// Update the fields present in the body
#[utoipa::path(
    patch,
    path = "/services/{id}",
    tag = "services",
    security(("bearer_auth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Service ID")),
    request_body = UpdateService,
    responses(
        (status = 200, description = "Service updated", body = ServiceResponse),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_service(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateService>,
) -> AppResult<Json<ServiceResponse>> {
    identity.require_admin()?;
    let id = parse_id(&id, NOT_FOUND)?;
    let service = state.services.catalog.update(id, data).await?;
    Ok(Json(ServiceResponse {
        message: "Service updated successfully".to_string(),
        service,
    }))
}

/// Flip a service between active and inactive
#[utoipa::path(
    patch,
    path = "/services/{id}/toggle",
    tag = "services",
    security(("bearer_auth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service toggled", body = ServiceResponse),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn toggle_service(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<ServiceResponse>> {
    identity.require_admin()?;
    let id = parse_id(&id, NOT_FOUND)?;
    let service = state.services.catalog.toggle_active(id).await?;
    Ok(Json(ServiceResponse {
        message: "Service status updated successfully".to_string(),
        service,
    }))
}
