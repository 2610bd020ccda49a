//! Previous work endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::gallery::{CreateMediaItem, PreviousWork},
};

use super::{parse_id, ApiJson, AuthenticatedUser, MessageResponse};

/// List previous work, newest first (public)
#[utoipa::path(
    get,
    path = "/previous-work",
    tag = "previous-work",
    responses(
        (status = 200, description = "Previous work items", body = Vec<PreviousWork>)
    )
)]
pub async fn list_previous_work(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PreviousWork>>> {
    let items = state.services.showcase.list_previous_work().await?;
    Ok(Json(items))
}

/// Create a previous work item
#[utoipa::path(
    post,
    path = "/previous-work",
    tag = "previous-work",
    security(("bearer_auth" = [])),
    request_body = CreateMediaItem,
    responses(
        (status = 201, description = "Item created", body = PreviousWork),
        (status = 400, description = "Invalid data", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_previous_work(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    ApiJson(data): ApiJson<CreateMediaItem>,
) -> AppResult<(StatusCode, Json<PreviousWork>)> {
    identity.require_admin()?;
    let item = state.services.showcase.create_previous_work(data).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Delete a previous work item
#[utoipa::path(
    delete,
    path = "/previous-work/{id}",
    tag = "previous-work",
    security(("bearer_auth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item removed", body = MessageResponse),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_previous_work(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    identity.require_admin()?;
    let id = parse_id(&id, "Item not found")?;
    state.services.showcase.delete_previous_work(id).await?;
    Ok(Json(MessageResponse::new("Item removed")))
}
