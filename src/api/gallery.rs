//! Gallery endpoints

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
    models::gallery::{CreateMediaItem, GalleryItem},
};

use super::{parse_id, ApiJson, AuthenticatedUser, MessageResponse};

/// Gallery item creation response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GalleryCreatedResponse {
    pub message: String,
    #[serde(rename = "itemId")]
    pub item_id: Uuid,
}

/// List gallery items, newest first (public)
#[utoipa::path(
    get,
    path = "/gallery",
    tag = "gallery",
    responses(
        (status = 200, description = "Gallery items", body = Vec<GalleryItem>)
    )
)]
pub async fn list_gallery(State(state): State<crate::AppState>) -> AppResult<Json<Vec<GalleryItem>>> {
    let items = state.services.showcase.list_gallery().await?;
    Ok(Json(items))
}

/// Add a gallery item
#[utoipa::path(
    post,
    path = "/gallery",
    tag = "gallery",
    security(("bearer_auth" = [])),
    request_body = CreateMediaItem,
    responses(
        (status = 201, description = "Item added", body = GalleryCreatedResponse),
        (status = 400, description = "Missing title or media", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_gallery_item(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    ApiJson(data): ApiJson<CreateMediaItem>,
) -> AppResult<(StatusCode, Json<GalleryCreatedResponse>)> {
    identity.require_admin()?;
    let item = state.services.showcase.create_gallery_item(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(GalleryCreatedResponse {
            message: "Gallery item added successfully".to_string(),
            item_id: item.id,
        }),
    ))
}

/// Delete a gallery item
#[utoipa::path(
    delete,
    path = "/gallery/{id}",
    tag = "gallery",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Gallery item ID")),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_gallery_item(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    identity.require_admin()?;
    let id = parse_id(&id, "Gallery item not found")?;
    state.services.showcase.delete_gallery_item(id).await?;
    Ok(Json(MessageResponse::new("Gallery item deleted successfully")))
}
