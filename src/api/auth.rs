//! Authentication endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::admin::{AdminInfo, SignInRequest},
};

use super::{ApiJson, AuthenticatedUser};

/// Sign-in response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SignInResponse {
    pub message: String,
    pub user: AdminInfo,
    /// Bearer token, valid for one week
    pub token: String,
}

/// Admin check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminCheckResponse {
    pub is_admin: bool,
    pub email: String,
}

/// Self-registration (always refused)
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "auth",
    responses(
        (status = 403, description = "Registration is disabled", body = crate::error::ErrorResponse)
    )
)]
pub async fn sign_up() -> AppResult<Json<SignInResponse>> {
    Err(AppError::Forbidden(
        "Public registration is disabled. Please contact the administrator.".to_string(),
    ))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/auth/signin",
    tag = "auth",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = SignInResponse),
        (status = 400, description = "Missing email or password", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn sign_in(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<SignInRequest>,
) -> AppResult<Json<SignInResponse>> {
    let (email, password) = request.validate()?;
    let (admin, token) = state.services.auth.sign_in(&email, password).await?;

    Ok(Json(SignInResponse {
        message: "Logged in successfully".to_string(),
        user: AdminInfo::from(&admin),
        token,
    }))
}

/// Current admin
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current admin", body = AdminInfo),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid or expired token"),
        (status = 404, description = "Account no longer exists")
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> AppResult<Json<AdminInfo>> {
    let admin = state.services.auth.current_admin(&identity).await?;
    Ok(Json(AdminInfo::from(&admin)))
}

/// Check that the caller is an admin
#[utoipa::path(
    get,
    path = "/auth/check-admin",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin status", body = AdminCheckResponse),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid or expired token"),
        (status = 404, description = "Account no longer exists")
    )
)]
pub async fn check_admin(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> AppResult<Json<AdminCheckResponse>> {
    let admin = state.services.auth.current_admin(&identity).await?;
    Ok(Json(AdminCheckResponse {
        is_admin: identity.is_admin(),
        email: admin.email,
    }))
}
