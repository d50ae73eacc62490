//! Auth handlers: register, login, logout, change password, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use jobtrail_core::error::AppError;
use jobtrail_entity::user::UserSummary;

use crate::dto::request::{ChangePasswordRequest, LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, MessageResponse};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let outcome = state.auth.register(&req.username, &req.password).await?;
    Ok((StatusCode::CREATED, Json(outcome.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let outcome = state.auth.login(&req.username, &req.password).await?;
    Ok(Json(outcome.into()))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> Json<MessageResponse> {
    state.auth.logout(auth.claims());
    Json(MessageResponse::ok("Logged out successfully"))
}

/// PUT /api/auth/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .auth
        .change_password(auth.user_id(), &req.current_password, &req.new_password)
        .await?;
    Ok(Json(MessageResponse::ok("Password changed successfully")))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserSummary>>, AppError> {
    let user = state.auth.me(auth.user_id()).await?;
    Ok(Json(ApiResponse::ok(user)))
}
