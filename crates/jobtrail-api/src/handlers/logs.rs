//! Job log handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use jobtrail_core::error::AppError;
use jobtrail_entity::job::{CreateJobLog, JobLog};

use crate::dto::request::CreateLogRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthUser, PathParams, ValidatedJson};
use crate::state::AppState;

/// Fails with `NotFound` unless the caller owns the job.
async fn ensure_job_owned(state: &AppState, job_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
    state
        .job_repo
        .find_for_user(job_id, user_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::not_found(format!("Job {job_id} not found")))
}

/// GET /api/jobs/{id}/logs
pub async fn list_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(job_id): PathParams<Uuid>,
) -> Result<Json<ApiResponse<Vec<JobLog>>>, AppError> {
    ensure_job_owned(&state, job_id, auth.user_id()).await?;
    let logs = state.log_repo.list_by_job(job_id, auth.user_id()).await?;
    Ok(Json(ApiResponse::ok(logs)))
}

/// POST /api/jobs/{id}/logs
pub async fn create_log(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(job_id): PathParams<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateLogRequest>,
) -> Result<(StatusCode, Json<ApiResponse<JobLog>>), AppError> {
    ensure_job_owned(&state, job_id, auth.user_id()).await?;
    let log = state
        .log_repo
        .create(CreateJobLog {
            job_id,
            entry: req.entry,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(log))))
}

/// DELETE /api/logs/{id}
pub async fn delete_log(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.log_repo.delete(id, auth.user_id()).await?;
    Ok(Json(MessageResponse::ok("Log deleted")))
}
