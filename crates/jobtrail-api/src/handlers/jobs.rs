//! Job CRUD handlers. Every query is scoped to the caller.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use jobtrail_core::error::AppError;
use jobtrail_entity::job::{Job, JobStatus};

use crate::dto::request::{CreateJobRequest, JobListQuery, UpdateJobRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthUser, PathParams, QueryParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/jobs?status=...
pub async fn list_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<JobListQuery>,
) -> Result<Json<ApiResponse<Vec<Job>>>, AppError> {
    let status = query
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse::<JobStatus>)
        .transpose()?;

    let jobs = state.job_repo.list_by_user(auth.user_id(), status).await?;
    Ok(Json(ApiResponse::ok(jobs)))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Job>>), AppError> {
    let job = state.job_repo.create(auth.user_id(), req.into()).await?;
    tracing::info!(user_id = %auth.user_id(), job_id = %job.id, "Job created");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(job))))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<Uuid>,
) -> Result<Json<ApiResponse<Job>>, AppError> {
    let job = state
        .job_repo
        .find_for_user(id, auth.user_id())
        .await?
        .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))?;
    Ok(Json(ApiResponse::ok(job)))
}

/// PUT /api/jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateJobRequest>,
) -> Result<Json<ApiResponse<Job>>, AppError> {
    let job = state
        .job_repo
        .update(id, auth.user_id(), req.into())
        .await?;
    Ok(Json(ApiResponse::ok(job)))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.job_repo.delete(id, auth.user_id()).await?;
    tracing::info!(user_id = %auth.user_id(), job_id = %id, "Job deleted");
    Ok(Json(MessageResponse::ok("Job deleted")))
}
