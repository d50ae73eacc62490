//! Request DTOs with validation.
//!
//! A `code = "required"` failure is reported as `MissingFields`; any other
//! failure as `ValidationFailed`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use jobtrail_entity::job::{CreateJob, JobStatus, UpdateJob};

/// Register request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 1, code = "required", message = "Username is required"))]
    pub username: String,
    /// Plaintext password.
    #[validate(length(min = 1, code = "required", message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, code = "required", message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, code = "required", message = "Password is required"))]
    pub password: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password.
    #[serde(alias = "current_password")]
    #[validate(length(min = 1, code = "required", message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[serde(alias = "new_password")]
    #[validate(length(min = 1, code = "required", message = "New password is required"))]
    pub new_password: String,
}

/// Create job request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    /// Company name.
    #[validate(length(min = 1, max = 200))]
    pub company: String,
    /// Position title.
    #[validate(length(min = 1, max = 200))]
    pub position: String,
    /// Initial status (default `applied`).
    #[serde(default)]
    pub status: Option<JobStatus>,
    /// Location.
    #[validate(length(max = 200))]
    pub location: Option<String>,
    /// Posting URL.
    #[validate(length(max = 2048))]
    pub url: Option<String>,
    /// Notes.
    #[validate(length(max = 5000))]
    pub notes: Option<String>,
    /// Application date (`YYYY-MM-DD`).
    pub applied_on: Option<NaiveDate>,
}

impl From<CreateJobRequest> for CreateJob {
    fn from(req: CreateJobRequest) -> Self {
        Self {
            company: req.company,
            position: req.position,
            status: req.status.unwrap_or_default(),
            location: req.location,
            url: req.url,
            notes: req.notes,
            applied_on: req.applied_on,
        }
    }
}

/// Partial job update; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobRequest {
    /// New company name.
    #[validate(length(min = 1, max = 200))]
    pub company: Option<String>,
    /// New position title.
    #[validate(length(min = 1, max = 200))]
    pub position: Option<String>,
    /// New status.
    pub status: Option<JobStatus>,
    /// New location.
    #[validate(length(max = 200))]
    pub location: Option<String>,
    /// New posting URL.
    #[validate(length(max = 2048))]
    pub url: Option<String>,
    /// New notes.
    #[validate(length(max = 5000))]
    pub notes: Option<String>,
    /// New application date.
    pub applied_on: Option<NaiveDate>,
}

impl From<UpdateJobRequest> for UpdateJob {
    fn from(req: UpdateJobRequest) -> Self {
        Self {
            company: req.company,
            position: req.position,
            status: req.status,
            location: req.location,
            url: req.url,
            notes: req.notes,
            applied_on: req.applied_on,
        }
    }
}

/// Create log entry request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLogRequest {
    /// Entry text.
    #[validate(length(min = 1, max = 5000))]
    pub entry: String,
}

/// Query parameters for listing jobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobListQuery {
    /// Optional status filter.
    pub status: Option<String>,
}
