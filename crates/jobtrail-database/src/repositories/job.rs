//! Job repository. Every query is scoped to the owning user.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use jobtrail_core::error::{AppError, ErrorKind};
use jobtrail_core::result::AppResult;
use jobtrail_entity::job::{CreateJob, Job, JobStatus, UpdateJob};

/// Repository for job application CRUD.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: SqlitePool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List a user's jobs, newest first, optionally filtered by status.
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        status: Option<JobStatus>,
    ) -> AppResult<Vec<Job>> {
        let query = match status {
            Some(status) => sqlx::query_as::<_, Job>(
                "SELECT * FROM jobs WHERE user_id = $1 AND status = $2 ORDER BY created_at DESC",
            )
            .bind(user_id)
            .bind(status),
            None => sqlx::query_as::<_, Job>(
                "SELECT * FROM jobs WHERE user_id = $1 ORDER BY created_at DESC",
            )
            .bind(user_id),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))
    }

    /// Find one job if it belongs to `user_id`.
    pub async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
    }

    /// Insert a new job for `user_id`.
    pub async fn create(&self, user_id: Uuid, data: CreateJob) -> AppResult<Job> {
        let now = Utc::now();

        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (id, user_id, company, position, status, location, url, notes, applied_on, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&data.company)
        .bind(&data.position)
        .bind(data.status)
        .bind(&data.location)
        .bind(&data.url)
        .bind(&data.notes)
        .bind(data.applied_on)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    /// Apply a partial update to a job owned by `user_id`.
    pub async fn update(&self, id: Uuid, user_id: Uuid, update: UpdateJob) -> AppResult<Job> {
        let mut job = self
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))?;
        job.apply(update);

        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET company = $1, position = $2, status = $3, location = $4, url = $5, \
             notes = $6, applied_on = $7, updated_at = $8 \
             WHERE id = $9 AND user_id = $10 \
             RETURNING *",
        )
        .bind(&job.company)
        .bind(&job.position)
        .bind(job.status)
        .bind(&job.location)
        .bind(&job.url)
        .bind(&job.notes)
        .bind(job.applied_on)
        .bind(job.updated_at)
        .bind(id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job", e))
    }

    /// Delete a job owned by `user_id`. Its log entries cascade.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete job", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Job {id} not found")));
        }
        Ok(())
    }
}
