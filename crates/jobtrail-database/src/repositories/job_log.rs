//! Job log repository. Ownership is checked through the parent job.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use jobtrail_core::error::{AppError, ErrorKind};
use jobtrail_core::result::AppResult;
use jobtrail_entity::job::{CreateJobLog, JobLog};

/// Repository for job log entries.
#[derive(Debug, Clone)]
pub struct JobLogRepository {
    pool: SqlitePool,
}

impl JobLogRepository {
    /// Create a new job log repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List entries of a job owned by `user_id`, oldest first.
    ///
    /// Returns an empty list when the job does not exist or is not owned.
    pub async fn list_by_job(&self, job_id: Uuid, user_id: Uuid) -> AppResult<Vec<JobLog>> {
        sqlx::query_as::<_, JobLog>(
            "SELECT l.* FROM job_logs l \
             JOIN jobs j ON j.id = l.job_id \
             WHERE l.job_id = $1 AND j.user_id = $2 \
             ORDER BY l.created_at ASC",
        )
        .bind(job_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list job logs", e))
    }

    /// Append an entry. The caller must have checked job ownership.
    pub async fn create(&self, data: CreateJobLog) -> AppResult<JobLog> {
        sqlx::query_as::<_, JobLog>(
            "INSERT INTO job_logs (id, job_id, entry, created_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.job_id)
        .bind(&data.entry)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job log", e))
    }

    /// Delete an entry whose parent job is owned by `user_id`.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM job_logs WHERE id = $1 \
             AND job_id IN (SELECT id FROM jobs WHERE user_id = $2)",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete job log", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Log {id} not found")));
        }
        Ok(())
    }
}
