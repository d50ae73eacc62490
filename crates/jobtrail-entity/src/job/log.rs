//! Job log entries: timestamped notes attached to a job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single note in a job's history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobLog {
    /// Unique log identifier.
    pub id: Uuid,
    /// The job this entry belongs to.
    pub job_id: Uuid,
    /// Entry text.
    pub entry: String,
    /// When the entry was written.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobLog {
    /// Target job.
    pub job_id: Uuid,
    /// Entry text.
    pub entry: String,
}
