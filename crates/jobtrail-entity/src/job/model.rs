//! Job application entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::JobStatus;

/// A tracked job application owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Company name.
    pub company: String,
    /// Position / role title.
    pub position: String,
    /// Current application status.
    pub status: JobStatus,
    /// Job location.
    pub location: Option<String>,
    /// Posting URL.
    pub url: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Date the application was sent.
    pub applied_on: Option<NaiveDate>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    /// Company name.
    pub company: String,
    /// Position title.
    pub position: String,
    /// Initial status.
    pub status: JobStatus,
    /// Location.
    pub location: Option<String>,
    /// Posting URL.
    pub url: Option<String>,
    /// Notes.
    pub notes: Option<String>,
    /// Application date.
    pub applied_on: Option<NaiveDate>,
}

/// Partial update of a job; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJob {
    /// New company name.
    pub company: Option<String>,
    /// New position title.
    pub position: Option<String>,
    /// New status.
    pub status: Option<JobStatus>,
    /// New location.
    pub location: Option<String>,
    /// New posting URL.
    pub url: Option<String>,
    /// New notes.
    pub notes: Option<String>,
    /// New application date.
    pub applied_on: Option<NaiveDate>,
}

impl Job {
    /// Apply a partial update in place and bump `updated_at`.
    pub fn apply(&mut self, update: UpdateJob) {
        if let Some(company) = update.company {
            self.company = company;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if update.location.is_some() {
            self.location = update.location;
        }
        if update.url.is_some() {
            self.url = update.url;
        }
        if update.notes.is_some() {
            self.notes = update.notes;
        }
        if update.applied_on.is_some() {
            self.applied_on = update.applied_on;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_touches_given_fields() {
        let now = Utc::now();
        let mut job = Job {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            status: JobStatus::Applied,
            location: Some("Remote".to_string()),
            url: None,
            notes: None,
            applied_on: None,
            created_at: now,
            updated_at: now,
        };

        job.apply(UpdateJob {
            status: Some(JobStatus::Interviewing),
            notes: Some("phone screen booked".to_string()),
            ..UpdateJob::default()
        });

        assert_eq!(job.company, "Acme");
        assert_eq!(job.status, JobStatus::Interviewing);
        assert_eq!(job.location.as_deref(), Some("Remote"));
        assert_eq!(job.notes.as_deref(), Some("phone screen booked"));
        assert!(job.updated_at >= now);
    }
}
