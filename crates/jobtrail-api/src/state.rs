//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use jobtrail_auth::store::CredentialStore;
use jobtrail_auth::{AuthService, MemoryAttemptTracker};
use jobtrail_core::config::AppConfig;
use jobtrail_core::result::AppResult;
use jobtrail_database::DatabasePool;
use jobtrail_database::repositories::{JobLogRepository, JobRepository, UserRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// SQLite connection pool.
    pub db: DatabasePool,
    /// Auth service.
    pub auth: Arc<AuthService>,
    /// Failed-login tracker, also held by `auth`.
    pub attempt_tracker: Arc<MemoryAttemptTracker>,
    /// Job repository.
    pub job_repo: Arc<JobRepository>,
    /// Job log repository.
    pub log_repo: Arc<JobLogRepository>,
}

impl AppState {
    /// Builds the state with a tracker configured from `config.auth`.
    pub fn new(config: AppConfig, db: DatabasePool) -> AppResult<Self> {
        let tracker = Arc::new(MemoryAttemptTracker::from_config(&config.auth));
        Self::with_tracker(config, db, tracker)
    }

    /// Builds the state around an existing attempt tracker.
    pub fn with_tracker(
        config: AppConfig,
        db: DatabasePool,
        attempt_tracker: Arc<MemoryAttemptTracker>,
    ) -> AppResult<Self> {
        let pool = db.pool().clone();
        let store: Arc<dyn CredentialStore> = Arc::new(UserRepository::new(pool.clone()));
        let auth = AuthService::from_config(store, attempt_tracker.clone(), &config.auth)?;

        Ok(Self {
            config: Arc::new(config),
            db,
            auth: Arc::new(auth),
            attempt_tracker,
            job_repo: Arc::new(JobRepository::new(pool.clone())),
            log_repo: Arc::new(JobLogRepository::new(pool)),
        })
    }
}
