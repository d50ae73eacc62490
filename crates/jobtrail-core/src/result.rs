//! Convenience result type alias for JobTrail.

use crate::error::AppError;

/// A specialized `Result` type for JobTrail operations.
pub type AppResult<T> = Result<T, AppError>;
