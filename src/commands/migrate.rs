//! Database migration command.

use jobtrail_core::config::AppConfig;
use jobtrail_core::error::AppError;

/// Run all pending migrations
pub async fn execute(config: AppConfig) -> Result<(), AppError> {
    let db = super::connect(&config).await?;
    db.migrate().await?;
    db.close().await;
    tracing::info!("All migrations applied successfully");
    Ok(())
}
