//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use jobtrail_core::config::AppConfig;
use jobtrail_core::error::AppError;
use jobtrail_database::DatabasePool;

/// JobTrail: personal job-application tracker
#[derive(Debug, Parser)]
#[command(name = "jobtrail-server", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and `<env>.toml`
    #[arg(long, default_value = "config", global = true)]
    pub config_dir: String,

    /// Environment name selecting `<config_dir>/<env>.toml`
    #[arg(long, env = "JOBTRAIL_ENV", default_value = "development", global = true)]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations and exit
    Migrate,
}

impl Cli {
    /// Execute the selected command.
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(config).await,
        }
    }
}

/// Connects to the configured database.
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
