//! Start the JobTrail server.

use clap::Args;

use jobtrail_core::config::AppConfig;
use jobtrail_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip running database migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    let db = super::connect(&config).await?;

    if args.no_migrate {
        tracing::info!("Skipping database migrations");
    } else {
        db.migrate().await?;
    }

    jobtrail_api::run_server(config, db).await
}
