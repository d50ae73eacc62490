//! Application builder: wires router, middleware, and state, and runs the server.

use std::time::Duration;

use axum::Router;
use tokio::sync::watch;

use jobtrail_core::config::AppConfig;
use jobtrail_core::error::{AppError, ErrorKind};
use jobtrail_database::DatabasePool;

use crate::router::build_router;
use crate::state::AppState;

/// How often expired lockout records and revoked tokens are swept.
const HOUSEKEEPING_INTERVAL: Duration = Duration::from_secs(60);

/// Builds the complete Axum application for `state`.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the JobTrail server until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    tracing::info!("Starting JobTrail server...");

    if config.auth.uses_default_secret() {
        tracing::warn!(
            "auth.jwt_secret is the shipped default; set JOBTRAIL__AUTH__JWT_SECRET before exposing this server"
        );
    }

    let addr = config.server.bind_address();
    let state = AppState::new(config, db.clone())?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let housekeeping = spawn_housekeeping(state.clone(), shutdown_rx);

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Io, format!("Failed to bind {addr}"), e)
    })?;

    tracing::info!("JobTrail server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    let _ = housekeeping.await;
    db.close().await;
    tracing::info!("JobTrail server stopped");
    Ok(())
}

/// Periodically drops expired lockout records and revoked-token entries.
fn spawn_housekeeping(
    state: AppState,
    mut shutdown: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(HOUSEKEEPING_INTERVAL);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let lockouts = state.attempt_tracker.purge_expired();
                    let tokens = state.auth.decoder().denylist().purge_expired();
                    if lockouts + tokens > 0 {
                        tracing::debug!(lockouts, tokens, "Housekeeping purged expired entries");
                    }
                }
                _ = shutdown.changed() => break,
            }
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
