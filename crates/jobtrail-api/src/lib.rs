//! # jobtrail-api
//!
//! HTTP API layer for JobTrail built on Axum.
//!
//! Provides the auth, jobs, and logs endpoints, the bearer-token and
//! validated-JSON extractors, CORS and request logging middleware, and the
//! mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
