//! HTTP integration tests driving the full router.

mod helpers;

mod auth_test;
mod jobs_test;
