//! Core traits defined in `jobtrail-core` and implemented by other crates.

pub mod attempt_tracker;

pub use attempt_tracker::{AttemptState, AttemptTracker};
