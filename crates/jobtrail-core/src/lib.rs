//! # jobtrail-core
//!
//! Core crate for JobTrail. Contains configuration schemas, the
//! login-attempt tracking trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other JobTrail crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
