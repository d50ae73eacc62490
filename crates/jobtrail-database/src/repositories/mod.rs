//! Repository implementations for all JobTrail entities.

pub mod job;
pub mod job_log;
pub mod user;

pub use job::JobRepository;
pub use job_log::JobLogRepository;
pub use user::UserRepository;
