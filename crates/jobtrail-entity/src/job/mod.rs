//! Job application entities.

pub mod log;
pub mod model;
pub mod status;

pub use log::{CreateJobLog, JobLog};
pub use model::{CreateJob, Job, UpdateJob};
pub use status::JobStatus;
