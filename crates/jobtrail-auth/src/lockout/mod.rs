//! Failed-login tracking for account lockout.

pub mod memory;

pub use memory::MemoryAttemptTracker;
