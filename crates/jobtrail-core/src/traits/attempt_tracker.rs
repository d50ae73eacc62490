//! Login attempt tracking trait for account lockout.

use async_trait::async_trait;

/// Lockout state of a single username after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AttemptState {
    /// No failures recorded.
    Clean,
    /// Some failures recorded, below the lockout threshold.
    Warned {
        /// Consecutive failures so far.
        failures: u32,
    },
    /// Threshold reached; logins are refused until the window elapses.
    Locked {
        /// Consecutive failures so far.
        failures: u32,
    },
}

impl AttemptState {
    /// Returns `true` if this state refuses logins.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked { .. })
    }

    /// Number of consecutive failures represented by this state.
    pub fn failures(&self) -> u32 {
        match self {
            Self::Clean => 0,
            Self::Warned { failures } | Self::Locked { failures } => *failures,
        }
    }
}

/// Tracks consecutive failed logins per username and decides lockout.
///
/// Implementations must make `record_failure` and `begin_attempt` atomic
/// increment-and-check operations per key, and `is_locked_out` must itself
/// expire a lockout whose window has elapsed. None of the methods fail: a
/// tracker only ever reports state.
#[async_trait]
pub trait AttemptTracker: Send + Sync + 'static {
    /// Returns `true` if the username is currently locked out.
    async fn is_locked_out(&self, username: &str) -> bool;

    /// Records one failed attempt and returns the resulting state.
    async fn record_failure(&self, username: &str) -> AttemptState;

    /// Counts an attempt as failed before its outcome is known.
    ///
    /// Returns `None` when the username is already locked out, leaving the
    /// record untouched. Otherwise the attempt is recorded and the resulting
    /// state returned; a caller that then succeeds must `clear` it. At most
    /// MAX attempts per window can ever be admitted, however many race.
    async fn begin_attempt(&self, username: &str) -> Option<AttemptState>;

    /// Clears all recorded failures for the username.
    async fn clear(&self, username: &str);

    /// Returns the current state without recording anything.
    async fn state(&self, username: &str) -> AttemptState;
}
