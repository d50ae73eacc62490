//! In-memory login attempt tracker backed by `DashMap`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};

use jobtrail_core::config::AuthConfig;
use jobtrail_core::traits::{AttemptState, AttemptTracker};

/// Failure record for one username.
#[derive(Debug, Clone, Copy)]
struct AttemptRecord {
    /// Consecutive failures since the last success or expiry.
    count: u32,
    /// When the most recent failure happened.
    last_failure: Instant,
}

/// Per-username failed-login counter with lazy window expiry.
///
/// The map's entry lock makes increment-and-check atomic per key. State
/// lives in this process only; running several instances gives each its
/// own counters.
#[derive(Debug)]
pub struct MemoryAttemptTracker {
    /// Username (case-sensitive) → failure record.
    entries: DashMap<String, AttemptRecord>,
    /// Failures that trigger a lockout.
    max_failures: u32,
    /// Lockout window, measured from the last failure.
    window: Duration,
}

impl MemoryAttemptTracker {
    /// Creates a tracker with an explicit threshold and window.
    pub fn new(max_failures: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            max_failures: max_failures.max(1),
            window,
        }
    }

    /// Creates a tracker from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.max_failed_attempts, config.lockout_window())
    }

    /// Removes every record whose window has elapsed; returns how many went.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    fn is_stale(&self, record: &AttemptRecord, now: Instant) -> bool {
        now.saturating_duration_since(record.last_failure) >= self.window
    }

    fn classify(&self, count: u32) -> AttemptState {
        match count {
            0 => AttemptState::Clean,
            n if n >= self.max_failures => AttemptState::Locked { failures: n },
            n => AttemptState::Warned { failures: n },
        }
    }

    /// Drops the record for `username` if its window has elapsed.
    fn expire(&self, username: &str, now: Instant) {
        if self
            .entries
            .remove_if(username, |_, record| self.is_stale(record, now))
            .is_some()
        {
            debug!(username = %username, "Login attempt record expired");
        }
    }

    fn state_at(&self, username: &str, now: Instant) -> AttemptState {
        self.expire(username, now);
        let count = self.entries.get(username).map(|r| r.count).unwrap_or(0);
        self.classify(count)
    }

    fn is_locked_out_at(&self, username: &str, now: Instant) -> bool {
        self.state_at(username, now).is_locked()
    }

    fn record_failure_at(&self, username: &str, now: Instant) -> AttemptState {
        self.bump_at(username, now, false)
            .unwrap_or(AttemptState::Locked {
                failures: self.max_failures,
            })
    }

    fn begin_attempt_at(&self, username: &str, now: Instant) -> Option<AttemptState> {
        self.bump_at(username, now, true)
    }

    /// Increments the counter under the entry lock. With `refuse_locked`,
    /// a username already at the threshold is left untouched and `None`
    /// is returned.
    fn bump_at(&self, username: &str, now: Instant, refuse_locked: bool) -> Option<AttemptState> {
        let count = {
            let mut record = self
                .entries
                .entry(username.to_string())
                .or_insert(AttemptRecord {
                    count: 0,
                    last_failure: now,
                });
            if self.is_stale(&record, now) {
                record.count = 0;
            }
            if refuse_locked && record.count >= self.max_failures {
                return None;
            }
            record.count = record.count.saturating_add(1);
            record.last_failure = now;
            record.count
        };

        if count == self.max_failures {
            info!(username = %username, failures = count, "Username reached lockout threshold");
        }
        Some(self.classify(count))
    }

    fn purge_expired_at(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, record| {
            let keep = !self.is_stale(record, now);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }
}

#[async_trait]
impl AttemptTracker for MemoryAttemptTracker {
    async fn is_locked_out(&self, username: &str) -> bool {
        self.is_locked_out_at(username, Instant::now())
    }

    async fn record_failure(&self, username: &str) -> AttemptState {
        self.record_failure_at(username, Instant::now())
    }

    async fn begin_attempt(&self, username: &str) -> Option<AttemptState> {
        self.begin_attempt_at(username, Instant::now())
    }

    async fn clear(&self, username: &str) {
        self.entries.remove(username);
    }

    async fn state(&self, username: &str) -> AttemptState {
        self.state_at(username, Instant::now())
    }
}
