//! In-memory set of revoked token IDs.

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

/// Revoked JWT IDs, each kept until the token would have expired anyway.
///
/// Per-process only: a restart forgets every revocation.
#[derive(Debug, Default)]
pub struct TokenDenylist {
    /// `jti` → expiration (seconds since epoch).
    revoked: DashMap<Uuid, i64>,
}

impl TokenDenylist {
    /// Creates an empty denylist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Revokes `jti` until `exp`. Already-expired tokens are not stored.
    pub fn revoke(&self, jti: Uuid, exp: i64) {
        if exp > Utc::now().timestamp() {
            self.revoked.insert(jti, exp);
        }
    }

    /// Returns `true` if `jti` is revoked. Drops the entry once it has expired.
    pub fn is_revoked(&self, jti: &Uuid) -> bool {
        let now = Utc::now().timestamp();
        if self.revoked.remove_if(jti, |_, exp| *exp <= now).is_some() {
            return false;
        }
        self.revoked.contains_key(jti)
    }

    /// Removes every entry whose token has expired and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now().timestamp();
        let mut removed = 0;
        self.revoked.retain(|_, exp| {
            let keep = *exp > now;
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    /// Number of revoked tokens currently held.
    pub fn len(&self) -> usize {
        self.revoked.len()
    }

    /// Returns `true` if nothing is revoked.
    pub fn is_empty(&self) -> bool {
        self.revoked.is_empty()
    }
}
