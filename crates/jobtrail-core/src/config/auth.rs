//! Authentication configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped in the default configuration.
pub const DEFAULT_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// bcrypt work factor.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Consecutive failed logins before lockout.
    #[serde(default = "default_max_failed")]
    pub max_failed_attempts: u32,
    /// Lockout window in minutes, measured from the last failure.
    #[serde(default = "default_lockout")]
    pub lockout_minutes: u64,
}

impl AuthConfig {
    /// Returns the lockout window as a [`Duration`].
    pub fn lockout_window(&self) -> Duration {
        Duration::from_secs(self.lockout_minutes * 60)
    }

    /// Returns `true` if the signing secret is still the shipped placeholder.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl(),
            bcrypt_cost: default_bcrypt_cost(),
            password_min_length: default_password_min(),
            max_failed_attempts: default_max_failed(),
            lockout_minutes: default_lockout(),
        }
    }
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    24 * 7
}

fn default_bcrypt_cost() -> u32 {
    10
}

fn default_password_min() -> usize {
    8
}

fn default_max_failed() -> u32 {
    5
}

fn default_lockout() -> u64 {
    15
}
