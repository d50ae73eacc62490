//! bcrypt password hashing and verification.

use jobtrail_core::error::{AppError, ErrorKind};
use jobtrail_core::result::AppResult;

/// Lowest work factor bcrypt accepts.
pub const MIN_COST: u32 = 4;
/// Highest work factor bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Plaintext hashed once at construction to produce the dummy hash.
const DUMMY_PASSWORD: &str = "jobtrail-unknown-user";

/// Hashes and verifies passwords using bcrypt.
///
/// Each call is CPU-bound; async callers should run it on a blocking thread.
#[derive(Clone)]
pub struct PasswordHasher {
    /// bcrypt work factor.
    cost: u32,
    /// Hash verified against when the user does not exist, so that unknown
    /// usernames cost the same as wrong passwords.
    dummy_hash: String,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("cost", &self.cost)
            .finish()
    }
}

impl PasswordHasher {
    /// Creates a hasher with the given work factor.
    ///
    /// Fails with a configuration error when `cost` is outside `4..=31`.
    pub fn new(cost: u32) -> AppResult<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(AppError::configuration(format!(
                "bcrypt cost must be between {MIN_COST} and {MAX_COST}, got {cost}"
            )));
        }

        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to prepare dummy hash", e)
        })?;

        Ok(Self { cost, dummy_hash })
    }

    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Password hashing failed", e))
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// A malformed hash never matches.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }

    /// Burns one verification against the dummy hash. Always returns `false`.
    pub fn verify_dummy(&self, password: &str) -> bool {
        let _ = bcrypt::verify(password, &self.dummy_hash);
        false
    }
}
