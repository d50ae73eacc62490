//! Username and password policy checks for new credentials.

use jobtrail_core::config::AuthConfig;
use jobtrail_core::error::AppError;

/// Minimum username length.
pub const USERNAME_MIN_LENGTH: usize = 3;
/// Maximum username length.
pub const USERNAME_MAX_LENGTH: usize = 50;

/// Validates usernames and passwords supplied at registration and
/// password change.
#[derive(Debug, Clone)]
pub struct CredentialPolicy {
    /// Minimum password length in characters.
    password_min_length: usize,
}

impl CredentialPolicy {
    /// Creates a policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            password_min_length: config.password_min_length,
        }
    }

    /// Checks username length and charset (`[A-Za-z0-9_-]`).
    pub fn validate_username(&self, username: &str) -> Result<(), AppError> {
        let len = username.chars().count();
        if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&len) {
            return Err(AppError::invalid_username(format!(
                "Username must be between {USERNAME_MIN_LENGTH} and {USERNAME_MAX_LENGTH} characters"
            )));
        }

        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AppError::invalid_username(
                "Username may only contain letters, digits, underscores and hyphens",
            ));
        }

        Ok(())
    }

    /// Checks password strength. Only length is enforced.
    pub fn validate_password(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.password_min_length {
            return Err(AppError::weak_password(format!(
                "Password must be at least {} characters long",
                self.password_min_length
            )));
        }
        Ok(())
    }
}
