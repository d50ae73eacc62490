//! Auth service: register, login, change-password, and logout flows.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use jobtrail_core::config::AuthConfig;
use jobtrail_core::error::{AppError, ErrorKind};
use jobtrail_core::result::AppResult;
use jobtrail_core::traits::AttemptTracker;
use jobtrail_entity::user::UserSummary;

use crate::jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenDenylist};
use crate::password::{CredentialPolicy, PasswordHasher};
use crate::store::CredentialStore;

/// Result of a successful register or login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AuthOutcome {
    /// Newly issued bearer token.
    pub token: IssuedToken,
    /// The authenticated user.
    pub user: UserSummary,
}

/// Composes the credential store, hasher, tracker, and token codec.
#[derive(Clone)]
pub struct AuthService {
    /// Credential persistence.
    store: Arc<dyn CredentialStore>,
    /// Failed-login tracker.
    tracker: Arc<dyn AttemptTracker>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Username/password rules.
    policy: CredentialPolicy,
    /// Token issuer.
    encoder: JwtEncoder,
    /// Token verifier.
    decoder: JwtDecoder,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("hasher", &self.hasher)
            .field("policy", &self.policy)
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl AuthService {
    /// Creates a new auth service from its parts.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        tracker: Arc<dyn AttemptTracker>,
        hasher: Arc<PasswordHasher>,
        policy: CredentialPolicy,
        encoder: JwtEncoder,
        decoder: JwtDecoder,
    ) -> Self {
        Self {
            store,
            tracker,
            hasher,
            policy,
            encoder,
            decoder,
        }
    }

    /// Creates an auth service whose hasher, policy, and token codec come
    /// from configuration, with a fresh denylist.
    pub fn from_config(
        store: Arc<dyn CredentialStore>,
        tracker: Arc<dyn AttemptTracker>,
        config: &AuthConfig,
    ) -> AppResult<Self> {
        Ok(Self::new(
            store,
            tracker,
            Arc::new(PasswordHasher::new(config.bcrypt_cost)?),
            CredentialPolicy::new(config),
            JwtEncoder::new(config),
            JwtDecoder::new(config, Arc::new(TokenDenylist::new())),
        ))
    }

    /// Registers a new user and issues a token.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<AuthOutcome> {
        self.policy.validate_username(username)?;
        self.policy.validate_password(password)?;

        let password_hash = self.hash_blocking(password).await?;

        let user = self
            .store
            .create(username, &password_hash)
            .await
            .inspect_err(|e| {
                if e.kind == ErrorKind::DuplicateUsername {
                    warn!(username = %username, "Registration rejected: username taken");
                }
            })?;

        let token = self.encoder.issue(user.id, &user.username)?;
        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(AuthOutcome {
            token,
            user: user.summary(),
        })
    }

    /// Performs the login flow:
    ///
    /// 1. Reserve the attempt, refusing locked-out usernames without
    ///    touching the store
    /// 2. Look up the user and verify the password
    /// 3. On failure keep the reserved attempt and return the merged
    ///    credential error
    /// 4. On success clear the counter and issue a token
    ///
    /// The attempt is counted before bcrypt runs, so concurrent guesses
    /// cannot all pass the lockout check while verification is pending.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AuthOutcome> {
        let Some(attempt) = self.tracker.begin_attempt(username).await else {
            warn!(username = %username, "Login refused: locked out");
            return Err(AppError::too_many_attempts());
        };

        let user = self.store.find_by_username(username).await?;

        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let verified = self.verify_blocking(password, stored_hash).await?;

        let user = match user {
            Some(user) if verified => user,
            _ => {
                warn!(
                    username = %username,
                    failures = attempt.failures(),
                    locked = attempt.is_locked(),
                    "Login failed"
                );
                return Err(AppError::invalid_credentials());
            }
        };

        self.tracker.clear(username).await;
        let token = self.encoder.issue(user.id, &user.username)?;
        info!(user_id = %user.id, username = %user.username, "Login successful");

        Ok(AuthOutcome {
            token,
            user: user.summary(),
        })
    }

    /// Replaces the password of an already-authenticated user.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        let verified = self
            .verify_blocking(current_password, Some(user.password_hash.clone()))
            .await?;
        if !verified {
            warn!(user_id = %user_id, "Password change rejected: wrong current password");
            return Err(AppError::invalid_password());
        }

        self.policy.validate_password(new_password)?;

        let new_hash = self.hash_blocking(new_password).await?;
        self.store.update_password_hash(user_id, &new_hash).await?;

        info!(user_id = %user_id, "Password changed");
        Ok(())
    }

    /// Revokes the presented token.
    pub fn logout(&self, claims: &Claims) {
        self.decoder.revoke(claims);
        info!(user_id = %claims.sub, jti = %claims.jti, "Logged out");
    }

    /// Verifies a bearer token and returns its claims.
    pub fn authenticate(&self, token: &str) -> AppResult<Claims> {
        self.decoder.verify(token)
    }

    /// Returns the public profile of a user.
    pub async fn me(&self, user_id: Uuid) -> AppResult<UserSummary> {
        self.store
            .find_by_id(user_id)
            .await?
            .map(|u| u.summary())
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Returns the token decoder.
    pub fn decoder(&self) -> &JwtDecoder {
        &self.decoder
    }

    async fn hash_blocking(&self, password: &str) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Hashing task failed", e))?
    }

    /// Verifies on a blocking thread. `None` verifies against the dummy
    /// hash so an unknown user costs one bcrypt round like a known one.
    async fn verify_blocking(&self, password: &str, hash: Option<String>) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || match hash {
            Some(hash) => hasher.verify(&password, &hash),
            None => hasher.verify_dummy(&password),
        })
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Verification task failed", e))
    }
}
