//! JWT token validation and denylist checking.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use jobtrail_core::config::AuthConfig;
use jobtrail_core::error::AppError;

use super::claims::Claims;
use super::denylist::TokenDenylist;

/// Validates bearer tokens and checks the logout denylist.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Revoked token IDs.
    denylist: Arc<TokenDenylist>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .field("revoked", &self.denylist.len())
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, denylist: Arc<TokenDenylist>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            denylist,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Malformed, forged, expired, and revoked tokens all yield
    /// `InvalidOrExpiredToken`; the precise reason is only logged.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "Token rejected");
                AppError::invalid_token()
            })?
            .claims;

        if self.denylist.is_revoked(&claims.jti) {
            debug!(jti = %claims.jti, "Token rejected: revoked");
            return Err(AppError::invalid_token());
        }

        Ok(claims)
    }

    /// Revokes the token described by `claims` until it expires.
    pub fn revoke(&self, claims: &Claims) {
        self.denylist.revoke(claims.jti, claims.exp);
    }

    /// Returns the shared denylist.
    pub fn denylist(&self) -> &Arc<TokenDenylist> {
        &self.denylist
    }
}
