//! Unified application error types for JobTrail.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The [`ErrorKind`] names double as
//! the machine-readable `error` field of API failure bodies.

use std::fmt;
use thiserror::Error;

/// Error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A request body was missing required fields or could not be parsed.
    MissingFields,
    /// A non-credential request field failed validation.
    ValidationFailed,
    /// The username does not satisfy the length/charset policy.
    InvalidUsername,
    /// The password does not satisfy the strength policy.
    WeakPassword,
    /// A user with the requested username already exists.
    DuplicateUsername,
    /// Unknown username or wrong password (deliberately merged).
    InvalidCredentials,
    /// The username is locked out after too many failed logins.
    TooManyAttempts,
    /// The current password supplied to change-password is wrong.
    InvalidPassword,
    /// No usable bearer token was presented.
    AuthenticationRequired,
    /// The bearer token is malformed, forged, expired, or revoked.
    InvalidOrExpiredToken,
    /// The requested resource was not found.
    NotFound,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A local I/O error occurred.
    Io,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Returns the stable identifier used in API error bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingFields => "MissingFields",
            Self::ValidationFailed => "ValidationFailed",
            Self::InvalidUsername => "InvalidUsername",
            Self::WeakPassword => "WeakPassword",
            Self::DuplicateUsername => "DuplicateUsername",
            Self::InvalidCredentials => "InvalidCredentials",
            Self::TooManyAttempts => "TooManyAttempts",
            Self::InvalidPassword => "InvalidPassword",
            Self::AuthenticationRequired => "AuthenticationRequired",
            Self::InvalidOrExpiredToken => "InvalidOrExpiredToken",
            Self::NotFound => "NotFound",
            Self::Database => "Database",
            Self::Configuration => "Configuration",
            Self::Serialization => "Serialization",
            Self::Io => "Io",
            Self::Internal => "Internal",
        }
    }

    /// Returns `true` for infrastructure failures whose details must not
    /// reach the client.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::Database | Self::Configuration | Self::Serialization | Self::Io | Self::Internal
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unified application error used throughout JobTrail.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional structured details (e.g. per-field validation messages).
    pub details: Option<serde_json::Value>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            source: Some(Box::new(source)),
        }
    }

    /// Attach structured details to this error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Create a missing-fields error.
    pub fn missing_fields(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingFields, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationFailed, message)
    }

    /// Create an invalid-username error.
    pub fn invalid_username(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidUsername, message)
    }

    /// Create a weak-password error.
    pub fn weak_password(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::WeakPassword, message)
    }

    /// Create a duplicate-username error.
    pub fn duplicate_username(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateUsername, message)
    }

    /// Create the merged unknown-user / wrong-password error.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "Invalid username or password")
    }

    /// Create a lockout error.
    pub fn too_many_attempts() -> Self {
        Self::new(
            ErrorKind::TooManyAttempts,
            "Too many failed login attempts. Please try again later.",
        )
    }

    /// Create a wrong-current-password error.
    pub fn invalid_password() -> Self {
        Self::new(ErrorKind::InvalidPassword, "Current password is incorrect")
    }

    /// Create an authentication-required error.
    pub fn authentication_required(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AuthenticationRequired, message)
    }

    /// Create an invalid-or-expired-token error.
    pub fn invalid_token() -> Self {
        Self::new(ErrorKind::InvalidOrExpiredToken, "Invalid or expired token")
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            details: self.details.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
