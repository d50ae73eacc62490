//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use jobtrail_core::error::{AppError, ErrorKind};

/// Error code returned for every infrastructure failure.
pub const INTERNAL_ERROR_CODE: &str = "InternalError";

/// Message returned for every infrastructure failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Standard API error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::MissingFields
        | ErrorKind::ValidationFailed
        | ErrorKind::InvalidUsername
        | ErrorKind::WeakPassword => StatusCode::BAD_REQUEST,
        ErrorKind::DuplicateUsername => StatusCode::CONFLICT,
        ErrorKind::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
        ErrorKind::InvalidCredentials
        | ErrorKind::InvalidPassword
        | ErrorKind::AuthenticationRequired
        | ErrorKind::InvalidOrExpiredToken => StatusCode::UNAUTHORIZED,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Io
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<&AppError> for ApiErrorResponse {
    fn from(err: &AppError) -> Self {
        if err.kind.is_infrastructure() {
            return Self {
                error: INTERNAL_ERROR_CODE.to_string(),
                message: INTERNAL_ERROR_MESSAGE.to_string(),
                details: None,
            };
        }

        Self {
            error: err.kind.as_str().to_string(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(self.kind);

        if self.kind.is_infrastructure() {
            tracing::error!(
                kind = %self.kind,
                error = %self.message,
                source = ?self.source,
                "Internal server error"
            );
        }

        (status, Json(ApiErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::WeakPassword), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::DuplicateUsername), StatusCode::CONFLICT);
        assert_eq!(
            status_for(ErrorKind::TooManyAttempts),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_for(ErrorKind::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(ErrorKind::InvalidOrExpiredToken),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorKind::Database),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_infrastructure_details_are_hidden() {
        let err = AppError::database("UNIQUE constraint failed: secret_table.column")
            .with_details(serde_json::json!({"sql": "SELECT 1"}));
        let body = ApiErrorResponse::from(&err);

        assert_eq!(body.error, INTERNAL_ERROR_CODE);
        assert_eq!(body.message, INTERNAL_ERROR_MESSAGE);
        assert!(body.details.is_none());
    }

    #[test]
    fn test_domain_error_body() {
        let body = ApiErrorResponse::from(&AppError::invalid_credentials());
        assert_eq!(body.error, "InvalidCredentials");
        assert_eq!(body.message, "Invalid username or password");

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("details").is_none());
    }
}
