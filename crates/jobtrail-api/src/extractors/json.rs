//! `ValidatedJson` extractor: parses a JSON body and runs its `validator` rules
//! before the handler sees it.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use jobtrail_core::error::{AppError, ErrorKind};

/// A JSON body that parsed and passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            AppError::missing_fields("Request body is missing required fields or is not valid JSON")
                .with_details(serde_json::json!({ "body": [rejection.body_text()] }))
        })?;

        value.validate().map_err(into_app_error)?;
        Ok(Self(value))
    }
}

/// Converts validation failures into an error with a field → messages map.
fn into_app_error(errors: ValidationErrors) -> AppError {
    let mut missing = false;
    let mut details: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            missing |= error.code == "required";
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value ({})", error.code));
            details.entry(field.to_string()).or_default().push(message);
        }
    }

    let (kind, message) = if missing {
        (ErrorKind::MissingFields, "Required fields are missing")
    } else {
        (ErrorKind::ValidationFailed, "Request validation failed")
    };

    AppError::new(kind, message).with_details(serde_json::json!(details))
}
