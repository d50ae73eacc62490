//! Path and query extractors that reject with the API error body.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use jobtrail_core::error::AppError;

/// Typed path parameters, e.g. `PathParams(id): PathParams<Uuid>`.
#[derive(Debug, Clone)]
pub struct PathParams<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::validation("Invalid path parameter")
                    .with_details(serde_json::json!({ "path": [rejection.body_text()] }))
            })?;
        Ok(Self(value))
    }
}

/// Typed query string parameters.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::validation("Invalid query string")
                    .with_details(serde_json::json!({ "query": [rejection.body_text()] }))
            })?;
        Ok(Self(value))
    }
}
