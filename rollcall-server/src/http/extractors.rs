//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::StudentId;

/// Extract and decode a student id from the path
#[derive(Debug, Clone, Copy)]
pub struct StudentIdParam(pub StudentId);

impl<S> FromRequestParts<S> for StudentIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        let id = raw
            .parse::<StudentId>()
            .map_err(|_| ApiError::bad_request(format!("invalid student id '{}'", raw)))?;

        Ok(Self(id))
    }
}

/// JSON request body, decoded whatever the `Content-Type` header says.
///
/// Only failures to read or decode the body are rejected (400).
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::bad_request(format!("invalid JSON body: {}", e)))?;

        Ok(Self(value))
    }
}
