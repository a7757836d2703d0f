//! JSON body extraction that reports every decode failure as `400`.
//!
//! axum's own `Json` extractor answers `415` for a missing content type and
//! `422` for a well-formed body of the wrong shape. [`JsonBody`] ignores the
//! content type and maps any failure to [`ApiError::BadRequest`].

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Extracts and decodes a JSON object body into `T`.
#[derive(Debug, Clone)]
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
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        decode(&bytes).map(JsonBody)
    }
}

/// Decodes `bytes` as a JSON object into `T`.
///
/// Structs also deserialize from JSON arrays under serde's derive, so the
/// object check happens on the parsed value first.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    if !value.is_object() {
        return Err(ApiError::BadRequest("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::BadRequest(e.to_string()))
}
