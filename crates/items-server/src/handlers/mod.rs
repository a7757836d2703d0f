//! HTTP handler modules for the items API.
//!
//! Handlers decode the request, call a single [`ItemStore`] operation and
//! encode the response. Decoding and encoding both happen outside the
//! store lock.
//!
//! [`ItemStore`]: items_core::ItemStore

pub mod health;
pub mod items;

use axum::extract::Request;
use axum::http::{Method, Uri};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;

/// Router-level fallback for paths no route matches.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "no route");
    ApiError::NotFound(format!("no route for {uri}"))
}

/// Method-level fallback for verbs a matched route does not support.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "method not allowed");
    ApiError::MethodNotAllowed
}

/// Route middleware rejecting `HEAD` and `OPTIONS` on matched routes.
///
/// axum answers `HEAD` on any `get` route implicitly; routes here support
/// only the verbs they register.
pub async fn reject_implicit_methods(req: Request, next: Next) -> Result<Response, ApiError> {
    if *req.method() == Method::HEAD || *req.method() == Method::OPTIONS {
        tracing::debug!(method = %req.method(), uri = %req.uri(), "method not allowed");
        return Err(ApiError::MethodNotAllowed);
    }
    Ok(next.run(req).await)
}
