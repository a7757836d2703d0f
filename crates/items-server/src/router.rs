//! Router assembly for the items HTTP API.
//!
//! [`build_router`] wires the handlers to their routes with a tracing
//! middleware layer.

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// Routes use axum 0.8 `/{param}` path syntax; `/items/` serves the empty
/// item ID. Unsupported verbs on a known path fall through to
/// [`handlers::method_not_allowed`] (or are caught earlier by
/// [`handlers::reject_implicit_methods`] for `HEAD`/`OPTIONS`), unknown paths
/// to [`handlers::route_not_found`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/items",
            get(handlers::items::list_items)
                .post(handlers::items::create_item)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/items/",
            get(handlers::items::get_empty_id_item)
                .put(handlers::items::replace_empty_id_item)
                .delete(handlers::items::delete_empty_id_item)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/items/{id}",
            get(handlers::items::get_item)
                .put(handlers::items::replace_item)
                .delete(handlers::items::delete_item)
                .fallback(handlers::method_not_allowed),
        )
        .route_layer(middleware::from_fn(handlers::reject_implicit_methods))
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
