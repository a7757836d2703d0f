//! Item handlers for the collection and single-item endpoints.
//!
//! The single-item ID is the path remainder after `/items/`. `/items/{id}`
//! binds it from the path; `/items/` is the empty ID and is served by the
//! `*_empty_id` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use items_core::Item;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Lists all items in unspecified order.
///
/// `GET /items`
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list().await)
}

/// Stores an item under the ID given in its body, overwriting any existing
/// item with that ID.
///
/// `POST /items`
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(item): JsonBody<Item>,
) -> (StatusCode, Json<Item>) {
    state.store.put(item.id.clone(), item.clone()).await;
    tracing::info!(item_id = %item.id, "item created");
    (StatusCode::CREATED, Json(item))
}

/// `GET /items/{id}`
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    fetch(&state, id).await
}

/// `GET /items/`
pub async fn get_empty_id_item(State(state): State<AppState>) -> Result<Json<Item>, ApiError> {
    fetch(&state, String::new()).await
}

/// `PUT /items/{id}`
pub async fn replace_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(item): JsonBody<Item>,
) -> Json<Item> {
    replace(&state, id, item).await
}

/// `PUT /items/`
pub async fn replace_empty_id_item(
    State(state): State<AppState>,
    JsonBody(item): JsonBody<Item>,
) -> Json<Item> {
    replace(&state, String::new(), item).await
}

/// `DELETE /items/{id}`
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    remove(&state, id).await
}

/// `DELETE /items/`
pub async fn delete_empty_id_item(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    remove(&state, String::new()).await
}

async fn fetch(state: &AppState, id: String) -> Result<Json<Item>, ApiError> {
    state
        .store
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("item '{id}'")))
}

/// Stores the body under `id`, creating the item if it is missing. `id`
/// replaces whatever ID the body carried.
async fn replace(state: &AppState, id: String, item: Item) -> Json<Item> {
    let item = item.with_id(id);
    state.store.put(item.id.clone(), item.clone()).await;
    tracing::info!(item_id = %item.id, "item replaced");
    Json(item)
}

async fn remove(state: &AppState, id: String) -> Result<StatusCode, ApiError> {
    if !state.store.delete(&id).await {
        return Err(ApiError::NotFound(format!("item '{id}'")));
    }
    tracing::info!(item_id = %id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}
