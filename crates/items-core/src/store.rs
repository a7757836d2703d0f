//! In-memory item store.
//!
//! [`ItemStore`] is a shared handle over a `HashMap<String, Item>` behind a
//! single `tokio::sync::Mutex`. Every operation takes the lock for the
//! duration of the map access only, so all operations are atomic with
//! respect to each other. Cloning the handle shares the same map.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::item::Item;

/// Shared, lock-guarded mapping from item ID to [`Item`].
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Arc<Mutex<HashMap<String, Item>>>,
}

impl ItemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the item stored under `id`, if any.
    pub async fn get(&self, id: &str) -> Option<Item> {
        self.items.lock().await.get(id).cloned()
    }

    /// Inserts `item` under `id`, replacing any existing entry.
    pub async fn put(&self, id: impl Into<String>, item: Item) {
        let id = id.into();
        let replaced = self.items.lock().await.insert(id.clone(), item).is_some();
        debug!(item_id = %id, replaced, "stored item");
    }

    /// Removes the item stored under `id`. Returns `false` if there was none.
    pub async fn delete(&self, id: &str) -> bool {
        let removed = self.items.lock().await.remove(id).is_some();
        if removed {
            debug!(item_id = %id, "deleted item");
        }
        removed
    }

    /// Returns every stored item in unspecified order.
    pub async fn list(&self) -> Vec<Item> {
        self.items.lock().await.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }
}
