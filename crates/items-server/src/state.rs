//! Application state shared by all handlers.
//!
//! [`AppState`] carries the injected [`ItemStore`]. The store owns its own
//! lock, so cloning the state per request only clones a handle.

use items_core::ItemStore;

/// Shared application state for the HTTP server.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The item store. All handlers go through its lock.
    pub store: ItemStore,
}

impl AppState {
    /// Creates state backed by a fresh, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates state around an existing store, e.g. one pre-seeded by a test.
    pub fn with_store(store: ItemStore) -> Self {
        AppState { store }
    }
}
