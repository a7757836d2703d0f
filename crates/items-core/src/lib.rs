//! Data model and in-memory store for the items service.
//!
//! [`Item`] is the only resource type. [`ItemStore`] owns the mapping from
//! item ID to record together with the lock that serializes access to it.

pub mod item;
pub mod store;

pub use item::Item;
pub use store::ItemStore;
