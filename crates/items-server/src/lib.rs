//! HTTP/JSON API server for the in-memory item store.
//!
//! Exposes CRUD over a single resource type at `/items` and `/items/{id}`.
//! This crate contains the router, handlers, request extraction, error
//! mapping, configuration and logging setup used by the `items-server`
//! binary.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod state;
