use std::sync::Arc;

use airtrack_store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (both fields are behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The record store owning all flight and airport tables.
    pub store: Arc<Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
