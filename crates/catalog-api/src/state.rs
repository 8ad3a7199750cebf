//! Application state shared across all handlers.

use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_database::ProductStore;

/// Application state passed to every handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Product repository (PostgreSQL or in-memory).
    pub products: ProductStore,
}

impl AppState {
    /// Bundle configuration and store into router state.
    pub fn new(config: AppConfig, products: ProductStore) -> Self {
        Self {
            config: Arc::new(config),
            products,
        }
    }
}
