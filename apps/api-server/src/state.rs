//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::{MemoryPostStore, StoreConfig};

use crate::config::AppConfig;

/// Shared application state. The service is stateless between requests;
/// everything lives behind the post store handle.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Build state around an existing store handle. The test harness uses
    /// this to keep a direct handle for seeding and cross-check reads.
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// Open the store named by the configuration and build state around it.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = MemoryPostStore::open(&StoreConfig::new(&config.store_url));
        tracing::info!("Application state initialized");
        Self::new(Arc::new(store))
    }
}
