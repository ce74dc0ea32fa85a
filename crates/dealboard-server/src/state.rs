//! Application state for the API server.

use std::sync::Arc;

use dealboard_ingest::DealSource;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Snapshot provider for the restaurant dataset.
    pub feed: Arc<dyn DealSource>,
}

impl AppState {
    /// Creates application state around a snapshot provider.
    pub fn new(feed: Arc<dyn DealSource>) -> Self {
        Self { feed }
    }
}
