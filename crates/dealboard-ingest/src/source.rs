//! The snapshot-provider seam between ingestion and the query core.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use dealboard_core::Restaurant;

/// An immutable point-in-time copy of the restaurant dataset. Handed out
/// by reference counting; a refresh swaps in a new Arc and never mutates
/// a snapshot already in a reader's hands.
pub type Snapshot = Arc<Vec<Restaurant>>;

/// Errors obtaining a snapshot from upstream.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The upstream feed could not be reached or returned no usable data.
    #[error("upstream feed unavailable: {0}")]
    Unavailable(String),

    /// The upstream payload did not decode as a restaurant feed.
    #[error("failed to decode upstream payload: {0}")]
    Decode(String),
}

/// Capability to supply the current dataset snapshot.
///
/// Queries depend on this trait rather than on a concrete client, so
/// tests substitute a [`StaticSource`] and never touch the network.
#[async_trait]
pub trait DealSource: Send + Sync {
    /// Returns the current snapshot, fetching or refreshing as needed.
    async fn snapshot(&self) -> Result<Snapshot, FeedError>;
}

/// A source backed by a fixed in-memory snapshot. Used in tests and for
/// offline runs against a canned dataset.
#[derive(Debug, Clone)]
pub struct StaticSource {
    snapshot: Snapshot,
}

impl StaticSource {
    /// Creates a source that always returns the given restaurants.
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            snapshot: Arc::new(restaurants),
        }
    }

    /// Creates a source with no restaurants at all.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl DealSource for StaticSource {
    async fn snapshot(&self) -> Result<Snapshot, FeedError> {
        Ok(self.snapshot.clone())
    }
}
