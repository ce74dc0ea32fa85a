//! Dealboard Ingest - Upstream feed client and snapshot provider.
//!
//! Supplies the query core with immutable restaurant snapshots. The
//! [`DealSource`] trait is the injection point: production wires in the
//! TTL-cached [`FeedClient`], tests wire in a [`StaticSource`]. A
//! snapshot is refreshed by swapping the whole `Arc`, never by mutating
//! data a concurrent query might be reading.

pub mod client;
pub mod source;

pub use client::{FeedClient, DEFAULT_CACHE_TTL, DEFAULT_FEED_URL};
pub use source::{DealSource, FeedError, Snapshot, StaticSource};
