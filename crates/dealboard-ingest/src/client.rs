//! Upstream feed client with TTL-based snapshot caching.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use dealboard_core::DealFeed;

use crate::source::{DealSource, FeedError, Snapshot};

/// Default upstream feed URL.
pub const DEFAULT_FEED_URL: &str = "https://eccdn.com.au/misc/challengedata.json";

/// Default snapshot time-to-live.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// A cached snapshot with its fetch time.
struct CachedSnapshot {
    snapshot: Snapshot,
    fetched_at: Instant,
}

impl CachedSnapshot {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// HTTP client for the upstream restaurant feed.
///
/// Holds the most recent snapshot and serves it until the TTL lapses,
/// then refetches and swaps the whole snapshot. Readers already holding
/// a snapshot keep their copy; nothing is mutated in place.
pub struct FeedClient {
    client: reqwest::Client,
    url: String,
    ttl: Duration,
    cache: RwLock<Option<CachedSnapshot>>,
}

impl FeedClient {
    /// Creates a client for the default upstream feed.
    pub fn new() -> Result<Self, FeedError> {
        Self::with_config(DEFAULT_FEED_URL, DEFAULT_CACHE_TTL)
    }

    /// Creates a client for a specific feed URL and cache TTL.
    pub fn with_config(url: impl Into<String>, ttl: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("Dealboard/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            ttl,
            cache: RwLock::new(None),
        })
    }

    /// Fetches a fresh snapshot from upstream, bypassing the cache.
    async fn fetch(&self) -> Result<Snapshot, FeedError> {
        info!(url = %self.url, "fetching restaurant feed");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "upstream feed returned an error status");
            return Err(FeedError::Unavailable(format!(
                "upstream returned HTTP {}",
                response.status()
            )));
        }

        let feed: DealFeed = response
            .json()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))?;

        if feed.restaurants.is_empty() {
            return Err(FeedError::Unavailable(
                "upstream payload contained no restaurants".to_string(),
            ));
        }

        info!(restaurants = feed.restaurants.len(), "feed snapshot refreshed");
        Ok(Arc::new(feed.restaurants))
    }
}

#[async_trait]
impl DealSource for FeedClient {
    async fn snapshot(&self) -> Result<Snapshot, FeedError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_fresh(self.ttl) {
                    debug!(
                        age_ms = cached.fetched_at.elapsed().as_millis() as u64,
                        "returning cached snapshot"
                    );
                    return Ok(cached.snapshot.clone());
                }
            }
        }

        let mut cache = self.cache.write().await;
        // Another task may have refreshed while we waited for the lock.
        if let Some(cached) = cache.as_ref() {
            if cached.is_fresh(self.ttl) {
                return Ok(cached.snapshot.clone());
            }
        }

        let snapshot = self.fetch().await?;
        *cache = Some(CachedSnapshot {
            snapshot: snapshot.clone(),
            fetched_at: Instant::now(),
        });
        Ok(snapshot)
    }
}
