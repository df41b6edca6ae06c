//! Optional caching layer for embedding vectors using moka
//!
//! Disabled by default: with the cache off, every input text costs exactly
//! one provider round trip, which is the contract the orchestrator observes.

use moka::future::Cache;
use std::time::Duration;
use tracing::{debug, info};

/// Async TTL cache for embedding vectors
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    /// Create a new cache with specified capacity and TTL
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        info!("Initializing embedding cache with max_size={}, ttl={:?}", max_size, ttl);

        let cache = Cache::builder()
            .max_capacity(max_size as u64)
            .time_to_live(ttl)
            .build();

        Self { cache }
    }

    /// Get a cached vector
    pub async fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key).await
    }

    /// Store a vector
    pub async fn put(&self, key: String, embedding: Vec<f32>) {
        debug!("Caching embedding for key: {}", key);
        self.cache.insert(key, embedding).await;
    }

    /// Drop all entries
    pub async fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }

    /// Number of live entries
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
