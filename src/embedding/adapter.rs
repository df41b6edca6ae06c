//! Embedding adapter bridging orchestrator calls to the Gemini embedding endpoints

use super::cache::EmbeddingCache;
use super::models::EmbeddingInput;
use super::EmbeddingProvider;
use crate::config::{EmbeddingConfig, EmbeddingMode};
use crate::error::{EmbeddingError, Result};
use crate::gemini::GeminiClient;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Adapter turning text into fixed-width `f32` vectors, one row per input.
///
/// Row order always matches input order. In `Sequential` mode every text
/// costs one `embedContent` round trip, issued one at a time with no
/// overlap; in `Batched` mode chunks of `batch_size` texts share one
/// `batchEmbedContents` round trip. Failures propagate to the caller with
/// no local recovery.
pub struct EmbeddingAdapter {
    client: Arc<GeminiClient>,
    config: EmbeddingConfig,
    cache: Option<Arc<EmbeddingCache>>,
}

impl EmbeddingAdapter {
    /// Create a new embedding adapter over the shared client
    pub fn new(client: Arc<GeminiClient>, config: EmbeddingConfig) -> Self {
        let cache = config.cache_enabled.then(|| {
            Arc::new(EmbeddingCache::new(
                config.cache_size,
                Duration::from_secs(config.cache_ttl_secs),
            ))
        });

        Self {
            client,
            config,
            cache,
        }
    }

    /// Embed one or many texts, returning one row per input in input order
    pub async fn embed(&self, input: impl Into<EmbeddingInput>) -> Result<Vec<Vec<f32>>> {
        let texts = input.into().into_batch();
        self.embed_batch(&texts).await
    }

    fn cache_key(text: &str) -> String {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        format!("emb_{:x}", hasher.finalize())
    }

    /// One `embedContent` round trip for one text, consulting the cache first
    async fn fetch_one(&self, text: &str) -> Result<Vec<f32>> {
        let key = Self::cache_key(text);

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key).await {
                debug!("Cache hit for embedding");
                return Ok(hit);
            }
        }

        let response = self
            .client
            .embed_content(&self.config.model, text)
            .await?;
        let values = response.embedding.values;

        if let Some(cache) = &self.cache {
            cache.put(key, values.clone()).await;
        }

        Ok(values)
    }

    /// One `batchEmbedContents` round trip for a chunk of texts
    async fn fetch_chunk(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let response = self
            .client
            .batch_embed_contents(&self.config.model, texts)
            .await?;

        if response.embeddings.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: response.embeddings.len(),
            }
            .into());
        }

        Ok(response.embeddings.into_iter().map(|e| e.values).collect())
    }

    async fn embed_batched(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut rows: Vec<Option<Vec<f32>>> = vec![None; texts.len()];
        let mut uncached_texts = Vec::new();
        let mut uncached_indices = Vec::new();

        if let Some(cache) = &self.cache {
            for (i, text) in texts.iter().enumerate() {
                if let Some(hit) = cache.get(&Self::cache_key(text)).await {
                    rows[i] = Some(hit);
                } else {
                    uncached_texts.push(text.clone());
                    uncached_indices.push(i);
                }
            }
        } else {
            uncached_texts = texts.to_vec();
            uncached_indices = (0..texts.len()).collect();
        }

        if !uncached_texts.is_empty() {
            debug!(count = uncached_texts.len(), "Fetching uncached embeddings");

            let mut fetched = Vec::with_capacity(uncached_texts.len());
            for chunk in uncached_texts.chunks(self.config.batch_size) {
                fetched.extend(self.fetch_chunk(chunk).await?);
            }

            for (i, values) in uncached_indices.into_iter().zip(fetched) {
                if let Some(cache) = &self.cache {
                    cache.put(Self::cache_key(&texts[i]), values.clone()).await;
                }
                rows[i] = Some(values);
            }
        }

        rows.into_iter()
            .map(|row| row.ok_or_else(|| EmbeddingError::MissingEmbedding.into()))
            .collect()
    }
}

#[async_trait]
impl EmbeddingProvider for EmbeddingAdapter {
    async fn embed_single(&self, text: &str) -> Result<Vec<f32>> {
        self.fetch_one(text).await
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        match self.config.mode {
            EmbeddingMode::Sequential => {
                // One call at a time; row n deterministically belongs to input n
                let mut rows = Vec::with_capacity(texts.len());
                for text in texts {
                    rows.push(self.fetch_one(text).await?);
                }
                Ok(rows)
            }
            EmbeddingMode::Batched => self.embed_batched(texts).await,
        }
    }

    fn embedding_dimension(&self) -> usize {
        self.config.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_deterministic() {
        let key1 = EmbeddingAdapter::cache_key("same text");
        let key2 = EmbeddingAdapter::cache_key("same text");
        let key3 = EmbeddingAdapter::cache_key("other text");

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
    }
}
