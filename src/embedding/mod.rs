//! Embedding adapter for the Gemini embedding endpoints

pub mod adapter;
pub mod cache;
pub mod models;

pub use adapter::EmbeddingAdapter;
pub use cache::EmbeddingCache;
pub use models::EmbeddingInput;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for embedding providers
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text
    async fn embed_single(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts, one row per input in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Width of the vectors this provider produces
    fn embedding_dimension(&self) -> usize;
}
