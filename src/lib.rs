//! Gemini Bridge - completion and embedding adapters for RAG orchestrators
//!
//! This library bridges the generic call shapes a retrieval-augmented
//! generation engine expects (a model completion function and an embedding
//! function) to the Google Gemini API. The orchestrator itself - ingestion,
//! chunking, graph and vector storage, retrieval ranking - is an external
//! collaborator; this crate only owns the translation at the boundary.
//!
//! ## Features
//!
//! - **Completion Adapter**: system instruction + prior turns + new prompt
//!   in, plain text out, one `generateContent` call per invocation
//! - **Embedding Adapter**: one or many texts in, one fixed-width `f32`
//!   vector per text out, order-preserving
//! - **Explicit failure contract**: no retry or local recovery; every
//!   transport or provider error reaches the caller through `Result`
//! - **Shared client handle**: one process-wide `GeminiClient`, constructed
//!   once and passed by reference into both adapters
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gemini_bridge::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads GOOGLE_API_KEY; validation fails before any network call
//!     let config = Config::default_config();
//!     config.validate()?;
//!
//!     let client = Arc::new(GeminiClient::new(&config.gemini)?);
//!     let completion = CompletionAdapter::new(client.clone(), config.completion);
//!     let embedding = EmbeddingAdapter::new(client, config.embedding);
//!
//!     let vectors = embedding.embed("some document text").await?;
//!     let answer = completion
//!         .complete(CompletionRequest::new("What is 2+2?"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod completion;
pub mod config;
pub mod embedding;
pub mod error;
pub mod gemini;
pub mod observability;

pub use config::Config;
pub use error::{BridgeError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::completion::{
        CompletionAdapter, CompletionProvider, CompletionRequest, ConversationTurn, HistoryEntry,
    };
    pub use crate::config::Config;
    pub use crate::embedding::{EmbeddingAdapter, EmbeddingInput, EmbeddingProvider};
    pub use crate::error::{BridgeError, Result};
    pub use crate::gemini::GeminiClient;
}
