//! Completion adapter for the Gemini generation endpoint

pub mod adapter;
pub mod models;

pub use adapter::{assemble_contents, CompletionAdapter};
pub use models::{CompletionRequest, ConversationTurn, HistoryEntry, TurnRole};

use crate::error::Result;
use async_trait::async_trait;

/// Trait for completion providers
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate text for the current prompt, given optional guidance and
    /// prior conversation turns
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
