//! Completion adapter bridging orchestrator calls to `generateContent`

use super::models::{CompletionRequest, HistoryEntry};
use super::CompletionProvider;
use crate::config::CompletionConfig;
use crate::error::{CompletionError, Result};
use crate::gemini::models::{Content, GenerateContentRequest};
use crate::gemini::GeminiClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Adapter issuing exactly one `generateContent` call per completion.
///
/// No retry, caching, or rate limiting happens here; a transport or provider
/// error propagates to the caller through the returned `Result`.
pub struct CompletionAdapter {
    client: Arc<GeminiClient>,
    config: CompletionConfig,
}

impl CompletionAdapter {
    /// Create a new completion adapter over the shared client
    pub fn new(client: Arc<GeminiClient>, config: CompletionConfig) -> Self {
        Self { client, config }
    }
}

/// Resolve history entries in order and append the current prompt as the
/// final user message. History is never reordered.
pub fn assemble_contents(history: Vec<HistoryEntry>, prompt: &str) -> Vec<Content> {
    let mut contents: Vec<Content> = history
        .into_iter()
        .map(HistoryEntry::into_content)
        .collect();

    contents.push(Content::user(prompt));
    contents
}

#[async_trait]
impl CompletionProvider for CompletionAdapter {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        // extra carries orchestrator keyword options; accepted and ignored
        let CompletionRequest {
            prompt,
            system_prompt,
            history,
            ..
        } = request;

        let contents = assemble_contents(history, &prompt);
        let request = GenerateContentRequest {
            contents,
            system_instruction: system_prompt.map(Content::system),
            generation_config: None,
        };

        debug!(model = %self.config.model, "Requesting completion");
        let response = self
            .client
            .generate_content(&self.config.model, &request)
            .await?;

        let text = response.text().ok_or(CompletionError::EmptyResponse)?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::models::ConversationTurn;

    #[test]
    fn test_empty_history_yields_single_user_entry() {
        let contents = assemble_contents(vec![], "What is 2+2?");

        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].role.as_deref(), Some("user"));
        assert_eq!(contents[0].text(), "What is 2+2?");
    }

    #[test]
    fn test_assistant_turns_remapped_others_untouched() {
        let history = vec![
            ConversationTurn::user("question").into(),
            ConversationTurn::assistant("answer").into(),
        ];

        let contents = assemble_contents(history, "follow-up");

        assert_eq!(contents[0].role.as_deref(), Some("user"));
        assert_eq!(contents[1].role.as_deref(), Some("model"));
    }

    #[test]
    fn test_history_order_preserved_prompt_last() {
        let history: Vec<HistoryEntry> = vec![
            ConversationTurn::user("first").into(),
            ConversationTurn::assistant("second").into(),
            Content::user("third").into(),
        ];

        let contents = assemble_contents(history, "current");

        let texts: Vec<String> = contents.iter().map(Content::text).collect();
        assert_eq!(texts, vec!["first", "second", "third", "current"]);
        assert_eq!(contents.last().unwrap().role.as_deref(), Some("user"));
    }
}
