//! History and request types for the completion adapter

use crate::gemini::models::Content;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Speaker of a raw conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    #[default]
    User,
    Assistant,
}

impl TurnRole {
    /// Provider-side role name; `Assistant` maps to `model`
    pub fn provider_role(self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "model",
        }
    }
}

/// One prior turn as produced by the orchestrator's history buffer.
///
/// Missing fields default silently: role to `user`, content to empty text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConversationTurn {
    #[serde(default)]
    pub role: TurnRole,

    #[serde(default)]
    pub content: String,
}

impl ConversationTurn {
    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// A history entry handed to the completion adapter.
///
/// Orchestrators pass either raw turns or pre-built provider messages; the
/// variant is resolved once when the request is adapted, not per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryEntry {
    Message(Content),
    Turn(ConversationTurn),
}

impl HistoryEntry {
    /// Resolve to the provider message shape.
    ///
    /// Raw turns are remapped (`assistant` becomes `model`); pre-built
    /// provider messages pass through unmodified.
    pub fn into_content(self) -> Content {
        match self {
            HistoryEntry::Message(content) => content,
            HistoryEntry::Turn(turn) => Content::with_role(turn.role.provider_role(), turn.content),
        }
    }
}

impl From<ConversationTurn> for HistoryEntry {
    fn from(turn: ConversationTurn) -> Self {
        HistoryEntry::Turn(turn)
    }
}

impl From<Content> for HistoryEntry {
    fn from(content: Content) -> Self {
        HistoryEntry::Message(content)
    }
}

/// A single completion call as issued by the orchestrator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Non-empty text for the current turn
    pub prompt: String,

    /// Optional guidance, attached as the request's system instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    /// Prior turns, oldest first; may be empty
    #[serde(default)]
    pub history: Vec<HistoryEntry>,

    /// Orchestrator-supplied keyword options; accepted and ignored
    #[serde(default, flatten)]
    pub extra: Map<String, Value>,
}

impl CompletionRequest {
    /// Create a request carrying only the current prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Attach a system instruction
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    /// Attach prior conversation history
    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_turn_defaults_substituted_for_missing_fields() {
        let entry: HistoryEntry = serde_json::from_value(json!({"content": "hi"})).unwrap();
        assert_eq!(entry, HistoryEntry::Turn(ConversationTurn::user("hi")));

        let entry: HistoryEntry = serde_json::from_value(json!({"role": "assistant"})).unwrap();
        assert_eq!(entry, HistoryEntry::Turn(ConversationTurn::assistant("")));
    }

    #[test]
    fn test_prebuilt_message_deserializes_as_message_variant() {
        let entry: HistoryEntry = serde_json::from_value(json!({
            "role": "model",
            "parts": [{"text": "hello"}]
        }))
        .unwrap();

        assert_eq!(entry, HistoryEntry::Message(Content::model("hello")));
    }

    #[test]
    fn test_assistant_remaps_to_model_role() {
        let content = HistoryEntry::from(ConversationTurn::assistant("done")).into_content();
        assert_eq!(content.role.as_deref(), Some("model"));
        assert_eq!(content.text(), "done");
    }

    #[test]
    fn test_prebuilt_message_passes_through_unmodified() {
        let original = Content::with_role("user", "kept as-is");
        let content = HistoryEntry::from(original.clone()).into_content();
        assert_eq!(content, original);
    }

    #[test]
    fn test_unknown_keyword_options_collected_and_ignored() {
        let request: CompletionRequest = serde_json::from_value(json!({
            "prompt": "hi",
            "temperature": 0.5,
            "hashing_kv": {"namespace": "llm_cache"}
        }))
        .unwrap();

        assert_eq!(request.prompt, "hi");
        assert!(request.extra.contains_key("temperature"));
        assert!(request.extra.contains_key("hashing_kv"));
    }
}
