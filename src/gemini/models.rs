//! Wire types for the Gemini generative language API

use serde::{Deserialize, Serialize};

/// A single message in a generation request or response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Producer of the content ("user" or "model"); system instructions carry none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Ordered message parts
    pub parts: Vec<Part>,
}

/// One text part of a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    /// Create a user message with a single text part
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role("user", text)
    }

    /// Create a model message with a single text part
    pub fn model(text: impl Into<String>) -> Self {
        Self::with_role("model", text)
    }

    /// Create a message with an explicit role and a single text part
    pub fn with_role(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Create a role-less content block, as used for system instructions
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of all parts
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Ordered message sequence, oldest first
    pub contents: Vec<Content>,

    /// Guidance attached to the request configuration, never a message entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Generation tuning knobs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Response body for `models/{model}:generateContent`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated candidate
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// Text of the first candidate, if the model produced one
    pub fn text(&self) -> Option<String> {
        self.candidates.first().map(|c| c.content.text())
    }
}

/// Request body for `models/{model}:embedContent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedContentRequest {
    /// Fully qualified model resource name, e.g. `models/text-embedding-004`
    pub model: String,

    pub content: Content,
}

impl EmbedContentRequest {
    /// Create a request for one text against a bare model identifier
    pub fn new(model: &str, text: impl Into<String>) -> Self {
        Self {
            model: format!("models/{model}"),
            content: Content {
                role: None,
                parts: vec![Part { text: text.into() }],
            },
        }
    }
}

/// Response body for `models/{model}:embedContent`
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedContentResponse {
    pub embedding: ContentEmbedding,
}

/// A single embedding vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEmbedding {
    pub values: Vec<f32>,
}

/// Request body for `models/{model}:batchEmbedContents`
#[derive(Debug, Clone, Serialize)]
pub struct BatchEmbedContentsRequest {
    pub requests: Vec<EmbedContentRequest>,
}

/// Response body for `models/{model}:batchEmbedContents`
#[derive(Debug, Clone, Deserialize)]
pub struct BatchEmbedContentsResponse {
    pub embeddings: Vec<ContentEmbedding>,
}

/// Response body for the `models` listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

/// Catalog entry for one available model
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub supported_generation_methods: Option<Vec<String>>,
}
