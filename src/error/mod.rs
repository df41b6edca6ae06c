//! Error types for the Gemini bridge

use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Main error type for the Gemini bridge
///
/// The adapters perform no local recovery: every failure reaches the caller
/// through this type.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors shared by every Gemini API round trip
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("API request failed with status {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

/// Errors specific to the completion adapter
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Model returned no candidate text")]
    EmptyResponse,
}

/// Errors specific to the embedding adapter
#[derive(Error, Debug)]
pub enum EmbeddingError {
    #[error("Missing embedding in response")]
    MissingEmbedding,

    #[error("Embedding count mismatch: requested {expected}, received {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

impl From<config::ConfigError> for BridgeError {
    fn from(err: config::ConfigError) -> Self {
        BridgeError::Config(err.to_string())
    }
}
