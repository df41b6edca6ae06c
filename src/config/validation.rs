//! Configuration validation

use super::*;
use crate::error::{BridgeError, Result};

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_gemini_config(&config.gemini)?;
    validate_completion_config(&config.completion)?;
    validate_embedding_config(&config.embedding)?;
    validate_workspace_config(&config.workspace)?;
    Ok(())
}

/// Validate API connection settings
fn validate_gemini_config(config: &GeminiConfig) -> Result<()> {
    // Missing key is a fatal startup condition, caught before any network call
    if config.api_key.expose_secret().is_empty() {
        return Err(BridgeError::Config(
            "Gemini API key is required (set GOOGLE_API_KEY)".to_string(),
        ));
    }

    if config.base_url.is_empty() {
        return Err(BridgeError::Config(
            "API base URL cannot be empty".to_string(),
        ));
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(BridgeError::Config(
            "API base URL must start with http:// or https://".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(BridgeError::Config(
            "Request timeout must be greater than 0".to_string(),
        ));
    }

    if config.timeout_secs > 300 {
        return Err(BridgeError::Config(
            "Request timeout too large (max: 300 seconds)".to_string(),
        ));
    }

    Ok(())
}

/// Validate completion adapter settings
fn validate_completion_config(config: &CompletionConfig) -> Result<()> {
    if config.model.is_empty() {
        return Err(BridgeError::Config(
            "Completion model identifier cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate embedding adapter settings
fn validate_embedding_config(config: &EmbeddingConfig) -> Result<()> {
    if config.model.is_empty() {
        return Err(BridgeError::Config(
            "Embedding model identifier cannot be empty".to_string(),
        ));
    }

    if config.dimension == 0 {
        return Err(BridgeError::Config(
            "Embedding dimension must be greater than 0".to_string(),
        ));
    }

    if config.batch_size == 0 {
        return Err(BridgeError::Config(
            "Embedding batch size must be greater than 0".to_string(),
        ));
    }

    if config.batch_size > 1000 {
        return Err(BridgeError::Config(
            "Embedding batch size too large (max: 1000)".to_string(),
        ));
    }

    if config.cache_enabled {
        if config.cache_size == 0 {
            return Err(BridgeError::Config(
                "Cache size must be greater than 0 when cache is enabled".to_string(),
            ));
        }

        if config.cache_ttl_secs == 0 {
            return Err(BridgeError::Config(
                "Cache TTL must be greater than 0 when cache is enabled".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate workspace settings
fn validate_workspace_config(config: &WorkspaceConfig) -> Result<()> {
    if config.working_dir.is_empty() {
        return Err(BridgeError::Config(
            "Working directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}
