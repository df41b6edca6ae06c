//! Configuration management for the Gemini bridge

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod loader;
pub mod validation;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub completion: CompletionConfig,
    pub embedding: EmbeddingConfig,
    pub workspace: WorkspaceConfig,
    pub logging: LoggingConfig,
}

/// Connection settings for the Gemini API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (secured)
    #[serde(serialize_with = "serialize_secret", deserialize_with = "deserialize_secret")]
    pub api_key: Secret<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Configuration for the completion adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Generation model identifier
    #[serde(default = "default_completion_model")]
    pub model: String,
}

/// Configuration for the embedding adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Embedding model identifier
    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// Embedding vector width
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// Transfer mode for multi-text inputs
    #[serde(default)]
    pub mode: EmbeddingMode,

    /// Maximum texts per request in batched mode
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Enable the embedding cache
    #[serde(default)]
    pub cache_enabled: bool,

    /// Cache TTL in seconds
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,

    /// Cache maximum size
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
}

/// Transfer modes for embedding requests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingMode {
    /// One round trip per input text
    #[default]
    Sequential,
    /// One round trip per `batch_size` chunk of inputs
    Batched,
}

/// The orchestrator's persistence directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Directory the orchestrator stores its graph and vector data in.
    /// Its internal layout is owned entirely by the orchestrator.
    #[serde(default = "default_working_dir")]
    pub working_dir: String,
}

impl WorkspaceConfig {
    /// Ensure the working directory exists before the orchestrator initializes
    pub fn ensure(&self) -> crate::error::Result<PathBuf> {
        let path = PathBuf::from(&self.working_dir);
        std::fs::create_dir_all(&path).map_err(|e| {
            crate::error::BridgeError::Config(format!(
                "Failed to create working directory {}: {}",
                self.working_dir, e
            ))
        })?;
        Ok(path)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String { "https://generativelanguage.googleapis.com".to_string() }
fn default_timeout() -> u64 { 30 }
fn default_completion_model() -> String { "gemini-1.5-flash".to_string() }
fn default_embedding_model() -> String { "text-embedding-004".to_string() }
fn default_dimension() -> usize { 768 }
fn default_batch_size() -> usize { 32 }
fn default_cache_ttl() -> u64 { 3600 }
fn default_cache_size() -> usize { 1000 }
fn default_working_dir() -> String { "./rag_storage".to_string() }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let config = loader::load_config(path)?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn from_file_with_env<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let config = loader::load_config_with_env(path)?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Validate this configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        validation::validate_config(self)
    }

    /// Create default configuration, reading the API key from `GOOGLE_API_KEY`
    pub fn default_config() -> Self {
        Self {
            gemini: GeminiConfig {
                base_url: default_base_url(),
                api_key: Secret::new(std::env::var("GOOGLE_API_KEY").unwrap_or_default()),
                timeout_secs: default_timeout(),
            },
            completion: CompletionConfig {
                model: default_completion_model(),
            },
            embedding: EmbeddingConfig {
                model: default_embedding_model(),
                dimension: default_dimension(),
                mode: EmbeddingMode::default(),
                batch_size: default_batch_size(),
                cache_enabled: false,
                cache_ttl_secs: default_cache_ttl(),
                cache_size: default_cache_size(),
            },
            workspace: WorkspaceConfig {
                working_dir: default_working_dir(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

/// Custom serializer for Secret<String>
fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}

/// Custom deserializer for Secret<String>
fn deserialize_secret<'de, D>(deserializer: D) -> Result<Secret<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(Secret::new(s))
}
