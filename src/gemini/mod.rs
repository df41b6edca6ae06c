//! Shared client for the Gemini generative language API

pub mod models;

pub use models::{
    BatchEmbedContentsRequest, BatchEmbedContentsResponse, Content, ContentEmbedding,
    EmbedContentRequest, EmbedContentResponse, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, ModelInfo, ModelList, Part,
};

use crate::config::GeminiConfig;
use crate::error::{ApiError, Result};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Process-wide handle for Gemini API calls.
///
/// Constructed once after configuration loading and shared by `Arc` into the
/// adapters. Read-only after construction; no request is ever retried here,
/// so a transport or provider failure propagates unchanged to the caller.
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl GeminiClient {
    /// Create a new client from connection settings
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a client backed by a custom HTTP client
    pub fn with_http_client(config: &GeminiConfig, http_client: Client) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Issue one generation round trip
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        debug!(model, contents = request.contents.len(), "Requesting content generation");
        self.post(&format!("models/{model}:generateContent"), request)
            .await
    }

    /// Issue one embedding round trip for a single text
    pub async fn embed_content(&self, model: &str, text: &str) -> Result<EmbedContentResponse> {
        let request = EmbedContentRequest::new(model, text);
        self.post(&format!("models/{model}:embedContent"), &request)
            .await
    }

    /// Issue one embedding round trip carrying multiple texts
    pub async fn batch_embed_contents(
        &self,
        model: &str,
        texts: &[String],
    ) -> Result<BatchEmbedContentsResponse> {
        let request = BatchEmbedContentsRequest {
            requests: texts
                .iter()
                .map(|text| EmbedContentRequest::new(model, text.clone()))
                .collect(),
        };

        debug!(model, count = texts.len(), "Requesting batch embeddings");
        self.post(&format!("models/{model}:batchEmbedContents"), &request)
            .await
    }

    /// List the models available to the configured key
    pub async fn list_models(&self) -> Result<ModelList> {
        let response = self
            .http_client
            .get(format!("{}/v1beta/models", self.base_url))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .send()
            .await
            .map_err(ApiError::Network)?;

        Self::decode(response).await
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(format!("{}/v1beta/{}", self.base_url, path))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(ApiError::Network)?;

        Self::decode(response).await
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
        let status = response.status();

        match status {
            s if s.is_success() => response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string()).into()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                error!("Authentication failed");
                Err(ApiError::AuthenticationFailed.into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Rate limit exceeded");
                Err(ApiError::RateLimitExceeded.into())
            }
            _ => {
                let message = response.text().await.unwrap_or_default();
                error!("API request failed with status {}: {}", status, message);
                Err(ApiError::Provider {
                    status: status.as_u16(),
                    message,
                }
                .into())
            }
        }
    }
}
