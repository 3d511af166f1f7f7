use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::EmbeddingConfig;
use crate::error::EmbeddingError;
use crate::Embedder;

/// Client for OpenAI-style embedding endpoints.
///
/// Sends `{"input": text, "model": model}` with a bearer token and parses the
/// `data[].embedding` response shape. The HTTP client is owned by this struct
/// rather than living in a process-wide global, so callers can construct
/// independently configured instances (and tests can avoid it entirely).
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

/// Successful response body from the embeddings endpoint.
#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f32>,
}

impl OpenAiEmbedder {
    /// Build a client from config. Fails if the API key is missing or the
    /// underlying HTTP client cannot be constructed.
    pub fn from_config(cfg: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let api_key = cfg.api_key.clone().ok_or_else(|| {
            EmbeddingError::InvalidConfig("api_key is required for openai mode".into())
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .pool_max_idle_per_host(32)
            .build()
            .map_err(|e| {
                EmbeddingError::InvalidConfig(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_url: cfg.api_url.clone(),
            api_key,
            model: cfg.model.clone(),
        })
    }

    async fn request_embedding(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let payload = json!({ "input": text, "model": self.model });

        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| EmbeddingError::Request(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Provider { status, body });
        }

        let parsed = response
            .json::<EmbeddingResponse>()
            .await
            .map_err(|e| EmbeddingError::MalformedResponse(format!("invalid JSON body: {e}")))?;

        extract_vector(parsed)
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.request_embedding(text).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}

fn extract_vector(response: EmbeddingResponse) -> Result<Vec<f32>, EmbeddingError> {
    let vector = response
        .data
        .into_iter()
        .next()
        .map(|item| item.embedding)
        .ok_or_else(|| {
            EmbeddingError::MalformedResponse("response contained no embeddings".into())
        })?;

    if vector.is_empty() {
        return Err(EmbeddingError::MalformedResponse(
            "provider returned an empty embedding vector".into(),
        ));
    }

    Ok(vector)
}
