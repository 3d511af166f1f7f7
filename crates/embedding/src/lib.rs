//! Lexigauge Embedding Clients
//!
//! This crate turns text into dense vectors for the ambiguity scorer. It
//! deliberately stays small: one trait, two backends.
//!
//! - **OpenAI mode** - Calls an OpenAI-style `/v1/embeddings` endpoint over
//!   HTTP. Needs an API key.
//! - **Stub mode** - For tests and keyless local runs. Generates fake but
//!   consistent unit vectors, so anything built on top stays deterministic.
//!
//! Everything the scorer needs is behind the [`Embedder`] trait, which keeps
//! provider credentials and HTTP plumbing out of the scoring code and makes it
//! trivial to inject a synthetic backend in tests.
//!
//! ## Quick example
//!
//! ```no_run
//! use embedding::{embedder_from_config, EmbeddingConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let cfg = EmbeddingConfig {
//!         mode: "openai".into(),
//!         api_key: Some("sk-...".into()),
//!         ..Default::default()
//!     };
//!
//!     let embedder = embedder_from_config(&cfg).unwrap();
//!     let vector = embedder.embed("clarity").await.unwrap();
//!     println!("{} dims from {}", vector.len(), embedder.model());
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod stub;

pub use crate::client::OpenAiEmbedder;
pub use crate::config::EmbeddingConfig;
pub use crate::error::EmbeddingError;
pub use crate::stub::StubEmbedder;

use std::sync::Arc;

use async_trait::async_trait;

/// A text-to-vector capability.
///
/// Implementations must be cheap to share across tasks; callers typically hold
/// one behind an `Arc` for the life of the process.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text into a fixed-dimension vector.
    ///
    /// The dimension is backend-defined but stable for the life of the
    /// embedder. Implementations apply their own request timeout and surface
    /// it as an error rather than hanging.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Name of the model (or synthetic backend) producing the vectors.
    fn model(&self) -> &str;
}

/// Construct the backend selected by `cfg.mode`.
pub fn embedder_from_config(cfg: &EmbeddingConfig) -> Result<Arc<dyn Embedder>, EmbeddingError> {
    match cfg.mode.as_str() {
        "openai" => Ok(Arc::new(OpenAiEmbedder::from_config(cfg)?)),
        "stub" => Ok(Arc::new(StubEmbedder::with_dimension(cfg.stub_dimension))),
        other => Err(EmbeddingError::InvalidConfig(format!(
            "unknown embedding mode `{other}` (expected `openai` or `stub`)"
        ))),
    }
}
