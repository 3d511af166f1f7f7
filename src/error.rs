use embedding::EmbeddingError;
use thiserror::Error;

/// Errors surfaced by [`Scorer::analyze`](crate::Scorer::analyze).
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The input word was empty (or whitespace-only). Raised before any
    /// embedding call is made; the caller can recover by re-prompting.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The embedding provider failed (network, auth, malformed response).
    /// Not retried here; retry policy, if any, belongs to the provider client.
    #[error("embedding provider error: {0}")]
    EmbeddingProvider(#[from] EmbeddingError),

    /// A zero-norm embedding made cosine similarity undefined. Not expected
    /// from real providers, but guarded rather than dividing by zero.
    #[error("degenerate embedding vector: {0}")]
    DegenerateVector(String),
}
