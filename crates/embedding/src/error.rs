use thiserror::Error;

/// Errors surfaced by [`Embedder`](crate::Embedder) implementations.
#[derive(Debug, Clone, Error)]
pub enum EmbeddingError {
    /// Configuration is inconsistent (e.g., api mode without an API key).
    #[error("invalid embedding config: {0}")]
    InvalidConfig(String),
    /// The HTTP request never produced a response (connect failure, timeout).
    #[error("request failed: {0}")]
    Request(String),
    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },
    /// The provider answered 2xx but the body was not a usable embedding.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_config() {
        let err = EmbeddingError::InvalidConfig("api_key is required".into());
        assert!(err.to_string().contains("invalid embedding config"));
        assert!(err.to_string().contains("api_key is required"));
    }

    #[test]
    fn error_request() {
        let err = EmbeddingError::Request("connection refused".into());
        assert!(err.to_string().contains("request failed"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn error_provider_carries_status_and_body() {
        let err = EmbeddingError::Provider {
            status: 401,
            body: "invalid api key".into(),
        };
        assert!(err.to_string().contains("HTTP 401"));
        assert!(err.to_string().contains("invalid api key"));
    }

    #[test]
    fn error_malformed_response() {
        let err = EmbeddingError::MalformedResponse("missing `data` array".into());
        assert!(err.to_string().contains("malformed provider response"));
    }

    #[test]
    fn error_clone() {
        let err = EmbeddingError::Provider {
            status: 503,
            body: "overloaded".into(),
        };
        let cloned = err.clone();
        assert_eq!(format!("{err}"), format!("{cloned}"));
    }
}
