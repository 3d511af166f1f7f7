use serde::{Deserialize, Serialize};

/// Runtime configuration selecting the embedding backend and how to reach it.
///
/// The config is serde-friendly so it can be nested inside a larger service
/// configuration and filled from files or environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingConfig {
    /// Backend selector: `"openai"` (remote HTTP) or `"stub"` (deterministic, offline).
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Embeddings endpoint when [`mode`](Self::mode) is `"openai"`.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token for the provider. Required in `"openai"` mode.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Overall per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Vector dimension produced by the stub backend.
    #[serde(default = "default_stub_dimension")]
    pub stub_dimension: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            api_url: default_api_url(),
            api_key: None,
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            stub_dimension: default_stub_dimension(),
        }
    }
}

fn default_mode() -> String {
    "openai".to_string()
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/embeddings".to_string()
}

fn default_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_stub_dimension() -> usize {
    384
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = EmbeddingConfig::default();
        assert_eq!(cfg.mode, "openai");
        assert_eq!(cfg.api_url, "https://api.openai.com/v1/embeddings");
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.model, "text-embedding-3-small");
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.connect_timeout_secs, 10);
        assert_eq!(cfg.stub_dimension, 384);
    }

    #[test]
    fn config_deserializes_with_partial_fields() {
        let cfg: EmbeddingConfig = serde_json::from_str(r#"{"mode": "stub"}"#).unwrap();
        assert_eq!(cfg.mode, "stub");
        assert_eq!(cfg.model, "text-embedding-3-small");
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = EmbeddingConfig {
            mode: "openai".into(),
            api_url: "https://example.com/embed".into(),
            api_key: Some("sk-test".into()),
            model: "custom-model".into(),
            timeout_secs: 60,
            connect_timeout_secs: 5,
            stub_dimension: 16,
        };

        let serialized = serde_json::to_string(&cfg).unwrap();
        let deserialized: EmbeddingConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cfg, deserialized);
    }
}
