use embedding::EmbeddingConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Rate limit: analyze requests per minute per client IP
    #[serde(default = "default_rate_limit_per_minute")]
    pub rate_limit_per_minute: u32,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Embedding backend configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            rate_limit_per_minute: default_rate_limit_per_minute(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            embedding: EmbeddingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        // Pick up a local .env before reading the environment.
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("lexigauge").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("LEXIGAUGE").separator("__"));

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;

        // Hosting platforms commonly inject the listen port as plain PORT.
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        // Fall back to the conventional OPENAI_API_KEY variable.
        if config.embedding.api_key.is_none() {
            config.embedding.api_key = std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty());
        }

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_rate_limit_per_minute() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
