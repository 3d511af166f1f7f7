//! LexiGauge Server - HTTP REST API for word ambiguity scoring
//!
//! This binary provides a production-ready HTTP server exposing the word
//! clarity scorer via REST endpoints with per-IP rate limiting.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
