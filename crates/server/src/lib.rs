//! LexiGauge Server - HTTP REST API for word ambiguity scoring
//!
//! This crate provides a production-ready HTTP server that exposes the
//! LexiGauge scorer via a REST API. It supports:
//!
//! - **Word Analysis**: Score a word's ambiguity against the four fixed
//!   context categories (technical, emotional, physical, abstract)
//! - **Health Probes**: Liveness and readiness endpoints for orchestrators
//!
//! # Features
//!
//! - **Rate Limiting**: Per-client-IP limiting on the analyze endpoint
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: Structured error responses with error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe (reports the embedding backend)
//! - `POST /analyze` - Analyze a word (rate limited per client IP)
//!
//! See the README.md file for complete documentation.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
