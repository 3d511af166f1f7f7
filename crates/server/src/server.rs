//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (rate limiting, logging, compression, etc.)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, rate_limit, request_id};
use crate::routes::{analyze, health};
use crate::routes::{api_info, not_found};
use crate::state::ServerState;
use axum::Router;
use axum::http::StatusCode;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Routes are divided into:
/// - Public routes: /, /health, /ready (never rate limited)
/// - Metered routes: /analyze (per-IP rate limit)
///
/// Middleware stack (applied in reverse order):
/// 1. Request ID tracking
/// 2. Request logging
/// 3. Timeout handling
/// 4. Compression
/// 5. CORS
/// 6. Rate limiting (metered routes only)
pub fn build_router(state: Arc<ServerState>) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    // Public routes (no rate limiting so probes never get throttled)
    let public_routes = Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check));

    // Metered routes
    let metered_routes = Router::new()
        .route("/analyze", post(analyze::analyze_word))
        .layer(from_fn_with_state(state.clone(), rate_limit));

    // Combine routes
    Router::new()
        .merge(public_routes)
        .merge(metered_routes)
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(state.config.timeout_secs),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(request_id))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the LexiGauge HTTP server
///
/// Initializes the server with the provided configuration and starts listening
/// for incoming HTTP requests. This function will block until the server is
/// shut down via SIGTERM or Ctrl+C.
///
/// # Example
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
///
/// # Initialization
///
/// This function performs the following initialization steps:
/// 1. Sets up structured JSON logging with the configured log level
/// 2. Creates shared server state (embedding backend, scorer, rate limiter)
/// 3. Builds the Axum router with all routes and middleware
/// 4. Binds to the configured TCP address
/// 5. Starts the HTTP server with graceful shutdown support
///
/// # Shutdown
///
/// The server handles graceful shutdown on:
/// - SIGTERM (Unix/Linux)
/// - Ctrl+C (all platforms)
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .init();

    if config.embedding.mode == "openai" && config.embedding.api_key.is_none() {
        tracing::warn!(
            "embedding mode is `openai` but no API key is configured; set OPENAI_API_KEY \
             (or LEXIGAUGE__EMBEDDING__API_KEY), or set the embedding mode to `stub`"
        );
    }

    // Create server state
    let state = Arc::new(ServerState::new(config.clone())?);

    // Build router
    let app = build_router(state.clone());

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "Starting LexiGauge server on {} (embedding mode: {}, model: {})",
        addr,
        config.embedding.mode,
        state.scorer.model()
    );
    tracing::info!(
        "Timeout: {}s, rate limit: {} analyze requests/minute per IP",
        config.timeout_secs,
        config.rate_limit_per_minute
    );
    tracing::info!("CORS: {}", config.enable_cors);

    // Start server; connect info feeds the per-IP rate limiter
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
