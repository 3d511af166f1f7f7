//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the LexiGauge
//! server. Routes are organized by functionality:
//!
//! - `health`: Health checks and readiness
//! - `analyze`: Word ambiguity analysis

pub mod analyze;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::Json;
use axum::response::IntoResponse;
use serde_json::json;

/// API base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no authentication.
///
/// # Response
///
/// ```json
/// {
///   "name": "LexiGauge Server",
///   "version": "0.1.0",
///   "status": "running",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "LexiGauge Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": [
            "/analyze",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
