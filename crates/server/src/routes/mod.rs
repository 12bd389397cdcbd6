//! API route handlers
//!
//! - `synthesize`: place document synthesis
//! - `health`: liveness and Prometheus metrics

pub mod health;
pub mod synthesize;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Service name and available endpoints (`GET /`).
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "placedoc",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/synthesize/{source}/{venue|address|street}",
            "/health",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
