//! Health Check Handlers
//!
//! # Endpoints
//! - `GET /health` - Reports service status and store connectivity

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::domain::ExpenseRepository as _;
use crate::startup::AppState;

/// Health response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint.
///
/// Returns 200 while the store answers pings, 503 otherwise.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.expenses.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                version: env!("CARGO_PKG_VERSION"),
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    version: env!("CARGO_PKG_VERSION"),
                }),
            )
        }
    }
}
