//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service banner
        .route("/", get(banner))
        // Health check endpoint
        .route("/health", get(handlers::health::health_check))
        // Expense collection
        .route("/expenses", post(handlers::expense::create_expense))
        .route("/expenses", get(handlers::expense::list_expenses))
        .route("/expenses/{id}", get(handlers::expense::get_expense))
        .route("/expenses/{id}", patch(handlers::expense::update_expense))
        .route("/expenses/{id}", delete(handlers::expense::delete_expense))
        .with_state(state)
}

/// Plain-text service banner
async fn banner() -> &'static str {
    "Personal Expense Tracking"
}
