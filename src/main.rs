//! # Expense API
//!
//! A personal expense tracking HTTP service backed by MongoDB.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - MongoDB client
//! - HTTP server

use anyhow::Result;
use tracing::info;

use expense_api::config::Settings;
use expense_api::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    expense_api::telemetry::init_tracing();

    info!("Starting Expense API...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
