//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use mongodb::Client;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::domain::ExpenseRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::MongoExpenseRepository;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers.
///
/// The repository is constructed once at startup and injected into every
/// handler; no handler opens its own store connection.
#[derive(Clone)]
pub struct AppState {
    pub expenses: Arc<dyn ExpenseRepository>,
}

/// Application instance.
///
/// Owns the store client so it can be released when the server stops.
pub struct Application {
    listener: TcpListener,
    router: Router,
    client: Client,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create the store client
        let client = database::create_client(&settings.database).await?;
        tracing::info!("MongoDB client created");

        let repository = MongoExpenseRepository::new(&client, &settings.database);

        // Create app state
        let state = AppState {
            expenses: Arc::new(repository),
        };

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            client,
        })
    }

    /// Run the server until a shutdown signal arrives, then release the
    /// store client.
    pub async fn run_until_stopped(self) -> Result<()> {
        let Self {
            listener,
            router,
            client,
        } = self;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        client.shutdown().await;
        tracing::info!("Store client released, server stopped");

        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolve on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
