//! Database Module
//!
//! MongoDB client construction.

use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::Client;

use crate::config::DatabaseSettings;

/// Create a MongoDB client from settings.
///
/// The client multiplexes all requests over its internal connection pool and
/// lives for the whole process; `Application` releases it on shutdown.
pub async fn create_client(settings: &DatabaseSettings) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(settings.connection_uri()).await?;
    options.app_name = Some("expense-api".to_string());
    options.server_api = Some(
        ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build(),
    );

    Client::with_options(options)
}
