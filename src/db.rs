//! MongoDB connection management.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Connect to MongoDB and return a handle to the configured database.
///
/// The connection is verified with a `ping` command so callers fail fast
/// on unreachable or misconfigured deployments instead of at first use.
pub async fn connect(config: &DatabaseConfig) -> Result<Database> {
    let mut options = ClientOptions::parse(config.connection_uri()).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    let client = Client::with_options(options)?;
    let database = client.database(&config.database);

    database.run_command(doc! { "ping": 1 }, None).await?;
    debug!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "mongodb connection established"
    );

    Ok(database)
}

/// Fetch the server version string via `buildInfo`.
pub async fn server_version(database: &Database) -> Result<String> {
    let info = database.run_command(doc! { "buildInfo": 1 }, None).await?;
    Ok(info.get_str("version").unwrap_or("unknown").to_string())
}
