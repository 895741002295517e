use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;
use crate::{db, schema};

/// Ping the MongoDB deployment and report what is reachable.
pub async fn execute_connection<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;

    output::section("Connection Check");
    output::field("Target", config.database.redacted_uri());

    let pb = output::spinner("Connecting to MongoDB...");
    let database = match db::connect(&config.database).await {
        Ok(database) => database,
        Err(error) => {
            output::spinner_fail(&pb, "Connection failed");
            output::hint("verify the deployment is reachable and credentials are set");
            return Err(error);
        }
    };
    output::spinner_success(&pb, "Connected");

    let version = db::server_version(&database).await?;
    output::field("Server", version);

    let existing = database.list_collection_names(None).await?;
    let catalog = schema::catalog();
    let present = catalog
        .iter()
        .filter(|spec| existing.iter().any(|name| name == spec.name))
        .count();
    output::field(
        "Catalog",
        format!("{present}/{} collections present", catalog.len()),
    );

    output::success("Connection check passed");

    Ok(())
}
