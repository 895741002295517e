//! Handler for the `provision` command.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;
use crate::{db, provision, schema};

/// Create every collection in the catalog with its validator and indexes.
///
/// One-shot: fails if any collection already exists. `metaforge migrate`
/// is the re-runnable entry point.
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    config.logging.init();

    let catalog = schema::catalog();

    output::section("Provision");
    output::field("Target", config.database.redacted_uri());
    output::field("Database", &config.database.database);
    output::field("Collections", catalog.len());

    let pb = output::spinner("Connecting to MongoDB...");
    let database = match db::connect(&config.database).await {
        Ok(database) => database,
        Err(error) => {
            output::spinner_fail(&pb, "Connection failed");
            return Err(error);
        }
    };
    output::spinner_success(&pb, "Connected");

    let pb = output::spinner("Creating collections and indexes...");
    match provision::apply(&database).await {
        Ok(()) => {
            output::spinner_success(&pb, "MongoDB collections and indexes created successfully!");
            Ok(())
        }
        Err(error) => {
            output::spinner_fail(&pb, "Provisioning failed");
            if provision::is_namespace_exists(&error) {
                output::hint("a collection already exists; provision expects an empty database");
                output::hint("use `metaforge migrate` to apply schema changes with a ledger");
            }
            Err(error)
        }
    }
}
