//! Handler for the `migrate` command.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;
use crate::{db, migration};

/// Apply all pending migrations and record them in the ledger.
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    config.logging.init();

    output::section("Migrate");
    output::field("Target", config.database.redacted_uri());
    output::field("Database", &config.database.database);

    let pb = output::spinner("Connecting to MongoDB...");
    let database = match db::connect(&config.database).await {
        Ok(database) => database,
        Err(error) => {
            output::spinner_fail(&pb, "Connection failed");
            return Err(error);
        }
    };
    output::spinner_success(&pb, "Connected");

    let pb = output::spinner("Applying migrations...");
    match migration::run(&database).await {
        Ok(0) => {
            output::spinner_success(&pb, "No pending migrations");
            Ok(())
        }
        Ok(applied) => {
            output::spinner_success(&pb, &format!("Applied {applied} migration(s)"));
            Ok(())
        }
        Err(error) => {
            output::spinner_fail(&pb, "Migration failed");
            output::hint("the failed migration was not recorded; fix the cause and rerun");
            Err(error)
        }
    }
}
