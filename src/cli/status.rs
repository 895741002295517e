//! Handler for the `status` command.

use std::path::Path;

use tabled::{Table, Tabled};

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;
use crate::{db, migration, schema};

#[derive(Tabled)]
struct CollectionRow {
    #[tabled(rename = "Collection")]
    name: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Documents")]
    documents: String,
    #[tabled(rename = "Indexes")]
    indexes: String,
}

/// Show which catalog collections exist and what the ledger has recorded.
///
/// Read-only: never creates collections, so it is safe to point at any
/// deployment.
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    config.logging.init();

    output::section("Status");
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

    let existing = database.list_collection_names(None).await?;

    let mut rows = Vec::new();
    for spec in schema::catalog() {
        if existing.iter().any(|name| name == spec.name) {
            let collection = database.collection::<mongodb::bson::Document>(spec.name);
            let documents = collection.count_documents(None, None).await?;
            let indexes = collection.list_index_names().await?;
            rows.push(CollectionRow {
                name: spec.name,
                status: "ok",
                documents: documents.to_string(),
                indexes: indexes.len().to_string(),
            });
        } else {
            rows.push(CollectionRow {
                name: spec.name,
                status: "missing",
                documents: "-".to_string(),
                indexes: "-".to_string(),
            });
        }
    }

    output::section("Collections");
    let table = Table::new(rows).to_string();
    output::lines(&table);

    output::section("Applied Migrations");
    let ledger = migration::ledger(&database).await?;
    if ledger.is_empty() {
        output::note("(none applied)");
        output::hint("run `metaforge migrate` to apply the collection catalog");
    } else {
        for record in &ledger {
            output::note(&format!(
                "v{} {} ({})",
                record.version,
                record.name,
                record.applied_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
    }

    Ok(())
}
