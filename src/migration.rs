//! Versioned migrations with a persistent ledger.
//!
//! Applied versions are recorded in the `migrations` collection of the
//! target database, one document per migration: `{version, name,
//! applied_at}`. [`run`] applies whatever the ledger says is still pending,
//! in version order, and records each migration only after it applied
//! cleanly — a failure leaves no record, so the failed version is retried
//! on the next invocation.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use mongodb::Database;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::provision;

/// Name of the ledger collection.
pub const LEDGER_COLLECTION: &str = "migrations";

/// A single schema migration.
#[async_trait]
pub trait Migration: Send + Sync {
    /// Ledger version, unique across the registry.
    fn version(&self) -> i32;

    /// Short name recorded in the ledger.
    fn name(&self) -> &'static str;

    /// Apply the migration to the target database.
    async fn apply(&self, database: &Database) -> Result<()>;
}

/// Ledger document recording one applied migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationRecord {
    pub version: i32,
    pub name: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub applied_at: DateTime<Utc>,
}

/// v1: the initial collection catalog with validators and indexes.
struct CollectionsSchema;

#[async_trait]
impl Migration for CollectionsSchema {
    fn version(&self) -> i32 {
        1
    }

    fn name(&self) -> &'static str {
        "collections_schema"
    }

    async fn apply(&self, database: &Database) -> Result<()> {
        provision::apply(database).await
    }
}

/// All known migrations, sorted by version.
pub fn registry() -> Vec<Box<dyn Migration>> {
    vec![Box::new(CollectionsSchema)]
}

/// Read the ledger, oldest version first.
///
/// A database that has never been migrated reads as an empty ledger; this
/// never creates the collection, so read-only callers stay read-only.
pub async fn ledger(database: &Database) -> Result<Vec<MigrationRecord>> {
    let options = FindOptions::builder().sort(doc! { "version": 1 }).build();
    let cursor = database
        .collection::<MigrationRecord>(LEDGER_COLLECTION)
        .find(None, options)
        .await?;
    Ok(cursor.try_collect().await?)
}

/// Registered migrations whose versions are absent from the ledger.
pub async fn pending(database: &Database) -> Result<Vec<Box<dyn Migration>>> {
    let applied: BTreeSet<i32> = ledger(database)
        .await?
        .into_iter()
        .map(|record| record.version)
        .collect();

    Ok(registry()
        .into_iter()
        .filter(|migration| !applied.contains(&migration.version()))
        .collect())
}

/// Apply all pending migrations and return how many were applied.
pub async fn run(database: &Database) -> Result<usize> {
    let pending = pending(database).await?;
    if pending.is_empty() {
        info!("no pending migrations");
        return Ok(0);
    }

    ensure_ledger(database).await?;
    let ledger = database.collection::<MigrationRecord>(LEDGER_COLLECTION);

    for migration in &pending {
        let version = migration.version();
        let name = migration.name();
        info!(version, name, "applying migration");

        migration
            .apply(database)
            .await
            .map_err(|source| Error::Migration {
                version,
                name,
                source: Box::new(source),
            })?;

        let record = MigrationRecord {
            version,
            name: name.to_string(),
            applied_at: Utc::now(),
        };
        ledger.insert_one(record, None).await?;
        info!(version, name, "migration applied");
    }

    Ok(pending.len())
}

async fn ensure_ledger(database: &Database) -> Result<()> {
    let names = database.list_collection_names(None).await?;
    if !names.iter().any(|name| name == LEDGER_COLLECTION) {
        database.create_collection(LEDGER_COLLECTION, None).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use mongodb::bson::Bson;

    use super::*;

    #[test]
    fn registry_versions_are_unique_and_sorted() {
        let versions: Vec<i32> = registry()
            .iter()
            .map(|migration| migration.version())
            .collect();
        let mut deduped = versions.clone();
        deduped.dedup();
        assert_eq!(versions, deduped, "duplicate migration version");
        assert!(
            versions.windows(2).all(|pair| pair[0] < pair[1]),
            "registry out of order"
        );
    }

    #[test]
    fn initial_migration_is_the_collection_catalog() {
        let registry = registry();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry[0].version(), 1);
        assert_eq!(registry[0].name(), "collections_schema");
    }

    #[test]
    fn record_serializes_applied_at_as_bson_datetime() {
        let record = MigrationRecord {
            version: 1,
            name: "collections_schema".to_string(),
            applied_at: Utc::now(),
        };

        let document = mongodb::bson::to_document(&record).expect("serialize record");
        assert_eq!(document.get_i32("version"), Ok(1));
        assert_eq!(document.get_str("name"), Ok("collections_schema"));
        assert!(
            matches!(document.get("applied_at"), Some(Bson::DateTime(_))),
            "applied_at must be a native BSON datetime, got {:?}",
            document.get("applied_at")
        );
    }

    #[test]
    fn record_round_trips_through_bson() {
        let record = MigrationRecord {
            version: 7,
            name: "example".to_string(),
            applied_at: Utc::now(),
        };

        let document = mongodb::bson::to_document(&record).expect("serialize record");
        let parsed: MigrationRecord =
            mongodb::bson::from_document(document).expect("deserialize record");
        assert_eq!(parsed.version, 7);
        assert_eq!(parsed.name, "example");
        // BSON datetimes are millisecond precision
        assert_eq!(
            parsed.applied_at.timestamp_millis(),
            record.applied_at.timestamp_millis()
        );
    }
}
