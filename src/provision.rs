//! One-shot schema provisioning.
//!
//! [`apply`] walks the collection catalog in order, creating each collection
//! with its validator and then its indexes. There are no existence checks,
//! no retries, and no rollback: the first failure aborts and leaves whatever
//! was already created in place. Running against an already-provisioned
//! database fails with server error 48 (`NamespaceExists`) — that is the
//! intended contract, and operators who want re-invokable setup use the
//! ledgered runner in [`crate::migration`] instead.

use mongodb::bson::Document;
use mongodb::error::{CommandError, ErrorKind};
use mongodb::options::CreateCollectionOptions;
use mongodb::Database;
use tracing::info;

use crate::error::{Error, Result};
use crate::schema;

/// MongoDB server error code for "collection already exists".
const NAMESPACE_EXISTS: i32 = 48;

/// Create every cataloged collection and its indexes in the target database.
pub async fn apply(database: &Database) -> Result<()> {
    for spec in schema::catalog() {
        let options = CreateCollectionOptions::builder()
            .validator(spec.validator)
            .build();
        database.create_collection(spec.name, options).await?;

        let index_count = spec.indexes.len();
        if index_count > 0 {
            database
                .collection::<Document>(spec.name)
                .create_indexes(spec.indexes, None)
                .await?;
        }

        info!(collection = spec.name, indexes = index_count, "collection created");
    }

    Ok(())
}

/// True when the error is the server rejecting `create_collection` because
/// the namespace already exists, i.e. the database was provisioned before.
#[must_use]
pub fn is_namespace_exists(error: &Error) -> bool {
    match error {
        Error::Mongo(source) => matches!(
            source.kind.as_ref(),
            ErrorKind::Command(CommandError {
                code: NAMESPACE_EXISTS,
                ..
            })
        ),
        _ => false,
    }
}
