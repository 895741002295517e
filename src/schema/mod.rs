//! The collection catalog for the trading metadata store.
//!
//! Every collection in `trading_meta` is declared here as a
//! [`CollectionSpec`]: its name, the `$jsonSchema` validator MongoDB
//! enforces at write time, and the secondary indexes that back the
//! anticipated query patterns. [`catalog`] returns the specs in creation
//! order; [`crate::provision`] executes them.

mod catalog;
mod types;

pub use types::{
    AlgorithmType, ComputationComplexity, IndicatorCategory, LogLevel, ModelStatus, ModelType,
    SelectionMethod,
};

use mongodb::bson::Document;
use mongodb::IndexModel;

/// A single collection declaration: validator plus index set.
#[derive(Debug, Clone)]
pub struct CollectionSpec {
    /// Collection name within the target database.
    pub name: &'static str,
    /// Full validator document (`{"$jsonSchema": {...}}`).
    pub validator: Document,
    /// Secondary indexes created after the collection exists.
    pub indexes: Vec<IndexModel>,
}

/// All collections of the metadata store, in creation order.
pub fn catalog() -> Vec<CollectionSpec> {
    vec![
        catalog::strategy_configs(),
        catalog::indicator_metadata(),
        catalog::system_logs(),
        catalog::event_store(),
        catalog::ml_models(),
        catalog::genetic_algorithm_config(),
    ]
}
