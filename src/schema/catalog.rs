//! The six collection declarations, restated from the platform's
//! provisioning scripts. Field lists, enum constraints, and index
//! directions are load-bearing: deployed writers depend on them.

use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

use super::types::{
    AlgorithmType, ComputationComplexity, IndicatorCategory, LogLevel, ModelStatus, ModelType,
    SelectionMethod,
};
use super::CollectionSpec;

fn json_schema(required: &[&str], properties: Document) -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": required,
            "properties": properties,
        }
    }
}

fn string() -> Document {
    doc! { "bsonType": "string" }
}

fn object() -> Document {
    doc! { "bsonType": "object" }
}

fn array() -> Document {
    doc! { "bsonType": "array" }
}

fn int() -> Document {
    doc! { "bsonType": "int" }
}

fn double() -> Document {
    doc! { "bsonType": "double" }
}

fn boolean() -> Document {
    doc! { "bsonType": "bool" }
}

fn date() -> Document {
    doc! { "bsonType": "date" }
}

fn enumerated(values: Vec<&str>) -> Document {
    doc! { "bsonType": "string", "enum": values }
}

fn index(keys: Document) -> IndexModel {
    IndexModel::builder().keys(keys).build()
}

fn unique_index(keys: Document) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

/// Versioned strategy configurations, one document per strategy revision
/// lineage. `strategy_id` is the external key; `config` holds the full
/// parameter tree the strategy engine consumes.
pub(super) fn strategy_configs() -> CollectionSpec {
    CollectionSpec {
        name: "strategy_configs",
        validator: json_schema(
            &["strategy_id", "config", "version"],
            doc! {
                "strategy_id": string(),
                "strategy_name": string(),
                "config": object(),
                "version": int(),
                "indicators": array(),
                "entry_conditions": object(),
                "exit_conditions": object(),
                "risk_management": object(),
                "created_at": date(),
                "updated_at": date(),
            },
        ),
        indexes: vec![
            unique_index(doc! { "strategy_id": 1 }),
            index(doc! { "strategy_name": 1 }),
            index(doc! { "created_at": -1 }),
        ],
    }
}

/// Registry of technical indicators available to strategies, with their
/// parameter schemas and computation characteristics.
pub(super) fn indicator_metadata() -> CollectionSpec {
    CollectionSpec {
        name: "indicator_metadata",
        validator: json_schema(
            &["indicator_id", "name", "category"],
            doc! {
                "indicator_id": string(),
                "name": string(),
                "category": enumerated(IndicatorCategory::wire_names()),
                "description": string(),
                "parameters": array(),
                "default_params": object(),
                "computation_complexity": enumerated(ComputationComplexity::wire_names()),
                "supports_simd": boolean(),
                "version": string(),
            },
        ),
        indexes: vec![
            unique_index(doc! { "indicator_id": 1 }),
            index(doc! { "category": 1 }),
            index(doc! { "name": 1 }),
        ],
    }
}

/// Centralized service logs. Both compound indexes lead with the filter
/// field and end in newest-first `timestamp` to serve the dashboard
/// queries directly.
pub(super) fn system_logs() -> CollectionSpec {
    CollectionSpec {
        name: "system_logs",
        validator: json_schema(
            &["timestamp", "level", "message"],
            doc! {
                "timestamp": date(),
                "level": enumerated(LogLevel::wire_names()),
                "service": string(),
                "message": string(),
                "context": object(),
                "error_stack": string(),
            },
        ),
        indexes: vec![
            index(doc! { "timestamp": -1 }),
            index(doc! { "level": 1, "timestamp": -1 }),
            index(doc! { "service": 1, "timestamp": -1 }),
        ],
    }
}

/// Append-only event log. Aggregates are referenced by plain string
/// identifiers; the `(aggregate_id, timestamp)` index is ascending so
/// replays read events in commit order.
pub(super) fn event_store() -> CollectionSpec {
    CollectionSpec {
        name: "event_store",
        validator: json_schema(
            &["event_id", "event_type", "timestamp"],
            doc! {
                "event_id": string(),
                "event_type": string(),
                "aggregate_id": string(),
                "aggregate_type": string(),
                "payload": object(),
                "metadata": object(),
                "timestamp": date(),
                "user_id": string(),
            },
        ),
        indexes: vec![
            unique_index(doc! { "event_id": 1 }),
            index(doc! { "aggregate_id": 1, "timestamp": 1 }),
            index(doc! { "event_type": 1, "timestamp": -1 }),
        ],
    }
}

/// Trained model registry with hyperparameters and evaluation metrics.
pub(super) fn ml_models() -> CollectionSpec {
    CollectionSpec {
        name: "ml_models",
        validator: json_schema(
            &["model_id", "model_type", "version"],
            doc! {
                "model_id": string(),
                "model_name": string(),
                "model_type": enumerated(ModelType::wire_names()),
                "architecture": string(),
                "hyperparameters": object(),
                "training_config": object(),
                "performance_metrics": object(),
                "version": string(),
                "status": enumerated(ModelStatus::wire_names()),
                "trained_at": date(),
                "deployed_at": date(),
            },
        ),
        indexes: vec![
            unique_index(doc! { "model_id": 1 }),
            index(doc! { "status": 1 }),
            index(doc! { "trained_at": -1 }),
        ],
    }
}

/// Genetic optimizer run configurations for strategy parameter search.
pub(super) fn genetic_algorithm_config() -> CollectionSpec {
    CollectionSpec {
        name: "genetic_algorithm_config",
        validator: json_schema(
            &["config_id", "algorithm_type"],
            doc! {
                "config_id": string(),
                "algorithm_type": enumerated(AlgorithmType::wire_names()),
                "population_size": int(),
                "generations": int(),
                "mutation_rate": double(),
                "crossover_rate": double(),
                "selection_method": enumerated(SelectionMethod::wire_names()),
                "fitness_function": object(),
                "objectives": array(),
            },
        ),
        indexes: vec![unique_index(doc! { "config_id": 1 })],
    }
}
