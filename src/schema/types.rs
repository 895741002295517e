//! Wire-level enumerations enforced by the collection validators.
//!
//! Each enum mirrors an `enum` constraint in a collection's `$jsonSchema`.
//! The validators store the string forms; these types exist so Rust callers
//! that write to the collections share one definition of the legal values.

use serde::{Deserialize, Serialize};

/// Indicator category stored in `indicator_metadata.category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorCategory {
    Trend,
    Momentum,
    Volatility,
    Volume,
    Custom,
    Ml,
}

impl IndicatorCategory {
    pub const ALL: [Self; 6] = [
        Self::Trend,
        Self::Momentum,
        Self::Volatility,
        Self::Volume,
        Self::Custom,
        Self::Ml,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trend => "trend",
            Self::Momentum => "momentum",
            Self::Volatility => "volatility",
            Self::Volume => "volume",
            Self::Custom => "custom",
            Self::Ml => "ml",
        }
    }

    /// The string forms accepted by the collection validator.
    #[must_use]
    pub fn wire_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.as_str()).collect()
    }
}

/// Relative computation cost of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputationComplexity {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ComputationComplexity {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::VeryHigh];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }

    #[must_use]
    pub fn wire_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.as_str()).collect()
    }
}

/// Severity stored in `system_logs.level`.
///
/// Distinct from the tracing levels this binary logs with: `critical` exists
/// on the wire because upstream services emit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl LogLevel {
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Critical,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    #[must_use]
    pub fn wire_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.as_str()).collect()
    }
}

/// Model family stored in `ml_models.model_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Classifier,
    Regressor,
    Clustering,
    Reinforcement,
}

impl ModelType {
    pub const ALL: [Self; 4] = [
        Self::Classifier,
        Self::Regressor,
        Self::Clustering,
        Self::Reinforcement,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classifier => "classifier",
            Self::Regressor => "regressor",
            Self::Clustering => "clustering",
            Self::Reinforcement => "reinforcement",
        }
    }

    #[must_use]
    pub fn wire_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.as_str()).collect()
    }
}

/// Lifecycle state stored in `ml_models.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Training,
    Trained,
    Deployed,
    Archived,
}

impl ModelStatus {
    pub const ALL: [Self; 4] = [
        Self::Training,
        Self::Trained,
        Self::Deployed,
        Self::Archived,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Training => "training",
            Self::Trained => "trained",
            Self::Deployed => "deployed",
            Self::Archived => "archived",
        }
    }

    #[must_use]
    pub fn wire_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.as_str()).collect()
    }
}

/// Optimizer family stored in `genetic_algorithm_config.algorithm_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmType {
    SimpleGa,
    Nsga2,
    Nsga3,
    Custom,
}

impl AlgorithmType {
    pub const ALL: [Self; 4] = [Self::SimpleGa, Self::Nsga2, Self::Nsga3, Self::Custom];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SimpleGa => "simple_ga",
            Self::Nsga2 => "nsga2",
            Self::Nsga3 => "nsga3",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn wire_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.as_str()).collect()
    }
}

/// Parent-selection scheme stored in `genetic_algorithm_config.selection_method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMethod {
    Tournament,
    Roulette,
    Rank,
    Elitist,
}

impl SelectionMethod {
    pub const ALL: [Self; 4] = [Self::Tournament, Self::Roulette, Self::Rank, Self::Elitist];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tournament => "tournament",
            Self::Roulette => "roulette",
            Self::Rank => "rank",
            Self::Elitist => "elitist",
        }
    }

    #[must_use]
    pub fn wire_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.as_str()).collect()
    }
}
