//! Ranking engine error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// Weights are negative, non-finite, or do not sum to ~1.0.
    #[error("Invalid preference vector: {0}")]
    InvalidPreference(String),

    #[error("Cannot rank an empty player population")]
    EmptyPopulation,

    /// Only raised under `MissingMetricPolicy::Strict`.
    #[error("Player '{player}' is missing required metric '{metric}'")]
    MissingMetric { player: String, metric: &'static str },
}
