//! goatrank-ranker: Player ranking engine.
//!
//! Turns a population of [`PlayerStatProfile`]s and a [`PreferenceVector`]
//! into an ordered [`RankingResult`]: sub-metrics are rescaled and folded into
//! six category values, each category is min-max normalised across the
//! population, and the composite is the preference-weighted sum.

pub mod error;
pub mod weights;
pub mod normalise;
pub mod profile;
pub mod scorer;
pub mod ranking;

pub use error::RankingError;
pub use profile::{PlayerStatProfile, ProfileBuilder, RawMetrics};
pub use ranking::{
    compute_ranking, compute_ranking_with, MissingMetricPolicy, RankedPlayer, RankingOptions,
    RankingResult, WeightPolicy,
};
pub use scorer::CategoryScores;
pub use weights::{Category, PreferenceVector, WEIGHT_SUM_TOLERANCE};
