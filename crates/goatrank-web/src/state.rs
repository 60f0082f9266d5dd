//! Shared application state for the web server.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use goatrank_db::{Database, PlayerRepository, SessionRepository};
use goatrank_ranker::{MissingMetricPolicy, RankingOptions, WeightPolicy};

/// Server-wide ranking defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingSettings {
    pub top_n: NonZeroUsize,
    /// Players with fewer career games are left out of the population.
    pub min_games: i64,
    pub renormalise_weights: bool,
    pub strict_metrics: bool,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            top_n: NonZeroUsize::new(100).unwrap_or(NonZeroUsize::MIN),
            min_games: 20,
            renormalise_weights: false,
            strict_metrics: false,
        }
    }
}

impl RankingSettings {
    /// Engine options, with optional per-request overrides.
    pub fn options(&self, top_n: Option<NonZeroUsize>, renormalise: Option<bool>) -> RankingOptions {
        let weight_policy = if renormalise.unwrap_or(self.renormalise_weights) {
            WeightPolicy::Renormalise
        } else {
            WeightPolicy::Reject
        };
        let missing_metric_policy = if self.strict_metrics {
            MissingMetricPolicy::Strict
        } else {
            MissingMetricPolicy::PopulationMin
        };

        RankingOptions::new(top_n.unwrap_or(self.top_n))
            .with_weight_policy(weight_policy)
            .with_missing_metric_policy(missing_metric_policy)
    }
}

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub ranking: RankingSettings,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            ranking: RankingSettings::default(),
            static_dir: PathBuf::from("static"),
        }
    }

    pub fn with_ranking(mut self, ranking: RankingSettings) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn players(&self) -> PlayerRepository {
        PlayerRepository::new(Arc::clone(&self.db))
    }

    pub fn sessions(&self) -> SessionRepository {
        SessionRepository::new(Arc::clone(&self.db))
    }
}

pub type SharedState = Arc<AppState>;
