//! Ranking over the stored population.

use std::num::NonZeroUsize;

use goatrank_ranker::{compute_ranking_with, PlayerStatProfile, PreferenceVector, RankingResult};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Load eligible players and rank them under `weights`.
pub async fn rank_players(
    state: &AppState,
    weights: &PreferenceVector,
    top_n: Option<NonZeroUsize>,
    renormalise: Option<bool>,
) -> Result<RankingResult, ApiError> {
    let records = state.players().records_for_ranking(state.ranking.min_games).await?;
    let profiles: Vec<PlayerStatProfile> = records.iter().map(PlayerStatProfile::from).collect();

    let options = state.ranking.options(top_n, renormalise);
    let result = compute_ranking_with(&profiles, weights, &options)?;

    info!(population = result.population, returned = result.len(), "Ranking computed");
    Ok(result)
}
