//! Ranking: composite scoring, deterministic ordering and rank assignment.

use std::cmp::Ordering;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RankingError;
use crate::profile::PlayerStatProfile;
use crate::scorer::{compute_category_scores, compute_composite_score, first_missing_metric, CategoryScores, Metric};
use crate::weights::{Category, PreferenceVector};

/// What to do with a weight vector that does not sum to ~1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// Fail with `InvalidPreference`.
    #[default]
    Reject,
    /// Rescale the weights to sum to 1.0 before scoring.
    Renormalise,
}

/// What to do with a player lacking a metric some category needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMetricPolicy {
    /// Score the category at the population minimum (0.0).
    #[default]
    PopulationMin,
    /// Fail with `MissingMetric`.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingOptions {
    pub top_n: NonZeroUsize,
    pub weight_policy: WeightPolicy,
    pub missing_metric_policy: MissingMetricPolicy,
}

impl RankingOptions {
    pub fn new(top_n: NonZeroUsize) -> Self {
        Self {
            top_n,
            weight_policy: WeightPolicy::default(),
            missing_metric_policy: MissingMetricPolicy::default(),
        }
    }

    pub fn with_weight_policy(mut self, policy: WeightPolicy) -> Self {
        self.weight_policy = policy;
        self
    }

    pub fn with_missing_metric_policy(mut self, policy: MissingMetricPolicy) -> Self {
        self.missing_metric_policy = policy;
        self
    }
}

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlayer {
    /// 1-based; equal standings share a rank (1, 1, 3).
    pub rank: usize,
    pub player_id: i64,
    pub name: String,
    pub composite_score: f64,
    pub category_scores: CategoryScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    /// The weights actually applied (after renormalisation, if requested).
    pub weights: PreferenceVector,
    /// Number of players scored, before truncation.
    pub population: usize,
    pub players: Vec<RankedPlayer>,
}

impl RankingResult {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Rank `players` under `weights` with default options, keeping the top `top_n`.
pub fn compute_ranking(
    players: &[PlayerStatProfile],
    weights: &PreferenceVector,
    top_n: NonZeroUsize,
) -> Result<RankingResult, RankingError> {
    compute_ranking_with(players, weights, &RankingOptions::new(top_n))
}

/// Rank `players` under `weights`.
///
/// Weights are checked before the population, so a request that is wrong on
/// both counts reports `InvalidPreference`.
pub fn compute_ranking_with(
    players: &[PlayerStatProfile],
    weights: &PreferenceVector,
    options: &RankingOptions,
) -> Result<RankingResult, RankingError> {
    let weights = match options.weight_policy {
        WeightPolicy::Reject => {
            weights.validate()?;
            *weights
        }
        WeightPolicy::Renormalise => weights.normalised()?,
    };

    if players.is_empty() {
        return Err(RankingError::EmptyPopulation);
    }

    if options.missing_metric_policy == MissingMetricPolicy::Strict {
        check_complete(players)?;
    }

    let scores = compute_category_scores(players);
    let mut standings: Vec<Standing<'_>> = players
        .iter()
        .zip(scores)
        .map(|(profile, category_scores)| Standing::new(profile, category_scores, &weights))
        .collect();

    standings.sort_by(Standing::order);

    let mut ranked: Vec<RankedPlayer> = Vec::with_capacity(standings.len());
    for (i, standing) in standings.iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if standing.same_standing(&standings[i - 1]) => prev.rank,
            _ => i + 1,
        };
        ranked.push(RankedPlayer {
            rank,
            player_id: standing.profile.id,
            name: standing.profile.name.clone(),
            composite_score: standing.composite,
            category_scores: standing.category_scores,
        });
    }
    ranked.truncate(options.top_n.get());

    debug!(
        population = players.len(),
        returned = ranked.len(),
        "ranking computed"
    );

    Ok(RankingResult {
        weights,
        population: players.len(),
        players: ranked,
    })
}

fn check_complete(players: &[PlayerStatProfile]) -> Result<(), RankingError> {
    for profile in players {
        for category in Category::ALL {
            if let Some(metric) = first_missing_metric(profile, category) {
                return Err(RankingError::MissingMetric {
                    player: profile.name.clone(),
                    metric: metric.as_str(),
                });
            }
        }
    }
    Ok(())
}

/// A scored player plus its tie-break keys.
struct Standing<'a> {
    profile: &'a PlayerStatProfile,
    category_scores: CategoryScores,
    composite: f64,
    championships: f64,
    games_played: f64,
}

impl<'a> Standing<'a> {
    fn new(profile: &'a PlayerStatProfile, category_scores: CategoryScores, weights: &PreferenceVector) -> Self {
        Self {
            profile,
            composite: compute_composite_score(&category_scores, weights),
            category_scores,
            championships: Metric::Championships.value(&profile.metrics).unwrap_or(0.0),
            games_played: Metric::GamesPlayed.value(&profile.metrics).unwrap_or(0.0),
        }
    }

    /// Composite desc, championships desc, games played desc, name asc, id asc.
    fn order(a: &Self, b: &Self) -> Ordering {
        b.composite
            .total_cmp(&a.composite)
            .then_with(|| b.championships.total_cmp(&a.championships))
            .then_with(|| b.games_played.total_cmp(&a.games_played))
            .then_with(|| a.profile.name.cmp(&b.profile.name))
            .then_with(|| a.profile.id.cmp(&b.profile.id))
    }

    /// Equal on every scoring key; identity alone does not separate ranks.
    fn same_standing(&self, other: &Self) -> bool {
        self.composite.total_cmp(&other.composite) == Ordering::Equal
            && self.championships.total_cmp(&other.championships) == Ordering::Equal
            && self.games_played.total_cmp(&other.games_played) == Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileBuilder;
    use pretty_assertions::assert_eq;

    fn top(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn league() -> Vec<PlayerStatProfile> {
        vec![
            ProfileBuilder::new(1, "Scorer").points_per_game(30.0).total_points(32_000.0).mvp_awards(5.0).build(),
            ProfileBuilder::new(2, "Anchor").blocks_per_game(2.9).rebounds_per_game(12.1).championships(5.0).build(),
            ProfileBuilder::new(3, "Ironman").games_played(1_600.0).finals_appearances(2.0).build(),
            ProfileBuilder::new(4, "Shooter").field_goal_percentage(0.58).points_per_game(19.0).build(),
            ProfileBuilder::new(5, "Bench").points_per_game(6.0).games_played(300.0).all_star_selections(0.0).build(),
        ]
    }

    fn offense_defense() -> PreferenceVector {
        PreferenceVector::from_array([0.7, 0.3, 0.0, 0.0, 0.0, 0.0])
    }

    #[test]
    fn test_two_player_example() {
        let players = vec![
            ProfileBuilder::new(1, "A").points_per_game(30.0).steals_per_game(2.0).build(),
            ProfileBuilder::new(2, "B").points_per_game(20.0).steals_per_game(5.0).build(),
        ];
        let result = compute_ranking(&players, &offense_defense(), top(10)).unwrap();

        assert_eq!(result.len(), 2);
        let a = &result.players[0];
        let b = &result.players[1];
        assert_eq!((a.name.as_str(), a.rank), ("A", 1));
        assert_eq!((b.name.as_str(), b.rank), ("B", 2));
        assert_eq!(a.category_scores.offense, 1.0);
        assert_eq!(a.category_scores.defense, 0.0);
        assert_eq!(b.category_scores.offense, 0.0);
        assert_eq!(b.category_scores.defense, 1.0);
        assert!((a.composite_score - 0.7).abs() < 1e-9);
        assert!((b.composite_score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_empty_population() {
        let err = compute_ranking(&[], &PreferenceVector::default(), top(5)).unwrap_err();
        assert_eq!(err, RankingError::EmptyPopulation);
    }

    #[test]
    fn test_short_weight_sum_rejected() {
        let weights = PreferenceVector::from_array([0.5, 0.3, 0.0, 0.0, 0.0, 0.0]);
        let err = compute_ranking(&league(), &weights, top(5)).unwrap_err();
        assert!(matches!(err, RankingError::InvalidPreference(_)));
    }

    #[test]
    fn test_invalid_weights_reported_before_empty_population() {
        let weights = PreferenceVector::from_array([0.5, 0.3, 0.0, 0.0, 0.0, 0.0]);
        let err = compute_ranking(&[], &weights, top(5)).unwrap_err();
        assert!(matches!(err, RankingError::InvalidPreference(_)));
    }

    #[test]
    fn test_renormalise_mode_accepts_short_sum() {
        let weights = PreferenceVector::from_array([0.56, 0.24, 0.0, 0.0, 0.0, 0.0]);
        let players = vec![
            ProfileBuilder::new(1, "A").points_per_game(30.0).steals_per_game(2.0).build(),
            ProfileBuilder::new(2, "B").points_per_game(20.0).steals_per_game(5.0).build(),
        ];
        let options = RankingOptions::new(top(10)).with_weight_policy(WeightPolicy::Renormalise);
        let result = compute_ranking_with(&players, &weights, &options).unwrap();

        assert!((result.weights.offense - 0.7).abs() < 1e-9);
        assert!((result.players[0].composite_score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_length_is_min_of_top_n_and_population() {
        let players = league();
        let weights = PreferenceVector::default();
        assert_eq!(compute_ranking(&players, &weights, top(2)).unwrap().len(), 2);
        let all = compute_ranking(&players, &weights, top(1000)).unwrap();
        assert_eq!(all.len(), players.len());
        assert_eq!(all.population, players.len());
    }

    #[test]
    fn test_scores_non_increasing() {
        let result = compute_ranking(&league(), &PreferenceVector::default(), top(100)).unwrap();
        for pair in result.players.windows(2) {
            assert!(pair[0].composite_score >= pair[1].composite_score);
            assert!(pair[0].rank <= pair[1].rank);
        }
    }

    #[test]
    fn test_zero_variance_category_scores_zero() {
        let players = vec![
            ProfileBuilder::new(1, "A").points_per_game(30.0).games_played(800.0).build(),
            ProfileBuilder::new(2, "B").points_per_game(20.0).games_played(800.0).build(),
            ProfileBuilder::new(3, "C").points_per_game(25.0).games_played(800.0).build(),
        ];
        let result = compute_ranking(&players, &PreferenceVector::default(), top(3)).unwrap();
        for row in &result.players {
            assert_eq!(row.category_scores.longevity, 0.0);
        }
    }

    #[test]
    fn test_idempotent_output() {
        let players = league();
        let weights = PreferenceVector::from_array([0.3, 0.1, 0.2, 0.1, 0.1, 0.2]);
        let first = compute_ranking(&players, &weights, top(10)).unwrap();
        let second = compute_ranking(&players, &weights, top(10)).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_identical_players_share_rank_without_compression() {
        let twin = |id, name| {
            ProfileBuilder::new(id, name).points_per_game(25.0).championships(2.0).games_played(900.0).build()
        };
        let players = vec![
            ProfileBuilder::new(3, "Zed").points_per_game(10.0).championships(0.0).games_played(300.0).build(),
            twin(2, "Twin B"),
            twin(1, "Twin A"),
        ];
        let weights = PreferenceVector::from_array([1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let result = compute_ranking(&players, &weights, top(3)).unwrap();

        let rows: Vec<(&str, usize)> = result.players.iter().map(|r| (r.name.as_str(), r.rank)).collect();
        assert_eq!(rows, vec![("Twin A", 1), ("Twin B", 1), ("Zed", 3)]);
    }

    #[test]
    fn test_tie_break_by_championships_then_games() {
        // Only efficiency is weighted, and both rows are identical there.
        let players = vec![
            ProfileBuilder::new(1, "Fewer Games").championships(3.0).games_played(700.0).build(),
            ProfileBuilder::new(2, "More Games").championships(3.0).games_played(1200.0).build(),
        ];
        let weights = PreferenceVector::from_array([0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let result = compute_ranking(&players, &weights, top(2)).unwrap();

        assert_eq!(result.players[0].name, "More Games");
        assert_eq!(result.players[0].rank, 1);
        assert_eq!(result.players[1].rank, 2);
    }

    #[test]
    fn test_missing_metric_defaults_to_population_min() {
        let players = vec![
            ProfileBuilder::new(1, "Complete").build(),
            ProfileBuilder::new(2, "No Rings").without_championships().build(),
        ];
        let result = compute_ranking(&players, &PreferenceVector::default(), top(2)).unwrap();
        let no_rings = result.players.iter().find(|r| r.name == "No Rings").unwrap();
        assert_eq!(no_rings.category_scores.team_success, 0.0);
    }

    #[test]
    fn test_strict_mode_reports_missing_metric() {
        let players = vec![
            ProfileBuilder::new(1, "Complete").build(),
            ProfileBuilder::new(2, "No Rings").without_championships().build(),
        ];
        let options = RankingOptions::new(top(2)).with_missing_metric_policy(MissingMetricPolicy::Strict);
        let err = compute_ranking_with(&players, &PreferenceVector::default(), &options).unwrap_err();
        assert_eq!(
            err,
            RankingError::MissingMetric { player: "No Rings".to_string(), metric: "championships" }
        );
    }

    #[test]
    fn test_input_not_reordered() {
        let players = league();
        let before = players.clone();
        let _ = compute_ranking(&players, &PreferenceVector::default(), top(3)).unwrap();
        assert_eq!(players, before);
    }
}
