//! Category aggregation and composite score computation.
//!
//! Each category is a fixed blend of rescaled sub-metrics:
//!
//! | Category         | Sub-metrics (weight)                                        |
//! |------------------|-------------------------------------------------------------|
//! | Offense          | points/game 0.4, FG% 0.2, assists/game 0.2, career pts 0.2  |
//! | Defense          | steals/game 0.3, blocks/game 0.3, rebounds/game 0.4         |
//! | Team success     | championships 0.7, finals appearances 0.3                   |
//! | Longevity        | games played 1.0                                            |
//! | Efficiency       | FG% 0.5, scoring efficiency (points/game × FG%) 0.5         |
//! | Peak performance | MVP awards 0.6, All-Star selections 0.4                     |
//!
//! Sub-metrics are min-max rescaled across the population before blending so
//! that metrics in different units combine on one scale. The table is fixed
//! and not user-configurable.

use serde::{Deserialize, Serialize};
use crate::normalise::{minmax_population, Range};
use crate::profile::{PlayerStatProfile, RawMetrics};
use crate::weights::{Category, PreferenceVector};

/// A single raw metric, or a value derived from raw metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    PointsPerGame,
    FieldGoalPercentage,
    AssistsPerGame,
    TotalPoints,
    StealsPerGame,
    BlocksPerGame,
    ReboundsPerGame,
    Championships,
    FinalsAppearances,
    GamesPlayed,
    MvpAwards,
    AllStarSelections,
    /// points/game × FG%
    ScoringEfficiency,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::PointsPerGame       => "points_per_game",
            Metric::FieldGoalPercentage => "field_goal_percentage",
            Metric::AssistsPerGame      => "assists_per_game",
            Metric::TotalPoints         => "total_points",
            Metric::StealsPerGame       => "steals_per_game",
            Metric::BlocksPerGame       => "blocks_per_game",
            Metric::ReboundsPerGame     => "rebounds_per_game",
            Metric::Championships       => "championships",
            Metric::FinalsAppearances   => "finals_appearances",
            Metric::GamesPlayed         => "games_played",
            Metric::MvpAwards           => "mvp_awards",
            Metric::AllStarSelections   => "all_star_selections",
            Metric::ScoringEfficiency   => "scoring_efficiency",
        }
    }

    /// Read the metric from a profile. Non-finite values count as missing.
    pub fn value(&self, m: &RawMetrics) -> Option<f64> {
        let v = match self {
            Metric::PointsPerGame       => m.points_per_game,
            Metric::FieldGoalPercentage => m.field_goal_percentage,
            Metric::AssistsPerGame      => m.assists_per_game,
            Metric::TotalPoints         => m.total_points,
            Metric::StealsPerGame       => m.steals_per_game,
            Metric::BlocksPerGame       => m.blocks_per_game,
            Metric::ReboundsPerGame     => m.rebounds_per_game,
            Metric::Championships       => m.championships,
            Metric::FinalsAppearances   => m.finals_appearances,
            Metric::GamesPlayed         => m.games_played,
            Metric::MvpAwards           => m.mvp_awards,
            Metric::AllStarSelections   => m.all_star_selections,
            Metric::ScoringEfficiency   => m.points_per_game.zip(m.field_goal_percentage).map(|(p, f)| p * f),
        };
        v.filter(|v| v.is_finite())
    }
}

const OFFENSE: &[(Metric, f64)] = &[
    (Metric::PointsPerGame, 0.4),
    (Metric::FieldGoalPercentage, 0.2),
    (Metric::AssistsPerGame, 0.2),
    (Metric::TotalPoints, 0.2),
];
const DEFENSE: &[(Metric, f64)] = &[
    (Metric::StealsPerGame, 0.3),
    (Metric::BlocksPerGame, 0.3),
    (Metric::ReboundsPerGame, 0.4),
];
const TEAM_SUCCESS: &[(Metric, f64)] = &[
    (Metric::Championships, 0.7),
    (Metric::FinalsAppearances, 0.3),
];
const LONGEVITY: &[(Metric, f64)] = &[(Metric::GamesPlayed, 1.0)];
const EFFICIENCY: &[(Metric, f64)] = &[
    (Metric::FieldGoalPercentage, 0.5),
    (Metric::ScoringEfficiency, 0.5),
];
const PEAK_PERFORMANCE: &[(Metric, f64)] = &[
    (Metric::MvpAwards, 0.6),
    (Metric::AllStarSelections, 0.4),
];

/// Fixed sub-metric blend for a category. Weights in each blend sum to 1.0.
pub fn sub_weights(category: Category) -> &'static [(Metric, f64)] {
    match category {
        Category::Offense         => OFFENSE,
        Category::Defense         => DEFENSE,
        Category::TeamSuccess     => TEAM_SUCCESS,
        Category::Longevity       => LONGEVITY,
        Category::Efficiency      => EFFICIENCY,
        Category::PeakPerformance => PEAK_PERFORMANCE,
    }
}

/// First sub-metric of `category` the profile lacks, if any.
pub fn first_missing_metric(profile: &PlayerStatProfile, category: Category) -> Option<Metric> {
    sub_weights(category)
        .iter()
        .map(|(metric, _)| *metric)
        .find(|metric| metric.value(&profile.metrics).is_none())
}

/// Raw category value per player (same order as `players`).
///
/// `None` when the player lacks any sub-metric of the category.
pub fn category_raw_values(players: &[PlayerStatProfile], category: Category) -> Vec<Option<f64>> {
    let blend = sub_weights(category);

    // Rescale each sub-metric column across the population.
    let columns: Vec<Vec<Option<f64>>> = blend
        .iter()
        .map(|(metric, _)| {
            let raw: Vec<Option<f64>> = players.iter().map(|p| metric.value(&p.metrics)).collect();
            let range = Range::of(&raw);
            raw.iter()
                .map(|&v| v.zip(range).map(|(v, r)| r.normalise(v)))
                .collect()
        })
        .collect();

    (0..players.len())
        .map(|i| {
            blend
                .iter()
                .zip(&columns)
                .try_fold(0.0, |acc, ((_, w), column)| column[i].map(|v| acc + w * v))
        })
        .collect()
}

/// Normalised category scores (all in [0, 1]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub offense: f64,
    pub defense: f64,
    pub team_success: f64,
    pub longevity: f64,
    pub efficiency: f64,
    pub peak_performance: f64,
}

impl CategoryScores {
    pub fn from_array(s: [f64; 6]) -> Self {
        Self {
            offense:          s[0],
            defense:          s[1],
            team_success:     s[2],
            longevity:        s[3],
            efficiency:       s[4],
            peak_performance: s[5],
        }
    }

    pub fn as_array(&self) -> [f64; 6] {
        [
            self.offense,
            self.defense,
            self.team_success,
            self.longevity,
            self.efficiency,
            self.peak_performance,
        ]
    }

    pub fn get(&self, category: Category) -> f64 {
        self.as_array()[category.index()]
    }
}

/// Normalised category scores for every player (same order as `players`).
pub fn compute_category_scores(players: &[PlayerStatProfile]) -> Vec<CategoryScores> {
    let per_category: Vec<Vec<f64>> = Category::ALL
        .iter()
        .map(|&c| minmax_population(&category_raw_values(players, c)))
        .collect();

    (0..players.len())
        .map(|i| {
            let mut s = [0.0; 6];
            for (slot, column) in s.iter_mut().zip(&per_category) {
                *slot = column[i];
            }
            CategoryScores::from_array(s)
        })
        .collect()
}

/// Compute the composite score S = Σ(w_c × n_c).
pub fn compute_composite_score(scores: &CategoryScores, weights: &PreferenceVector) -> f64 {
    let weighted_sum: f64 = scores
        .as_array()
        .iter()
        .zip(weights.as_array().iter())
        .map(|(n, w)| n * w)
        .sum();

    weighted_sum.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileBuilder;

    #[test]
    fn test_blends_sum_to_one() {
        for c in Category::ALL {
            let total: f64 = sub_weights(c).iter().map(|(_, w)| w).sum();
            assert!((total - 1.0).abs() < 1e-12, "{} blend sums to {}", c.as_str(), total);
        }
    }

    #[test]
    fn test_scoring_efficiency_is_derived() {
        let p = ProfileBuilder::new(1, "A").points_per_game(20.0).field_goal_percentage(0.5).build();
        assert_eq!(Metric::ScoringEfficiency.value(&p.metrics), Some(10.0));
    }

    #[test]
    fn test_nan_metric_counts_as_missing() {
        let p = ProfileBuilder::new(1, "A").games_played(f64::NAN).build();
        assert_eq!(Metric::GamesPlayed.value(&p.metrics), None);
        assert_eq!(first_missing_metric(&p, Category::Longevity), Some(Metric::GamesPlayed));
    }

    #[test]
    fn test_category_scores_in_unit_interval() {
        let players = vec![
            ProfileBuilder::new(1, "A").points_per_game(30.0).steals_per_game(1.0).build(),
            ProfileBuilder::new(2, "B").points_per_game(20.0).steals_per_game(3.0).build(),
            ProfileBuilder::new(3, "C").points_per_game(25.0).steals_per_game(2.0).build(),
        ];
        for scores in compute_category_scores(&players) {
            for v in scores.as_array() {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_missing_sub_metric_scores_zero_in_category_only() {
        let players = vec![
            ProfileBuilder::new(1, "A").games_played(1000.0).build(),
            ProfileBuilder::new(2, "B").games_played(500.0).without_championships().build(),
        ];
        let scores = compute_category_scores(&players);
        assert_eq!(scores[1].team_success, 0.0);
        assert_eq!(scores[0].longevity, 1.0);
        assert_eq!(scores[1].longevity, 0.0);
    }

    #[test]
    fn test_composite_is_weighted_sum() {
        let scores = CategoryScores::from_array([1.0, 0.5, 0.0, 0.0, 0.0, 0.0]);
        let weights = PreferenceVector::from_array([0.5, 0.5, 0.0, 0.0, 0.0, 0.0]);
        assert!((compute_composite_score(&scores, &weights) - 0.75).abs() < 1e-12);
    }
}
