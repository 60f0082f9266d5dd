//! Engine input: one player's identity and raw metrics.

use goatrank_common::PlayerRecord;
use serde::{Deserialize, Serialize};

/// Raw metrics feeding the six categories, in their natural units.
/// `None` means the data layer had no value for the metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMetrics {
    pub points_per_game: Option<f64>,
    pub field_goal_percentage: Option<f64>, // 0.0–1.0
    pub assists_per_game: Option<f64>,
    pub total_points: Option<f64>,
    pub steals_per_game: Option<f64>,
    pub blocks_per_game: Option<f64>,
    pub rebounds_per_game: Option<f64>,
    pub championships: Option<f64>,
    pub finals_appearances: Option<f64>,
    pub games_played: Option<f64>,
    pub mvp_awards: Option<f64>,
    pub all_star_selections: Option<f64>,
}

/// Immutable per-player input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatProfile {
    pub id: i64,
    pub name: String,
    pub metrics: RawMetrics,
}

impl PlayerStatProfile {
    pub fn new(id: i64, name: impl Into<String>, metrics: RawMetrics) -> Self {
        Self { id, name: name.into(), metrics }
    }
}

/// Builder with every metric present at a mid-table value.
/// Setters override one metric; `without_*` clears one.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    id: i64,
    name: String,
    metrics: RawMetrics,
}

macro_rules! metric_setters {
    ($($field:ident => $without:ident),* $(,)?) => {
        $(
            pub fn $field(mut self, value: f64) -> Self {
                self.metrics.$field = Some(value);
                self
            }

            pub fn $without(mut self) -> Self {
                self.metrics.$field = None;
                self
            }
        )*
    };
}

impl ProfileBuilder {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            metrics: RawMetrics {
                points_per_game:       Some(15.0),
                field_goal_percentage: Some(0.46),
                assists_per_game:      Some(3.0),
                total_points:          Some(12_000.0),
                steals_per_game:       Some(1.0),
                blocks_per_game:       Some(0.5),
                rebounds_per_game:     Some(5.0),
                championships:         Some(0.0),
                finals_appearances:    Some(0.0),
                games_played:          Some(800.0),
                mvp_awards:            Some(0.0),
                all_star_selections:   Some(2.0),
            },
        }
    }

    metric_setters! {
        points_per_game => without_points_per_game,
        field_goal_percentage => without_field_goal_percentage,
        assists_per_game => without_assists_per_game,
        total_points => without_total_points,
        steals_per_game => without_steals_per_game,
        blocks_per_game => without_blocks_per_game,
        rebounds_per_game => without_rebounds_per_game,
        championships => without_championships,
        finals_appearances => without_finals_appearances,
        games_played => without_games_played,
        mvp_awards => without_mvp_awards,
        all_star_selections => without_all_star_selections,
    }

    pub fn build(self) -> PlayerStatProfile {
        PlayerStatProfile::new(self.id, self.name, self.metrics)
    }
}

impl From<&PlayerRecord> for PlayerStatProfile {
    fn from(record: &PlayerRecord) -> Self {
        let stats = record.career_stats.as_ref();
        let awards = record.achievements.as_ref();

        let metrics = RawMetrics {
            points_per_game:       stats.and_then(|s| s.points_per_game),
            field_goal_percentage: stats.and_then(|s| s.field_goal_percentage),
            assists_per_game:      stats.and_then(|s| s.assists_per_game),
            total_points:          stats.and_then(|s| s.total_points).map(|v| v as f64),
            steals_per_game:       stats.and_then(|s| s.steals_per_game),
            blocks_per_game:       stats.and_then(|s| s.blocks_per_game),
            rebounds_per_game:     stats.and_then(|s| s.rebounds_per_game),
            games_played:          stats.and_then(|s| s.games_played).map(|v| v as f64),
            championships:         awards.map(|a| a.championships as f64),
            finals_appearances:    awards.map(|a| a.finals_appearances as f64),
            mvp_awards:            awards.map(|a| a.mvp_awards as f64),
            all_star_selections:   awards.map(|a| a.all_star_selections as f64),
        };

        Self::new(record.player.id, record.player.full_name.clone(), metrics)
    }
}
