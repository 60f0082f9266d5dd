//! Core entity types mirroring the relational schema.
//! These are Rust representations of the SQLite tables owned by goatrank-db.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i64,
    pub nba_id: i64,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub height: Option<String>,  // e.g. 6-9
    pub weight: Option<i64>,     // pounds
    pub from_year: Option<i64>,
    pub to_year: Option<i64>,
    pub is_active: bool,
    /// JSON list of team abbreviations, e.g. ["CLE","MIA","LAL"]
    pub teams: Option<String>,
}

impl Player {
    /// Team abbreviations decoded from the stored JSON list.
    /// A malformed or absent list yields an empty vector.
    pub fn teams(&self) -> Vec<String> {
        self.teams
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    /// Number of seasons spanned by `from_year..=to_year`, when both are known.
    pub fn seasons_played(&self) -> Option<i64> {
        match (self.from_year, self.to_year) {
            (Some(from), Some(to)) if to >= from => Some(to - from + 1),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Career statistics (regular season, career totals)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CareerStats {
    pub games_played: Option<i64>,
    pub games_started: Option<i64>,
    pub minutes_per_game: Option<f64>,
    pub points_per_game: Option<f64>,
    pub rebounds_per_game: Option<f64>,
    pub assists_per_game: Option<f64>,
    pub steals_per_game: Option<f64>,
    pub blocks_per_game: Option<f64>,
    pub turnovers_per_game: Option<f64>,
    pub field_goal_percentage: Option<f64>,   // 0.0–1.0
    pub three_point_percentage: Option<f64>,  // 0.0–1.0
    pub free_throw_percentage: Option<f64>,   // 0.0–1.0
    pub total_points: Option<i64>,
    pub total_rebounds: Option<i64>,
    pub total_assists: Option<i64>,
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Achievements {
    pub championships: i64,
    pub finals_appearances: i64,
    pub mvp_awards: i64,
    pub finals_mvp_awards: i64,
    pub all_star_selections: i64,
    pub all_nba_first_team: i64,
    pub all_defensive_first_team: i64,
    pub hall_of_fame: bool,
}

// ---------------------------------------------------------------------------
// Player record (join of the three tables)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player: Player,
    pub career_stats: Option<CareerStats>,
    pub achievements: Option<Achievements>,
}

// ---------------------------------------------------------------------------
// Era preference (stored with a session, displayed only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EraPreference {
    #[default]
    Any,
    Modern,
    Classic,
}

impl EraPreference {
    /// Serialize to the string stored in the DB.
    pub fn as_str(&self) -> &'static str {
        match self {
            EraPreference::Any     => "any",
            EraPreference::Modern  => "modern",
            EraPreference::Classic => "classic",
        }
    }

    /// Parse from the string stored in the DB or submitted by the form.
    /// Unknown labels fall back to `Any`.
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern"  => EraPreference::Modern,
            "classic" => EraPreference::Classic,
            _         => EraPreference::Any,
        }
    }
}

// ---------------------------------------------------------------------------
// User session
// ---------------------------------------------------------------------------

/// One preference submission and the ranking it produced.
/// Weights are stored as fractions in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub session_id: Uuid,
    pub offense_weight: f64,
    pub defense_weight: f64,
    pub team_success_weight: f64,
    pub longevity_weight: f64,
    pub efficiency_weight: f64,
    pub peak_performance_weight: f64,
    pub era_preference: EraPreference,
    /// Ranking result serialized verbatim.
    pub ranked_players: serde_json::Value,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl UserSession {
    /// Decode the stored ranking into the caller's row type.
    /// A session without a stored ranking decodes as an empty list.
    pub fn ranked_players<T: DeserializeOwned>(&self) -> serde_json::Result<Vec<T>> {
        if self.ranked_players.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(self.ranked_players.clone())
    }
}
