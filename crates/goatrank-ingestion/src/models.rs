//! Import record shape shared by the sample dataset and JSON files.

use goatrank_common::{Achievements, CareerStats, GoatrankError, Player, PlayerRecord, Result};
use serde::{Deserialize, Serialize};

/// One player as found in an import file.
///
/// `id` is the NBA stats id. Store ids are assigned on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerImport {
    #[serde(alias = "nba_id")]
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default)]
    pub from_year: Option<i64>,
    #[serde(default)]
    pub to_year: Option<i64>,
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub career_stats: Option<CareerStats>,
    #[serde(default)]
    pub achievements: Option<Achievements>,
}

impl PlayerImport {
    /// Reject records the ranking cannot make sense of.
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(GoatrankError::InvalidData(format!("player {} has no name", self.id)));
        }

        if let Some(stats) = &self.career_stats {
            if stats.games_played.is_some_and(|g| g < 0) {
                return Err(self.invalid("negative games played"));
            }
            let percentages = [
                ("field_goal_percentage", stats.field_goal_percentage),
                ("three_point_percentage", stats.three_point_percentage),
                ("free_throw_percentage", stats.free_throw_percentage),
            ];
            for (name, value) in percentages {
                if let Some(v) = value {
                    if !(0.0..=1.0).contains(&v) {
                        return Err(self.invalid(&format!("{name} {v} outside 0..=1")));
                    }
                }
            }
        }

        if let Some(a) = &self.achievements {
            let counts = [
                a.championships,
                a.finals_appearances,
                a.mvp_awards,
                a.finals_mvp_awards,
                a.all_star_selections,
                a.all_nba_first_team,
                a.all_defensive_first_team,
            ];
            if counts.iter().any(|&c| c < 0) {
                return Err(self.invalid("negative award count"));
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: &str) -> GoatrankError {
        GoatrankError::InvalidData(format!("{}: {reason}", self.full_name))
    }

    /// Convert to a storable record. Teams are kept as a JSON list.
    pub fn into_record(self) -> Result<PlayerRecord> {
        let teams = if self.teams.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&self.teams)?)
        };

        Ok(PlayerRecord {
            player: Player {
                id: 0,
                nba_id: self.id,
                full_name: self.full_name,
                first_name: self.first_name,
                last_name: self.last_name,
                position: self.position,
                height: self.height,
                weight: self.weight,
                from_year: self.from_year,
                to_year: self.to_year,
                is_active: self.is_active,
                teams,
            },
            career_stats: self.career_stats,
            achievements: self.achievements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal() -> PlayerImport {
        serde_json::from_str(r#"{"id": 1, "full_name": "Test Player"}"#).unwrap()
    }

    #[test]
    fn test_minimal_record_parses_with_defaults() {
        let p = minimal();
        assert_eq!(p.teams, Vec::<String>::new());
        assert!(p.career_stats.is_none());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_partial_achievements_default_to_zero() {
        let p: PlayerImport = serde_json::from_str(
            r#"{"nba_id": 2, "full_name": "X", "achievements": {"championships": 2}}"#,
        )
        .unwrap();
        let a = p.achievements.unwrap();
        assert_eq!(a.championships, 2);
        assert_eq!(a.finals_appearances, 0);
        assert!(!a.hall_of_fame);
    }

    #[test]
    fn test_percentage_out_of_range_rejected() {
        let mut p = minimal();
        p.career_stats = Some(CareerStats { field_goal_percentage: Some(49.7), ..Default::default() });
        let err = p.validate().unwrap_err().to_string();
        assert!(err.contains("field_goal_percentage"), "{err}");
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut p = minimal();
        p.full_name = "  ".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_teams_stored_as_json_list() {
        let mut p = minimal();
        p.teams = vec!["CHI".to_string(), "WAS".to_string()];
        let record = p.into_record().unwrap();
        assert_eq!(record.player.teams.as_deref(), Some(r#"["CHI","WAS"]"#));
        assert_eq!(record.player.teams(), vec!["CHI", "WAS"]);
    }
}
