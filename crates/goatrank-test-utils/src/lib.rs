//! Shared fixtures for goatrank tests.
//!
//! The fixture league is synthetic: six players with hand-picked stat lines
//! that spread across every category, plus one player with no career stats
//! and one below the default minimum-games threshold.

use goatrank_common::{Achievements, CareerStats, Player, PlayerRecord};
use goatrank_ranker::PlayerStatProfile;

pub use pretty_assertions;

/// Install a test-friendly tracing subscriber. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("goatrank=debug")
        .with_test_writer()
        .try_init();
}

/// A bare player row with the given identity.
pub fn player(id: i64, nba_id: i64, full_name: &str) -> Player {
    let mut parts = full_name.splitn(2, ' ');
    Player {
        id,
        nba_id,
        full_name: full_name.to_string(),
        first_name: parts.next().map(str::to_string),
        last_name: parts.next().map(str::to_string),
        position: Some("G".to_string()),
        height: Some("6-6".to_string()),
        weight: Some(210),
        from_year: Some(2000),
        to_year: Some(2012),
        is_active: false,
        teams: Some(r#"["TST"]"#.to_string()),
    }
}

/// Career stat line: (games, ppg, rpg, apg, spg, bpg, fg%).
pub fn career(games: i64, ppg: f64, rpg: f64, apg: f64, spg: f64, bpg: f64, fg_pct: f64) -> CareerStats {
    CareerStats {
        games_played: Some(games),
        games_started: Some(games),
        minutes_per_game: Some(34.0),
        points_per_game: Some(ppg),
        rebounds_per_game: Some(rpg),
        assists_per_game: Some(apg),
        steals_per_game: Some(spg),
        blocks_per_game: Some(bpg),
        turnovers_per_game: Some(2.5),
        field_goal_percentage: Some(fg_pct),
        three_point_percentage: Some(0.35),
        free_throw_percentage: Some(0.8),
        total_points: Some((games as f64 * ppg).round() as i64),
        total_rebounds: Some((games as f64 * rpg).round() as i64),
        total_assists: Some((games as f64 * apg).round() as i64),
    }
}

/// Achievements: (rings, finals, MVPs, All-Star selections).
pub fn awards(championships: i64, finals: i64, mvps: i64, all_stars: i64) -> Achievements {
    Achievements {
        championships,
        finals_appearances: finals,
        mvp_awards: mvps,
        finals_mvp_awards: championships.min(mvps),
        all_star_selections: all_stars,
        all_nba_first_team: mvps * 2,
        all_defensive_first_team: 0,
        hall_of_fame: all_stars >= 10,
    }
}

/// The fixture league as stored records.
pub fn sample_records() -> Vec<PlayerRecord> {
    vec![
        PlayerRecord {
            player: player(1, 9001, "Avery Scorer"),
            career_stats: Some(career(1100, 29.5, 6.0, 5.5, 2.0, 0.7, 0.49)),
            achievements: Some(awards(4, 6, 4, 14)),
        },
        PlayerRecord {
            player: player(2, 9002, "Blake Anchor"),
            career_stats: Some(career(1350, 18.0, 11.5, 2.5, 0.9, 2.4, 0.52)),
            achievements: Some(awards(5, 6, 2, 15)),
        },
        PlayerRecord {
            player: player(3, 9003, "Casey Ironman"),
            career_stats: Some(career(1600, 15.5, 4.0, 7.5, 1.4, 0.2, 0.45)),
            achievements: Some(awards(1, 2, 0, 6)),
        },
        PlayerRecord {
            player: player(4, 9004, "Devon Shooter"),
            career_stats: Some(career(700, 21.0, 3.5, 3.0, 1.1, 0.3, 0.55)),
            achievements: Some(awards(0, 1, 0, 3)),
        },
        PlayerRecord {
            player: player(5, 9005, "Emery Unknown"),
            career_stats: None,
            achievements: Some(awards(0, 0, 0, 0)),
        },
        PlayerRecord {
            player: player(6, 9006, "Frankie Cameo"),
            career_stats: Some(career(12, 4.0, 1.0, 0.5, 0.2, 0.1, 0.38)),
            achievements: None,
        },
    ]
}

/// The fixture league as engine input.
pub fn sample_profiles() -> Vec<PlayerStatProfile> {
    sample_records().iter().map(PlayerStatProfile::from).collect()
}
