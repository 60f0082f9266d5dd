//! Built-in sample dataset: five well-known players with career totals.

use goatrank_common::{Achievements, CareerStats};

use crate::models::PlayerImport;

struct Line {
    nba_id: i64,
    name: (&'static str, &'static str),
    active: bool,
    position: &'static str,
    height: &'static str,
    weight: i64,
    years: (i64, i64),
    teams: &'static [&'static str],
    // games, ppg, rpg, apg, fg%, total points
    stats: (i64, f64, f64, f64, f64, i64),
    // steals, blocks per game
    defense: (f64, f64),
    // rings, finals trips, MVPs, finals MVPs, All-Star, All-NBA 1st, Hall of Fame
    awards: (i64, i64, i64, i64, i64, i64, bool),
}

const SAMPLE: &[Line] = &[
    Line {
        nba_id: 2544,
        name: ("LeBron", "James"),
        active: true,
        position: "F",
        height: "6-9",
        weight: 250,
        years: (2003, 2024),
        teams: &["CLE", "MIA", "LAL"],
        stats: (1421, 27.2, 7.5, 7.3, 0.505, 38652),
        defense: (1.5, 0.7),
        awards: (4, 10, 4, 4, 19, 13, false),
    },
    Line {
        nba_id: 1628369,
        name: ("Jayson", "Tatum"),
        active: true,
        position: "F",
        height: "6-8",
        weight: 210,
        years: (2017, 2024),
        teams: &["BOS"],
        stats: (513, 23.1, 7.2, 3.5, 0.457, 11854),
        defense: (1.1, 0.7),
        awards: (1, 2, 0, 0, 5, 1, false),
    },
    Line {
        nba_id: 977,
        name: ("Michael", "Jordan"),
        active: false,
        position: "G",
        height: "6-6",
        weight: 218,
        years: (1984, 2003),
        teams: &["CHI", "WAS"],
        stats: (1072, 30.1, 6.2, 5.3, 0.497, 32292),
        defense: (2.3, 0.8),
        awards: (6, 6, 5, 6, 14, 10, true),
    },
    Line {
        nba_id: 76001,
        name: ("Kobe", "Bryant"),
        active: false,
        position: "G",
        height: "6-6",
        weight: 212,
        years: (1996, 2016),
        teams: &["LAL"],
        stats: (1346, 25.0, 5.2, 4.7, 0.447, 33643),
        defense: (1.4, 0.5),
        awards: (5, 7, 1, 2, 18, 11, true),
    },
    Line {
        nba_id: 76003,
        name: ("Tim", "Duncan"),
        active: false,
        position: "F-C",
        height: "6-11",
        weight: 250,
        years: (1997, 2016),
        teams: &["SAS"],
        stats: (1392, 19.0, 10.8, 3.0, 0.506, 26496),
        defense: (0.7, 2.2),
        awards: (5, 6, 2, 3, 15, 10, true),
    },
];

/// The sample players in import form.
pub fn sample_players() -> Vec<PlayerImport> {
    SAMPLE.iter().map(to_import).collect()
}

fn to_import(line: &Line) -> PlayerImport {
    let (first, last) = line.name;
    let (games, ppg, rpg, apg, fg, total) = line.stats;
    let (spg, bpg) = line.defense;
    let (rings, finals, mvps, finals_mvps, all_stars, all_nba, hof) = line.awards;

    PlayerImport {
        id: line.nba_id,
        full_name: format!("{first} {last}"),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        is_active: line.active,
        position: Some(line.position.to_string()),
        height: Some(line.height.to_string()),
        weight: Some(line.weight),
        from_year: Some(line.years.0),
        to_year: Some(line.years.1),
        teams: line.teams.iter().map(|t| t.to_string()).collect(),
        career_stats: Some(CareerStats {
            games_played: Some(games),
            points_per_game: Some(ppg),
            rebounds_per_game: Some(rpg),
            assists_per_game: Some(apg),
            steals_per_game: Some(spg),
            blocks_per_game: Some(bpg),
            field_goal_percentage: Some(fg),
            total_points: Some(total),
            ..Default::default()
        }),
        achievements: Some(Achievements {
            championships: rings,
            finals_appearances: finals,
            mvp_awards: mvps,
            finals_mvp_awards: finals_mvps,
            all_star_selections: all_stars,
            all_nba_first_team: all_nba,
            hall_of_fame: hof,
            ..Default::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_valid_and_unique() {
        let players = sample_players();
        assert_eq!(players.len(), 5);
        for p in &players {
            p.validate().unwrap();
        }
        let mut ids: Vec<i64> = players.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_jordan_line() {
        let mj = sample_players().into_iter().find(|p| p.id == 977).unwrap();
        assert_eq!(mj.full_name, "Michael Jordan");
        assert_eq!(mj.achievements.unwrap().championships, 6);
        let stats = mj.career_stats.unwrap();
        assert_eq!(stats.points_per_game, Some(30.1));
        assert_eq!(stats.steals_per_game, Some(2.3));
    }
}
