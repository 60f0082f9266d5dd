//! Player repository: players with their career stats and achievements.

use std::collections::HashMap;
use std::sync::Arc;

use goatrank_common::{Achievements, CareerStats, Player, PlayerRecord, Result};
use tracing::{debug, info};

use crate::database::Database;

#[derive(sqlx::FromRow)]
struct CareerStatsRow {
    player_id: i64,
    #[sqlx(flatten)]
    stats: CareerStats,
}

#[derive(sqlx::FromRow)]
struct AchievementsRow {
    player_id: i64,
    #[sqlx(flatten)]
    achievements: Achievements,
}

const PLAYER_COLUMNS: &str = "p.id, p.nba_id, p.full_name, p.first_name, p.last_name, p.position, \
     p.height, p.weight, p.from_year, p.to_year, p.is_active, p.teams";

/// Repository for player records.
pub struct PlayerRepository {
    db: Arc<Database>,
}

impl PlayerRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a player with its optional stats and achievements in one
    /// transaction. `record.player.id` is ignored; the new row id is returned.
    pub async fn insert(&self, record: &PlayerRecord) -> Result<i64> {
        let mut tx = self.db.pool().begin().await?;
        let p = &record.player;

        let id = sqlx::query(
            r#"
            INSERT INTO players
                (nba_id, full_name, first_name, last_name, position, height,
                 weight, from_year, to_year, is_active, teams)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(p.nba_id)
        .bind(&p.full_name)
        .bind(&p.first_name)
        .bind(&p.last_name)
        .bind(&p.position)
        .bind(&p.height)
        .bind(p.weight)
        .bind(p.from_year)
        .bind(p.to_year)
        .bind(p.is_active)
        .bind(&p.teams)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        if let Some(s) = &record.career_stats {
            sqlx::query(
                r#"
                INSERT INTO career_stats
                    (player_id, games_played, games_started, minutes_per_game,
                     points_per_game, rebounds_per_game, assists_per_game,
                     steals_per_game, blocks_per_game, turnovers_per_game,
                     field_goal_percentage, three_point_percentage,
                     free_throw_percentage, total_points, total_rebounds,
                     total_assists)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(s.games_played)
            .bind(s.games_started)
            .bind(s.minutes_per_game)
            .bind(s.points_per_game)
            .bind(s.rebounds_per_game)
            .bind(s.assists_per_game)
            .bind(s.steals_per_game)
            .bind(s.blocks_per_game)
            .bind(s.turnovers_per_game)
            .bind(s.field_goal_percentage)
            .bind(s.three_point_percentage)
            .bind(s.free_throw_percentage)
            .bind(s.total_points)
            .bind(s.total_rebounds)
            .bind(s.total_assists)
            .execute(&mut *tx)
            .await?;
        }

        if let Some(a) = &record.achievements {
            sqlx::query(
                r#"
                INSERT INTO achievements
                    (player_id, championships, finals_appearances, mvp_awards,
                     finals_mvp_awards, all_star_selections, all_nba_first_team,
                     all_defensive_first_team, hall_of_fame)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(a.championships)
            .bind(a.finals_appearances)
            .bind(a.mvp_awards)
            .bind(a.finals_mvp_awards)
            .bind(a.all_star_selections)
            .bind(a.all_nba_first_team)
            .bind(a.all_defensive_first_team)
            .bind(a.hall_of_fame)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        debug!(id, nba_id = p.nba_id, name = %p.full_name, "Inserted player");
        Ok(id)
    }

    /// Find a player by their NBA stats id.
    pub async fn find_by_nba_id(&self, nba_id: i64) -> Result<Option<Player>> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players p WHERE p.nba_id = ?");
        let player = sqlx::query_as::<_, Player>(&sql)
            .bind(nba_id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(player)
    }

    /// All players ordered by name.
    pub async fn list(&self) -> Result<Vec<Player>> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players p ORDER BY p.full_name, p.id");
        let players = sqlx::query_as::<_, Player>(&sql)
            .fetch_all(self.db.pool())
            .await?;
        Ok(players)
    }

    /// One player joined with career stats and achievements.
    pub async fn find_record(&self, id: i64) -> Result<Option<PlayerRecord>> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players p WHERE p.id = ?");
        let Some(player) = sqlx::query_as::<_, Player>(&sql)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?
        else {
            return Ok(None);
        };

        let career_stats = sqlx::query_as::<_, CareerStatsRow>("SELECT * FROM career_stats WHERE player_id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?
            .map(|row| row.stats);

        let achievements = sqlx::query_as::<_, AchievementsRow>("SELECT * FROM achievements WHERE player_id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?
            .map(|row| row.achievements);

        Ok(Some(PlayerRecord { player, career_stats, achievements }))
    }

    /// Players eligible for ranking: career stats present with at least
    /// `min_games` games played. Achievements are attached when present.
    pub async fn records_for_ranking(&self, min_games: i64) -> Result<Vec<PlayerRecord>> {
        let sql = format!(
            "SELECT {PLAYER_COLUMNS} FROM players p \
             JOIN career_stats c ON c.player_id = p.id \
             WHERE c.games_played >= ? ORDER BY p.id"
        );
        let players = sqlx::query_as::<_, Player>(&sql)
            .bind(min_games)
            .fetch_all(self.db.pool())
            .await?;

        let mut stats: HashMap<i64, CareerStats> =
            sqlx::query_as::<_, CareerStatsRow>("SELECT * FROM career_stats WHERE games_played >= ?")
                .bind(min_games)
                .fetch_all(self.db.pool())
                .await?
                .into_iter()
                .map(|row| (row.player_id, row.stats))
                .collect();

        let mut awards: HashMap<i64, Achievements> =
            sqlx::query_as::<_, AchievementsRow>("SELECT * FROM achievements")
                .fetch_all(self.db.pool())
                .await?
                .into_iter()
                .map(|row| (row.player_id, row.achievements))
                .collect();

        let records: Vec<PlayerRecord> = players
            .into_iter()
            .map(|player| PlayerRecord {
                career_stats: stats.remove(&player.id),
                achievements: awards.remove(&player.id),
                player,
            })
            .collect();

        debug!(min_games, eligible = records.len(), "Loaded ranking population");
        Ok(records)
    }

    pub async fn count(&self) -> Result<u64> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM players")
            .fetch_one(self.db.pool())
            .await?;
        Ok(n as u64)
    }

    /// Delete every player together with their stats and achievements.
    pub async fn clear(&self) -> Result<u64> {
        let mut tx = self.db.pool().begin().await?;
        sqlx::query("DELETE FROM achievements").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM career_stats").execute(&mut *tx).await?;
        let removed = sqlx::query("DELETE FROM players")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        info!(removed, "Cleared player tables");
        Ok(removed)
    }
}
