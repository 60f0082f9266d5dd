//! Session repository: one row per preference submission.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use goatrank_common::{EraPreference, GoatrankError, Result, UserSession};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

use crate::database::Database;

/// Repository for user sessions.
pub struct SessionRepository {
    db: Arc<Database>,
}

impl SessionRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Store a session. Session ids are stored as hyphenated text and the
    /// ranking as a JSON document.
    pub async fn insert(&self, session: &UserSession) -> Result<()> {
        let ranked = serde_json::to_string(&session.ranked_players)?;

        sqlx::query(
            r#"
            INSERT INTO user_sessions
                (session_id, offense_weight, defense_weight, team_success_weight,
                 longevity_weight, efficiency_weight, peak_performance_weight,
                 era_preference, ranked_players, ip_address, created_at,
                 completed_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(session.session_id.to_string())
        .bind(session.offense_weight)
        .bind(session.defense_weight)
        .bind(session.team_success_weight)
        .bind(session.longevity_weight)
        .bind(session.efficiency_weight)
        .bind(session.peak_performance_weight)
        .bind(session.era_preference.as_str())
        .bind(ranked)
        .bind(&session.ip_address)
        .bind(session.created_at)
        .bind(session.completed_at)
        .execute(self.db.pool())
        .await?;

        debug!(session_id = %session.session_id, "Stored session");
        Ok(())
    }

    pub async fn find(&self, session_id: Uuid) -> Result<Option<UserSession>> {
        let row = sqlx::query("SELECT * FROM user_sessions WHERE session_id = ?")
            .bind(session_id.to_string())
            .fetch_optional(self.db.pool())
            .await?;
        row.as_ref().map(session_from_row).transpose()
    }

    pub async fn count(&self) -> Result<u64> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_sessions")
            .fetch_one(self.db.pool())
            .await?;
        Ok(n as u64)
    }
}

fn session_from_row(row: &SqliteRow) -> Result<UserSession> {
    let raw_id: String = row.try_get("session_id")?;
    let session_id = Uuid::parse_str(&raw_id)
        .map_err(|e| GoatrankError::InvalidData(format!("session id {raw_id:?}: {e}")))?;

    let ranked_players = match row.try_get::<Option<String>, _>("ranked_players")? {
        Some(raw) => serde_json::from_str(&raw)?,
        None => serde_json::Value::Null,
    };
    let era: String = row.try_get("era_preference")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let completed_at: Option<DateTime<Utc>> = row.try_get("completed_at")?;

    Ok(UserSession {
        session_id,
        offense_weight: row.try_get("offense_weight")?,
        defense_weight: row.try_get("defense_weight")?,
        team_success_weight: row.try_get("team_success_weight")?,
        longevity_weight: row.try_get("longevity_weight")?,
        efficiency_weight: row.try_get("efficiency_weight")?,
        peak_performance_weight: row.try_get("peak_performance_weight")?,
        era_preference: EraPreference::from_label(&era),
        ranked_players,
        ip_address: row.try_get("ip_address")?,
        created_at,
        completed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn session() -> UserSession {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        UserSession {
            session_id: Uuid::new_v4(),
            offense_weight: 0.3,
            defense_weight: 0.2,
            team_success_weight: 0.2,
            longevity_weight: 0.1,
            efficiency_weight: 0.1,
            peak_performance_weight: 0.1,
            era_preference: EraPreference::Classic,
            ranked_players: json!([{ "rank": 1, "name": "Michael Jordan", "composite_score": 0.91 }]),
            ip_address: Some("127.0.0.1".to_string()),
            created_at: created,
            completed_at: Some(created),
        }
    }

    async fn repo() -> SessionRepository {
        SessionRepository::new(Arc::new(Database::in_memory().await.unwrap()))
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let repo = repo().await;
        let expected = session();
        repo.insert(&expected).await.unwrap();
        let found = repo.find(expected.session_id).await.unwrap().unwrap();
        assert_eq!(found, expected);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unknown_session_is_none() {
        let repo = repo().await;
        assert!(repo.find(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_each_submission_is_a_new_row() {
        let repo = repo().await;
        repo.insert(&session()).await.unwrap();
        repo.insert(&session()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_null_ranking_round_trips() {
        let repo = repo().await;
        let mut s = session();
        s.ranked_players = serde_json::Value::Null;
        s.ip_address = None;
        s.completed_at = None;
        repo.insert(&s).await.unwrap();
        assert_eq!(repo.find(s.session_id).await.unwrap().unwrap(), s);
    }
}
