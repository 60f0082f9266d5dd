//! Database connection and table management.
//!
//! Provides a single SQLite pool shared by the repositories.

use std::str::FromStr;

use goatrank_common::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::schema;

/// Main database handle.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    url: String,
}

impl Database {
    /// Open or create a database at the given `sqlite:` URL.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to `:memory:` opens its own empty database, so the
        // pool must hold exactly one connection and never recycle it.
        let pool = if is_memory_url(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections.max(1))
                .connect_with(options)
                .await?
        };

        info!(url = %url, "Connected to database");
        Ok(Self { pool, url: url.to_string() })
    }

    /// Fresh in-memory database with the schema applied.
    pub async fn in_memory() -> Result<Self> {
        let db = Self::connect("sqlite::memory:", 1).await?;
        db.initialize().await?;
        Ok(db)
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the connection URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Create all tables if they don't exist.
    pub async fn initialize(&self) -> Result<()> {
        for statement in schema::CREATE_STATEMENTS {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("Schema initialized");
        Ok(())
    }

    /// Check if a table exists.
    pub async fn table_exists(&self, name: &str) -> Result<bool> {
        let found: Option<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(found.is_some())
    }

    /// Row counts for the main tables.
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let (players,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM players")
            .fetch_one(&self.pool)
            .await?;
        let (with_career_stats,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM career_stats")
            .fetch_one(&self.pool)
            .await?;
        let (sessions,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_sessions")
            .fetch_one(&self.pool)
            .await?;

        Ok(DatabaseStats {
            players: players as u64,
            with_career_stats: with_career_stats as u64,
            sessions: sessions as u64,
        })
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Database statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct DatabaseStats {
    pub players: u64,
    pub with_career_stats: u64,
    pub sessions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        db.initialize().await.unwrap();
        for table in [
            schema::TABLE_PLAYERS,
            schema::TABLE_CAREER_STATS,
            schema::TABLE_ACHIEVEMENTS,
            schema::TABLE_USER_SESSIONS,
        ] {
            assert!(db.table_exists(table).await.unwrap(), "{table} missing");
        }
        assert!(!db.table_exists("teams").await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_stats() {
        let db = Database::in_memory().await.unwrap();
        assert_eq!(db.url(), "sqlite::memory:");
        assert_eq!(db.stats().await.unwrap(), DatabaseStats::default());
    }

    #[test]
    fn test_memory_url_detection() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://file?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite://goatrank.db"));
    }
}
