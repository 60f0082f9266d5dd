//! goatrank Database Layer
//!
//! SQLite storage for players, their career statistics and achievements,
//! and the preference sessions that produced rankings.
//!
//! # Example
//!
//! ```rust,no_run
//! use goatrank_db::{Database, PlayerRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite://goatrank.db", 5).await?;
//!     db.initialize().await?;
//!
//!     let players = PlayerRepository::new(std::sync::Arc::new(db));
//!     println!("{} players", players.count().await?);
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod schema;
pub mod players;
pub mod sessions;

pub use database::{Database, DatabaseStats};
pub use goatrank_common::{GoatrankError, Result};
pub use players::PlayerRepository;
pub use sessions::SessionRepository;
pub use schema::{TABLE_ACHIEVEMENTS, TABLE_CAREER_STATS, TABLE_PLAYERS, TABLE_USER_SESSIONS};
