//! goatrank-common: Shared types and errors used across all goatrank crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{Achievements, CareerStats, EraPreference, Player, PlayerRecord, UserSession};
pub use error::{GoatrankError, Result};
