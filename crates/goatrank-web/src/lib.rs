//! goatrank-web: HTTP front end.
//! Provides:
//!   - Landing page and preference questionnaire
//!   - Ranking submission and stored results pages
//!   - JSON API for players, rankings and sessions

pub mod error;
pub mod handlers;
pub mod html;
pub mod router;
pub mod service;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, RankingSettings, SharedState};
