//! JSON API: players, rankings and stored sessions.

use std::num::NonZeroUsize;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use goatrank_common::{Achievements, CareerStats, Player, UserSession};
use goatrank_ranker::{PreferenceVector, RankingResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::service::rank_players;
use crate::state::SharedState;

// === API Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: i64,
    pub nba_id: i64,
    pub full_name: String,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<i64>,
    pub from_year: Option<i64>,
    pub to_year: Option<i64>,
    pub is_active: bool,
    pub teams: Vec<String>,
}

impl From<Player> for PlayerSummary {
    fn from(p: Player) -> Self {
        let teams = p.teams();
        Self {
            id: p.id,
            nba_id: p.nba_id,
            full_name: p.full_name,
            position: p.position,
            height: p.height,
            weight: p.weight,
            from_year: p.from_year,
            to_year: p.to_year,
            is_active: p.is_active,
            teams,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerDetail {
    #[serde(flatten)]
    pub player: PlayerSummary,
    pub seasons_played: Option<i64>,
    pub career_stats: Option<CareerStats>,
    pub achievements: Option<Achievements>,
}

/// Body of `POST /api/rankings`. Weights are fractions summing to 1.
#[derive(Debug, Deserialize)]
pub struct RankingRequest {
    pub weights: PreferenceVector,
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(default)]
    pub renormalise: Option<bool>,
}

// === API Endpoints ===

/// GET /api/players
pub async fn api_players(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let players: Vec<PlayerSummary> = state
        .players()
        .list()
        .await?
        .into_iter()
        .map(PlayerSummary::from)
        .collect();
    Ok(Json(players))
}

/// GET /api/player/{id}
pub async fn api_player(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .players()
        .find_record(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Player {id} not found")))?;

    let seasons_played = record.player.seasons_played();
    Ok(Json(PlayerDetail {
        player: PlayerSummary::from(record.player),
        seasons_played,
        career_stats: record.career_stats,
        achievements: record.achievements,
    }))
}

/// POST /api/rankings
pub async fn api_rankings(
    State(state): State<SharedState>,
    req: Result<Json<RankingRequest>, JsonRejection>,
) -> Result<Json<RankingResult>, ApiError> {
    let Json(req) = req?;
    let top_n = match req.top_n {
        None => None,
        Some(n) => Some(
            NonZeroUsize::new(n).ok_or_else(|| ApiError::BadRequest("top_n must be positive".to_string()))?,
        ),
    };
    let result = rank_players(&state, &req.weights, top_n, req.renormalise).await?;
    Ok(Json(result))
}

/// GET /api/sessions/{session_id}
pub async fn api_session(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<UserSession>, ApiError> {
    let id = Uuid::parse_str(&session_id)
        .map_err(|_| ApiError::BadRequest(format!("Invalid session id {session_id:?}")))?;
    let session = state
        .sessions()
        .find(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(session))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
