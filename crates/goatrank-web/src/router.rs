//! Axum router: maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    api::{api_player, api_players, api_rankings, api_session, health},
    pages::{home, questions},
    results::{results, submit_preferences},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.static_dir);
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",                       get(home))
        .route("/questions",              get(questions))
        .route("/submit_preferences",     post(submit_preferences))
        .route("/results/{session_id}",   get(results))

        // API endpoints
        .route("/api/players",            get(api_players))
        .route("/api/player/{id}",        get(api_player))
        .route("/api/rankings",           post(api_rankings))
        .route("/api/sessions/{session_id}", get(api_session))
        .route("/health",                 get(health))

        // Static files
        .nest_service("/static", static_dir)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
