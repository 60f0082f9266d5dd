//! goatrank: preference-driven GOAT ranking server.
//! Entry point for the web server binary.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use goatrank_db::Database;
use goatrank_web::{build_router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("goatrank=debug,info")),
        )
        .init();

    info!("Starting goatrank...");

    let config = config::Config::load().context("Failed to load configuration")?;
    let ranking = config.ranking.settings()?;

    let db = Database::connect(&config.database.url, config.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;
    db.initialize().await.context("Failed to initialize schema")?;

    let stats = db.stats().await?;
    info!("Database {} ready: {} players, {} sessions", db.url(), stats.players, stats.sessions);
    if stats.players == 0 {
        tracing::warn!("No players loaded. Run `populate-db --mode sample` to seed the database.");
    }

    // Build app state and router
    let state = AppState::new(Arc::new(db))
        .with_ranking(ranking)
        .with_static_dir(&config.server.static_dir);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    info!("Web UI listening on http://{}", config.server.bind);

    axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
