//! # populate-db
//!
//! Loads the sample dataset or a JSON import file into the player store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use goatrank_db::{Database, PlayerRepository};
use goatrank_ingestion::{import, populate, sample};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Built-in five-player dataset
    Sample,
    /// JSON array of player records
    File,
}

/// Populate the goatrank player database
#[derive(Parser)]
#[command(name = "populate-db")]
#[command(about = "Populate the goatrank player database")]
struct Cli {
    /// Data source
    #[arg(long, value_enum, default_value = "sample")]
    mode: Mode,

    /// Import file, required with --mode file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Delete all players before loading
    #[arg(long)]
    reset: bool,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://goatrank.db")]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("goatrank=debug,info")),
        )
        .init();

    let cli = Cli::parse();

    let players = match (cli.mode, &cli.file) {
        (Mode::Sample, _) => sample::sample_players(),
        (Mode::File, Some(path)) => import::load_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        (Mode::File, None) => bail!("--mode file requires --file <path>"),
    };

    let db = Database::connect(&cli.database_url, 1)
        .await
        .context("Failed to open database")?;
    db.initialize().await.context("Failed to initialize schema")?;

    let repo = PlayerRepository::new(Arc::new(db));
    let report = populate(&repo, players, cli.reset)
        .await
        .context("Population failed")?;

    info!(total = repo.count().await?, "Players in database");
    println!(
        "inserted {}, skipped {}, rejected {}, cleared {}",
        report.inserted, report.skipped, report.rejected, report.cleared
    );
    Ok(())
}
