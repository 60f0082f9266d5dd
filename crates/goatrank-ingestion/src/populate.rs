//! Store population.

use goatrank_common::Result;
use goatrank_db::PlayerRepository;
use serde::Serialize;
use tracing::{info, warn};

use crate::models::PlayerImport;

/// Outcome of one population run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PopulateReport {
    /// Players removed by `reset`.
    pub cleared: u64,
    pub inserted: usize,
    /// Already present by NBA id.
    pub skipped: usize,
    /// Failed validation.
    pub rejected: usize,
}

/// Insert `players`, optionally clearing the player tables first.
///
/// Players already stored under the same NBA id are skipped. Invalid
/// records are logged and skipped; storage errors abort the run.
pub async fn populate(
    repo: &PlayerRepository,
    players: Vec<PlayerImport>,
    reset: bool,
) -> Result<PopulateReport> {
    let mut report = PopulateReport::default();

    if reset {
        report.cleared = repo.clear().await?;
    }

    for player in players {
        if let Err(e) = player.validate() {
            warn!(nba_id = player.id, error = %e, "Rejected player");
            report.rejected += 1;
            continue;
        }

        if repo.find_by_nba_id(player.id).await?.is_some() {
            info!(nba_id = player.id, name = %player.full_name, "Player already exists, skipping");
            report.skipped += 1;
            continue;
        }

        let name = player.full_name.clone();
        repo.insert(&player.into_record()?).await?;
        info!(name = %name, "Added player");
        report.inserted += 1;
    }

    info!(
        cleared = report.cleared,
        inserted = report.inserted,
        skipped = report.skipped,
        rejected = report.rejected,
        "Population complete"
    );
    Ok(report)
}
