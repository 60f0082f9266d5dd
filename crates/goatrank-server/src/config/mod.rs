//! Configuration loading for goatrank.
//! Reads goatrank.toml from the current directory or the path in the
//! GOATRANK_CONFIG env var. A missing file means built-in defaults.

use anyhow::{bail, Context};
use goatrank_web::RankingSettings;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub ranking: RankingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_bind()       -> String { "127.0.0.1:5001".to_string() }
fn default_static_dir() -> String { "static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind(), static_dir: default_static_dir() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url()    -> String { "sqlite://goatrank.db".to_string() }
fn default_max_connections() -> u32    { 5 }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: default_database_url(), max_connections: default_max_connections() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_min_games")]
    pub min_games: i64,
    #[serde(default)]
    pub renormalise_weights: bool,
    #[serde(default)]
    pub strict_metrics: bool,
}

fn default_top_n()     -> usize { 100 }
fn default_min_games() -> i64   { 20 }

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            min_games: default_min_games(),
            renormalise_weights: false,
            strict_metrics: false,
        }
    }
}

impl RankingConfig {
    pub fn settings(&self) -> anyhow::Result<RankingSettings> {
        let Some(top_n) = NonZeroUsize::new(self.top_n) else {
            bail!("ranking.top_n must be at least 1");
        };
        if self.min_games < 0 {
            bail!("ranking.min_games must not be negative");
        }
        Ok(RankingSettings {
            top_n,
            min_games: self.min_games,
            renormalise_weights: self.renormalise_weights,
            strict_metrics: self.strict_metrics,
        })
    }
}

mod tests;

impl Config {
    /// Load configuration from goatrank.toml.
    /// Checks GOATRANK_CONFIG env var first, then current directory.
    /// DATABASE_URL and GOATRANK_BIND override the file.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("GOATRANK_CONFIG")
            .unwrap_or_else(|_| "goatrank.toml".to_string());

        let mut config = Self::load_from(Path::new(&path))?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            self.database.url = url;
        }
        if let Some(bind) = lookup("GOATRANK_BIND").filter(|v| !v.is_empty()) {
            self.server.bind = bind;
        }
    }
}
