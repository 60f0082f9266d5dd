#[cfg(test)]
mod tests {
    use super::super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind, "127.0.0.1:5001");
        assert_eq!(config.database.url, "sqlite://goatrank.db");
        assert_eq!(config.ranking.top_n, 100);
        assert_eq!(config.ranking.min_games, 20);
        assert!(!config.ranking.renormalise_weights);
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/goatrank.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ranking]\ntop_n = 10\nstrict_metrics = true\n\n[server]\nbind = \"0.0.0.0:8080\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.ranking.top_n, 10);
        assert!(config.ranking.strict_metrics);
        assert_eq!(config.ranking.min_games, 20);
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.server.static_dir, "static");
        assert_eq!(config.database, DatabaseConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ranking\ntop_n = ten").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            "GOATRANK_BIND" => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.server.bind, "127.0.0.1:5001");
    }

    #[test]
    fn test_ranking_settings_validation() {
        let settings = RankingConfig::default().settings().unwrap();
        assert_eq!(settings.top_n.get(), 100);

        let zero = RankingConfig { top_n: 0, ..Default::default() };
        assert!(zero.settings().is_err());
        let negative = RankingConfig { min_games: -1, ..Default::default() };
        assert!(negative.settings().is_err());
    }
}
