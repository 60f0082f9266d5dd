//! JSON file import.

use std::path::Path;

use goatrank_common::{GoatrankError, Result};
use tracing::info;

use crate::models::PlayerImport;

/// Read a JSON array of player records from `path`.
pub fn load_file(path: &Path) -> Result<Vec<PlayerImport>> {
    let raw = std::fs::read_to_string(path)?;
    let players = parse(&raw)
        .map_err(|e| GoatrankError::InvalidData(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), count = players.len(), "Loaded import file");
    Ok(players)
}

/// Parse a JSON array of player records.
pub fn parse(raw: &str) -> serde_json::Result<Vec<PlayerImport>> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 977, "full_name": "Michael Jordan", "teams": ["CHI", "WAS"],
                 "career_stats": {{"games_played": 1072, "points_per_game": 30.1}}}}]"#
        )
        .unwrap();

        let players = load_file(file.path()).unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].teams, vec!["CHI", "WAS"]);
        assert_eq!(players[0].career_stats.as_ref().unwrap().games_played, Some(1072));
    }

    #[test]
    fn test_malformed_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"players": []}}"#).unwrap();
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, GoatrankError::InvalidData(_)));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_file(Path::new("/nonexistent/players.json")).unwrap_err();
        assert!(matches!(err, GoatrankError::Io(_)));
    }
}
