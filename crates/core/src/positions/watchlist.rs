//! Watchlist loading.
//!
//! The position list is static structured data owned by an external
//! collaborator (a JSON file); it is read and validated once at startup and
//! never mutated afterwards. A broken entry fails the whole load: better a
//! refused start than a silently shorter dashboard.

use std::path::Path;

use log::info;

use crate::errors::{Error, Result};
use crate::positions::Position;

/// Load and validate the watchlist from a JSON file.
pub fn load_watchlist(path: impl AsRef<Path>) -> Result<Vec<Position>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
    let positions: Vec<Position> = serde_json::from_str(&raw)?;

    if positions.is_empty() {
        return Err(Error::Validation(format!(
            "Watchlist {} contains no positions",
            path.display()
        )));
    }
    for position in &positions {
        position.validate()?;
    }

    info!(
        "Loaded {} positions from {}",
        positions.len(),
        path.display()
    );
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_watchlist() {
        let file = write_temp(
            r#"[
                {"id": "p1", "name": "TCS", "ticker": "TCS.NS", "sector": "Technology", "quantity": 10, "buyPrice": 3500},
                {"id": "p2", "name": "Reliance", "ticker": "RELIANCE.NS", "sector": "Energy", "quantity": 5, "buyPrice": 2400.25}
            ]"#,
        );
        let positions = load_watchlist(file.path()).unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].ticker, "TCS.NS");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_watchlist("/nonexistent/stocks.json").unwrap_err();
        assert!(matches!(err, Error::ConfigIO(_)));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let file = write_temp("not json");
        let err = load_watchlist(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_empty_watchlist_rejected() {
        let file = write_temp("[]");
        let err = load_watchlist(file.path()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_invalid_entry_rejected() {
        let file = write_temp(
            r#"[{"id": "p1", "name": "TCS", "ticker": "TCS.NS", "sector": "Technology", "quantity": 0, "buyPrice": 3500}]"#,
        );
        let err = load_watchlist(file.path()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
