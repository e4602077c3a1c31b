//! Optional TOML configuration for the CLI
//!
//! Everything here can also be given on the command line; flags win
//! over the config file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Settings loadable from a TOML file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Backing-file path for the roster
    pub file: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

impl Config {
    /// Read and parse a config file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        fs::write(&path, "file = \"class_a.txt\"\nlog_level = \"debug\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.file.unwrap(), PathBuf::from("class_a.txt"));
        assert_eq!(config.log_level.unwrap(), "debug");
    }

    #[test]
    fn test_load_empty_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.file.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        fs::write(&path, "file = [not toml").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
