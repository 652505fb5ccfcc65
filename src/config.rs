//! Client configuration - base URL and history limit
//!
//! Values come from three places, later ones winning:
//! defaults, `~/.tally/config.yaml`, then the `TALLY_API_URL` env var.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::constants::{DEFAULT_API_URL, DEFAULT_HISTORY_LIMIT};

/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "TALLY_API_URL";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(DEFAULT_API_URL),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults on any problem
    pub fn load() -> Config {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => match Self::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Unreadable config, using defaults");
                    Config::default()
                }
            },
            _ => Config::default(),
        };

        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }

        config.base_url = normalize_base_url(&config.base_url);
        config
    }

    /// Parse a YAML config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".tally").join("config.yaml"))
    }
}

/// Strip trailing slashes so endpoint paths can be appended directly
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://counter.example.com:8080").unwrap();
        writeln!(file, "history_limit: 25").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://counter.example.com:8080");
        assert_eq!(config.history_limit, 25);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "history_limit: 5").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.history_limit, 5);
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://localhost:3001/"), "http://localhost:3001");
        assert_eq!(normalize_base_url("http://localhost:3001"), "http://localhost:3001");
    }
}
