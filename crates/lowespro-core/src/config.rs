//! Server configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for the LowesPro backend.
///
/// All fields are optional in the TOML file; `effective_*` accessors apply
/// the defaults. Environment variables override file values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Bind address. Default: 127.0.0.1.
    pub host: Option<String>,
    /// Listen port. Default: 3001.
    pub port: Option<u16>,
    /// SQLite database file path. Default: "lowespro.db".
    pub database_path: Option<String>,
    /// Number of read-only connections in the pool. 0 = default (2).
    pub read_pool_size: Option<usize>,
}

/// Errors from loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("failed to parse config file {path}: {source}")]
    Parse { path: String, source: toml::de::Error },
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply `LOWESPRO_HOST`, `LOWESPRO_PORT`, and `LOWESPRO_DB` overrides.
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("LOWESPRO_HOST") {
            self.host = Some(host);
        }
        if let Ok(port) = std::env::var("LOWESPRO_PORT") {
            match port.parse() {
                Ok(p) => self.port = Some(p),
                Err(_) => tracing::warn!(value = %port, "ignoring invalid LOWESPRO_PORT"),
            }
        }
        if let Ok(db) = std::env::var("LOWESPRO_DB") {
            self.database_path = Some(db);
        }
    }

    pub fn effective_host(&self) -> &str {
        self.host.as_deref().unwrap_or("127.0.0.1")
    }

    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or(3001)
    }

    pub fn effective_database_path(&self) -> &str {
        self.database_path.as_deref().unwrap_or("lowespro.db")
    }

    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_host(), "127.0.0.1");
        assert_eq!(config.effective_port(), 3001);
        assert_eq!(config.effective_database_path(), "lowespro.db");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lowespro.toml");
        std::fs::write(&path, "port = 8088\ndatabase_path = \"/tmp/test.db\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.effective_port(), 8088);
        assert_eq!(config.effective_database_path(), "/tmp/test.db");
        assert_eq!(config.effective_host(), "127.0.0.1");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/lowespro.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "port = \"not a number").unwrap();
        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
