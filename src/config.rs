//! Configuration management and validation.
//!
//! Settings come from an optional TOML file with per-field defaults;
//! command-line arguments override whatever the file provides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StandingDataError};

/// Main server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Standing data location settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Root of the standing data directory tree. Datasets live beneath it at
    /// fixed relative paths (`airlines/schema-01/airlines.csv`, ...).
    #[serde(default = "default_data_root")]
    pub root: PathBuf,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            root: default_data_root(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    30000
}

fn default_workers() -> usize {
    num_cpus::get()
}

/// Platform data directory when one exists, the container-style `/data`
/// mount point otherwise.
fn default_data_root() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("standing-data"))
        .unwrap_or_else(|| PathBuf::from("/data"))
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|error| {
            StandingDataError::configuration(format!(
                "cannot read config file {}: {}",
                path.display(),
                error
            ))
        })?;

        let config: Self = toml::from_str(&contents).map_err(|error| {
            StandingDataError::configuration(format!(
                "invalid config file {}: {}",
                path.display(),
                error
            ))
        })?;

        debug!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Bind address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 30000);
        assert!(config.server.workers > 0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [data]
            root = "/srv/standing-data"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.data.root, PathBuf::from("/srv/standing-data"));
    }

    #[test]
    fn test_bind_address() {
        let mut config = ServerConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9000;
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_missing_file_is_a_configuration_error() {
        let result = ServerConfig::from_file(Path::new("/nonexistent/config.toml"));
        assert!(matches!(
            result,
            Err(StandingDataError::Configuration { .. })
        ));
    }
}
