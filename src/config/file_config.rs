//! Configuration file support for kali-arsenal-mcp.
//!
//! This module provides TOML configuration file parsing used by the
//! `config init` and `config show` subcommands.
//!
//! # Configuration File Format
//!
//! ```toml
//! platform = "Unified Web UI + MCP Server"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 7860
//! health_port = 7861
//!
//! [bleeding_edge]
//! enabled = true
//! priority = "high"
//! repositories = ["kali-bleeding-edge", "kali-experimental", "kali-dev"]
//! additional_tools_count = 150
//! update_frequency_hours = 4
//! auto_sync = true
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{BleedingEdgeConfig, Config, ServerConfig};

/// Configuration file structure
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Platform label
    #[serde(default)]
    pub platform: Option<String>,

    /// Server section
    #[serde(default)]
    pub server: ServerConfig,

    /// Bleeding edge section
    #[serde(default)]
    pub bleeding_edge: BleedingEdgeConfig,

    /// Logging section
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn load(path: &PathBuf) -> Result<Self, ConfigFileError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigFileError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigFileError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigFileError::Serialize(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigFileError::Io(e.to_string()))
    }

}

impl From<&Config> for ConfigFile {
    fn from(config: &Config) -> Self {
        Self {
            platform: Some(config.platform.clone()),
            server: config.server.clone(),
            bleeding_edge: config.bleeding_edge.clone(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_file_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let toml_content = r#"
platform = "Test Rig"

[server]
host = "0.0.0.0"
port = 8080
health_port = 8081

[bleeding_edge]
enabled = false
priority = "low"
additional_tools_count = 10

[logging]
level = "debug"
"#;

        std::fs::write(&path, toml_content).unwrap();

        let config = ConfigFile::load(&path).unwrap();

        assert_eq!(config.platform, Some("Test Rig".to_string()));
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(!config.bleeding_edge.enabled);
        assert_eq!(config.bleeding_edge.additional_tools_count, 10);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_file_save_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = ConfigFile::default();
        config.server.port = 9999;
        config.bleeding_edge.priority = "normal".to_string();

        config.save(&path).unwrap();

        let loaded = ConfigFile::load(&path).unwrap();
        assert_eq!(loaded.server.port, 9999);
        assert_eq!(loaded.bleeding_edge.priority, "normal");
    }

    #[test]
    fn test_config_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/config.toml");
        assert!(ConfigFile::load(&path).is_err());
    }

    #[test]
    fn test_config_file_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.toml");

        std::fs::write(&path, "invalid = toml = content").unwrap();

        assert!(ConfigFile::load(&path).is_err());
    }
}
