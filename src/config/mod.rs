//! Configuration management.

mod file_config;

pub use file_config::{ConfigFile, ConfigFileError};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Bleeding edge repository settings
    #[serde(default)]
    pub bleeding_edge: BleedingEdgeConfig,

    /// Platform label shown in rendered documents
    #[serde(default = "default_platform")]
    pub platform: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            bleeding_edge: BleedingEdgeConfig::default(),
            platform: default_platform(),
        }
    }
}

/// Server bind configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind the MCP HTTP/SSE transport to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for the MCP HTTP/SSE transport
    #[serde(default = "default_port")]
    pub port: u16,

    /// Port for the standalone /health listener
    #[serde(default = "default_health_port")]
    pub health_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            health_port: default_health_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7860
}

fn default_health_port() -> u16 {
    7861
}

fn default_platform() -> String {
    "Unified Web UI + MCP Server".to_string()
}

/// Bleeding edge repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BleedingEdgeConfig {
    /// Whether bleeding edge enhancement is active
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Priority label ("high", "normal", ...)
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Names of the tracked experimental repositories
    #[serde(default = "default_repositories")]
    pub repositories: Vec<String>,

    /// Number of experimental tools on top of the standard catalog
    #[serde(default = "default_additional_tools")]
    pub additional_tools_count: u32,

    /// Repository sync interval in hours
    #[serde(default = "default_update_frequency")]
    pub update_frequency_hours: u64,

    /// Whether repositories are synced automatically
    #[serde(default = "default_true")]
    pub auto_sync: bool,
}

impl Default for BleedingEdgeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: default_priority(),
            repositories: default_repositories(),
            additional_tools_count: default_additional_tools(),
            update_frequency_hours: default_update_frequency(),
            auto_sync: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_priority() -> String {
    "high".to_string()
}

fn default_repositories() -> Vec<String> {
    vec![
        "kali-bleeding-edge".to_string(),
        "kali-experimental".to_string(),
        "kali-dev".to_string(),
    ]
}

fn default_additional_tools() -> u32 {
    150
}

fn default_update_frequency() -> u64 {
    4
}

/// Load configuration from a file, with `KALI_ARSENAL_*` env overrides
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("KALI_ARSENAL").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Get the default configuration
pub fn get_config() -> Config {
    Config::default()
}

/// Locate a config file in the default search locations
///
/// Checks `./kali-arsenal.toml` first, then the platform config directory
/// (`~/.config/kali-arsenal/config.toml` on Linux).
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("kali-arsenal.toml");
    if local.is_file() {
        return Some(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join("kali-arsenal").join("config.toml");
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 7860);
        assert_eq!(config.server.health_port, 7861);
        assert!(config.bleeding_edge.enabled);
        assert_eq!(config.bleeding_edge.additional_tools_count, 150);
        assert_eq!(config.bleeding_edge.repositories.len(), 3);
        assert_eq!(config.bleeding_edge.update_frequency_hours, 4);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(
            &path,
            r#"
platform = "Test Platform"

[server]
host = "0.0.0.0"
port = 9000

[bleeding_edge]
priority = "normal"
additional_tools_count = 42
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.platform, "Test Platform");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        // Unset fields keep their defaults
        assert_eq!(config.server.health_port, 7861);
        assert_eq!(config.bleeding_edge.priority, "normal");
        assert_eq!(config.bleeding_edge.additional_tools_count, 42);
        assert!(config.bleeding_edge.enabled);
    }
}
