//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset location
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("spacex-dash").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("SPACEX_DASH_DATA") {
            self.dataset.path = PathBuf::from(path);
        }

        if let Some(host) = var("SPACEX_DASH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("SPACEX_DASH_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid SPACEX_DASH_PORT: {}", port),
            }
        }

        if let Some(level) = var("SPACEX_DASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SPACEX_DASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SpaceX Dash Configuration
#
# Environment variables override these settings:
# - SPACEX_DASH_DATA
# - SPACEX_DASH_HOST
# - SPACEX_DASH_PORT
# - SPACEX_DASH_LOG_LEVEL
# - SPACEX_DASH_LOG_FORMAT

[dataset]
# CSV file with launch records
path = "spacex_launch_dash.csv"

[server]
# Address to bind the dashboard to
host = "127.0.0.1"
port = 8050

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dataset.path, PathBuf::from("spacex_launch_dash.csv"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dataset.path, PathBuf::from("spacex_launch_dash.csv"));
    }

    #[test]
    fn test_invalid_config() {
        let result = Config::parse("[server]\nport = \"not a port\"\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[dataset]\npath = \"/data/launches.csv\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("/data/launches.csv"));

        let missing = Config::load(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SPACEX_DASH_DATA", "other.csv"),
            ("SPACEX_DASH_PORT", "9100"),
            ("SPACEX_DASH_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.dataset.path, PathBuf::from("other.csv"));
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "SPACEX_DASH_PORT").then(|| "abc".to_string()));
        assert_eq!(config.server.port, 8050);
    }
}
