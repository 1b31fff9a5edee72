//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `AIRFIELD_*` environment overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
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
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dataset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the JSON dataset file
    #[serde(default = "default_data_path")]
    pub path: String,

    /// Field names eligible for indexing and By-field lookup routes
    #[serde(default = "default_allowed_fields")]
    pub allowed_fields: Vec<String>,
}

fn default_data_path() -> String {
    "data/airports.json".to_string()
}

fn default_allowed_fields() -> Vec<String> {
    vec![
        "State".to_string(),
        "City".to_string(),
        "Country".to_string(),
    ]
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            allowed_fields: default_allowed_fields(),
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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
            dirs::config_dir().map(|p| p.join("airfield").join("config.toml")),
            Some(PathBuf::from("/etc/airfield/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Reject configurations the services cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid(
                "server.port must be greater than 0".to_string(),
            ));
        }

        if self.dataset.path.is_empty() {
            return Err(ConfigError::Invalid(
                "dataset.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("AIRFIELD_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("AIRFIELD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(path) = std::env::var("AIRFIELD_DATA_PATH") {
            self.dataset.path = path;
        }
        if let Ok(fields) = std::env::var("AIRFIELD_ALLOWED_FIELDS") {
            self.dataset.allowed_fields = fields
                .split(',')
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect();
        }

        if let Ok(level) = std::env::var("AIRFIELD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("AIRFIELD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dataset: DatasetConfig::default(),
            logging: LoggingConfig::default(),
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

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.dataset.path, "data/airports.json");
        assert_eq!(
            config.dataset.allowed_fields,
            vec!["State", "City", "Country"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[server]
port = 9090

[dataset]
path = "fixtures/airports.json"
allowed_fields = ["City"]

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.dataset.path, "fixtures/airports.json");
        assert_eq!(config.dataset.allowed_fields, vec!["City"]);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not [valid toml").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    // The only test that touches process env; the other tests in this crate
    // build configs without reading it, so there is no cross-test race.
    #[test]
    fn test_env_overrides() {
        std::env::set_var("AIRFIELD_HOST", "127.0.0.1");
        std::env::set_var("AIRFIELD_PORT", "9191");
        std::env::set_var("AIRFIELD_DATA_PATH", "fixtures/airports.json");
        std::env::set_var("AIRFIELD_ALLOWED_FIELDS", " City , Icao ,, ");
        std::env::set_var("AIRFIELD_LOG_LEVEL", "trace");

        let config = Config::from_env();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9191);
        assert_eq!(config.dataset.path, "fixtures/airports.json");
        // entries are trimmed, empty entries dropped
        assert_eq!(config.dataset.allowed_fields, vec!["City", "Icao"]);
        assert_eq!(config.logging.level, "trace");

        // An unparseable port is ignored and the default kept
        std::env::set_var("AIRFIELD_PORT", "not-a-number");
        let config = Config::from_env();
        assert_eq!(config.server.port, 8080);

        for var in [
            "AIRFIELD_HOST",
            "AIRFIELD_PORT",
            "AIRFIELD_DATA_PATH",
            "AIRFIELD_ALLOWED_FIELDS",
            "AIRFIELD_LOG_LEVEL",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_port_zero_rejected() {
        let mut config = Config::default();
        config.server.port = 0;

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
