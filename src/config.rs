//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::chart::ChartOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fixture: FixtureConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the Olympic fixture comes from
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureConfig {
    /// File path or `http(s)://` URL
    #[serde(default = "default_location")]
    pub location: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_location() -> String {
    "assets/mock/olympic.json".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            timeout_secs: default_timeout(),
        }
    }
}

impl FixtureConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Rendered chart size and drawing options
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(flatten)]
    pub options: ChartOptions,
}

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    500.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            options: ChartOptions::default(),
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
            dirs::config_dir().map(|p| p.join("olympics").join("config.toml")),
            Some(PathBuf::from("/etc/olympics/config.toml")),
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

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a key lookup (the process environment in practice)
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(location) = lookup("OLYMPICS_FIXTURE") {
            self.fixture.location = location;
        }
        if let Some(timeout) = lookup("OLYMPICS_FETCH_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.fixture.timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring invalid OLYMPICS_FETCH_TIMEOUT_SECS: {}", timeout),
            }
        }
        if let Some(level) = lookup("OLYMPICS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("OLYMPICS_LOG_FORMAT") {
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
    r##"# Olympics Dashboard Configuration
#
# Environment variables override these settings:
# - OLYMPICS_FIXTURE
# - OLYMPICS_FETCH_TIMEOUT_SECS
# - OLYMPICS_LOG_LEVEL
# - OLYMPICS_LOG_FORMAT

[fixture]
# File path or http(s) URL of the Olympic participation fixture
location = "assets/mock/olympic.json"

# HTTP request timeout in seconds
timeout_secs = 10

[chart]
# Rendered chart size in pixels
width = 800.0
height = 500.0

[chart.pie]
# Space kept around the pie for callout labels
label_room = 90.0

# Inner radius as a fraction of the outer radius (0 = full pie)
inner_ratio = 0.0

[chart.callouts]
gap = 0.0
offset = 40.0
horizontal_length = 30.0
margin = 12.0
text_padding = 5.0
line_width = 1.0
font_size = 12.0

# Below this viewport width, spacing and strokes are scaled down
small_viewport_width = 768.0
small_viewport_scale = 0.6

[chart.style]
border_color = "#ffffff"
border_width = 2.0
line_color = "#94a3b8"
text_color = "#1f2937"
font_family = "'Poppins', sans-serif"
font_weight = 500

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"##
    .to_string()
}
