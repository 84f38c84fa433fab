//! Configuration module
//!
//! `AppConfig` is read from `~/.config/texnouz-tariff/config.toml`. Every
//! section is optional and falls back to its defaults.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "json"
//!
//! [request]
//! originator_id = "90-b3-d5-1f-30-01-00-00"
//! target_id = "00-db-12-34-56-78-90-a0"
//! counter = 1006
//!
//! [output]
//! pretty = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::duis::validate_eui64;
use crate::support::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub logging: LoggingConfig,
    #[validate(nested)]
    pub request: RequestConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Reads, parses and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// `<config_dir>/texnouz-tariff/config.toml`, or a relative `config.toml`
/// when the platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("texnouz-tariff"))
        .unwrap_or_default()
        .join("config.toml")
}

// ── Sections ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[validate(custom(function = "validate_log_level"))]
    pub level: String,
    /// `text` or `json`
    #[validate(custom(function = "validate_log_format"))]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Defaults for the request id stamped on compiled messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RequestConfig {
    #[validate(custom(function = "validate_eui64"))]
    pub originator_id: String,
    #[validate(custom(function = "validate_eui64"))]
    pub target_id: String,
    #[validate(range(min = 1, message = "counter must be positive"))]
    pub counter: u64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            originator_id: "90-b3-d5-1f-30-01-00-00".to_string(),
            target_id: "00-db-12-34-56-78-90-a0".to_string(),
            counter: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print compiled JSON.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    // Filter directives such as `texnouz_tariff=debug` are left to EnvFilter.
    if level.contains('=') || LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("log_level"))
    }
}

fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    if LOG_FORMATS.contains(&format.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("log_format"))
    }
}
