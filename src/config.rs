//! Configuration management for InvoiceChain

use crate::crypto::HASH_HEX_LEN;
use crate::error::LedgerError;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Default file looked up when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "invoicechain.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Hash characters shown in table view; 0 shows the full digest.
    #[serde(default = "default_hash_width")]
    pub hash_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            hash_width: default_hash_width(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(LedgerError::ConfigError(format!(
                "unknown output format '{}', expected 'table' or 'json'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_hash_width() -> usize {
    16
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Loads `path`, falling back to defaults when the file is absent or empty.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, LedgerError> {
    let config_str = match fs::read_to_string(path.as_ref()) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(LedgerError::ConfigError(format!(
                "failed to read {}: {}",
                path.as_ref().display(),
                e
            )))
        }
    };

    let config: Config = if config_str.trim().is_empty() {
        Config::default()
    } else {
        toml::from_str(&config_str)?
    };

    config.validate()?;
    Ok(config)
}

/// Installs the global `tracing` subscriber on stderr with `filter`.
pub fn init_logging(filter: &str) -> Result<(), LedgerError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| {
        LedgerError::ConfigError(format!("invalid log filter '{}': {}", filter, e))
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| LedgerError::ConfigError(format!("failed to install logger: {}", e)))
}

impl Config {
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.display.hash_width > HASH_HEX_LEN {
            return Err(LedgerError::ConfigError(format!(
                "display.hash_width must be at most {}, got {}",
                HASH_HEX_LEN, self.display.hash_width
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(LedgerError::ConfigError(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
