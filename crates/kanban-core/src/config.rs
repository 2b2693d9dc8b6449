// Rust guideline compliant 2026-10-16

//! Configuration management for the kanban board.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Log levels accepted in configuration.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for board behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Title given to newly added cards.
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Minimum level of emitted log events.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Default title of a new card.
fn default_title() -> String {
    "Nowa karta".to_string()
}

/// Default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.kanban/config.toml`
    /// 3. Environment variables with `KANBAN_` prefix
    ///
    /// # Arguments
    ///
    /// * `kanban_dir` - Path to the `.kanban` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(kanban_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = kanban_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `KANBAN_DEFAULT_TITLE` - Title of new cards
    /// - `KANBAN_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `KANBAN_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("KANBAN_DEFAULT_TITLE") {
            self.default_title = val;
        }

        if let Ok(val) = std::env::var("KANBAN_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "KANBAN_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("KANBAN_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - default_title is blank
    /// - log_level is not a known level
    fn validate(&self) -> Result<()> {
        if self.default_title.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "default_title cannot be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `kanban_dir` - Path to the `.kanban` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, kanban_dir: &Path) -> Result<()> {
        let config_path = kanban_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
