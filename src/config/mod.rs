//! # Configuration Management Module
//!
//! Centralized TOML configuration with validation and sensible defaults.
//!
//! ## Configuration Structure
//!
//! - [`BotConfig`] - bot identity and command keyword
//! - [`DictionaryConfig`] - word corpus location
//! - [`StorageConfig`] - game store location
//! - [`GamesConfig`] - listing and creation limits
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [bot]
//! name = "Angrams"
//! command = "angrms"
//!
//! [dictionary]
//! path = "data/words.json"
//!
//! [storage]
//! data_dir = "./data/games"
//!
//! [games]
//! max_listed = 10
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Values are validated on load; a config that points at a missing
//! dictionary fails at startup rather than on the first create command.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Display name used in responses.
    pub name: String,
    /// Slash-command keyword the transport adapter routes to us.
    #[serde(default = "default_command")]
    pub command: String,
}

fn default_command() -> String {
    "angrms".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// JSON corpus mapping a letter to the words starting with it.
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesConfig {
    /// Cap on games shown by the `list` command.
    #[serde(default = "default_max_listed")]
    pub max_listed: usize,
}

fn default_max_listed() -> usize {
    10
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            max_listed: default_max_listed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of: error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; stdout is still used when attached to a TTY.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bot: BotConfig,
    pub dictionary: DictionaryConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub games: GamesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

const DEFAULT_CONFIG: &str = r#"# Angrams configuration

[bot]
name = "Angrams"
# Slash-command keyword, without the leading slash.
command = "angrms"

[dictionary]
# JSON object mapping a lowercase letter to the words starting with it.
path = "data/words.json"

[storage]
data_dir = "./data/games"

[games]
# Cap on games shown by the list command.
max_listed = 10

[logging]
# error | warn | info | debug | trace
level = "info"
# file = "angrams.log"
"#;

impl Config {
    /// Load and validate a configuration file.
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("cannot read config '{}': {}", path, e))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| anyhow!("invalid config '{}': {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a commented starter configuration. Refuses to overwrite.
    pub async fn create_default(path: &str) -> Result<()> {
        if fs::try_exists(path).await? {
            return Err(anyhow!("'{}' already exists, not overwriting", path));
        }
        fs::write(path, DEFAULT_CONFIG).await?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.bot.name.trim().is_empty() {
            return Err(anyhow!("bot.name must not be empty"));
        }
        if self.bot.command.trim().is_empty() || self.bot.command.starts_with('/') {
            return Err(anyhow!("bot.command must be a bare keyword without '/'"));
        }
        if self.dictionary.path.trim().is_empty() {
            return Err(anyhow!("dictionary.path must not be empty"));
        }
        if self.storage.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        if self.games.max_listed == 0 {
            return Err(anyhow!("games.max_listed must be at least 1"));
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(anyhow!("unknown logging.level '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses_and_validates() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("default config parses");
        config.validate().expect("default config validates");
        assert_eq!(config.bot.command, "angrms");
        assert_eq!(config.games.max_listed, 10);
    }

    #[test]
    fn rejects_bad_log_level() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.logging.level = "loud".into();
        assert!(config.validate().is_err());
    }
}
