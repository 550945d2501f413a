//! Configuration management for Jewel Hunt.
//!
//! Configuration is a small TOML file with two sections: `[game]` for the
//! player and world knobs and `[logging]` for log level and an optional log
//! file. Every field has a sensible default so a missing file still yields
//! a playable session; `jewelhunt init` writes the defaults out for
//! editing.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Player and session knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name for the player.
    #[serde(default = "default_player_name")]
    pub player_name: String,
    /// Maximum total weight the player can carry.
    #[serde(default = "default_max_carry_weight")]
    pub max_carry_weight: u32,
    /// Fix the Stranger's wander pattern. Useful for scripted demos and
    /// tests; leave unset for a fresh pattern each session.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            max_carry_weight: default_max_carry_weight(),
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, or trace.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_player_name() -> String {
    "Player".to_string()
}

fn default_max_carry_weight() -> u32 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a file.
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;
        config.validate()?;

        Ok(config)
    }

    /// Create a default configuration file.
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Reject configurations that could not produce a playable session.
    pub fn validate(&self) -> Result<()> {
        if self.game.max_carry_weight == 0 {
            return Err(anyhow!("game.max_carry_weight must be greater than zero"));
        }
        if self.game.player_name.trim().is_empty() {
            return Err(anyhow!("game.player_name must not be empty"));
        }
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(anyhow!("logging.level '{}' is not a valid level", self.logging.level));
        }
        Ok(())
    }
}
