//! Engine configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts::{Player, StrategyKind};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which strategy the engine uses and which side it plays.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct EngineConfig {
    /// Move-selection strategy.
    #[serde(default)]
    strategy: StrategyKind,

    /// Side the engine plays in `play` mode.
    #[serde(default = "default_engine_plays")]
    engine_plays: Player,
}

fn default_engine_plays() -> Player {
    Player::O
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            engine_plays: default_engine_plays(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            strategy = %config.strategy,
            engine_plays = %config.engine_plays,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        strategy: Option<StrategyKind>,
        engine_plays: Option<Player>,
    ) -> Self {
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if let Some(engine_plays) = engine_plays {
            self.engine_plays = engine_plays;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
