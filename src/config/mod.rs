//! Configuration management
//!
//! Layered as: built-in defaults, then an optional TOML file, then
//! `CALLGRID__SECTION__KEY` environment variables.

use crate::domain::call::{PresentationMode, StreamSelectionPolicy};
use crate::domain::grid::LayoutDirection;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const ENV_PREFIX: &str = "CALLGRID";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub grid: GridConfig,
    pub selection: SelectionConfig,
    pub logging: LoggingConfig,
    pub events: EventsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub max_items_per_page: usize,
    pub layout_direction: LayoutDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub policy: StreamSelectionPolicy,
    pub presentation_mode: PresentationMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Broadcast channel capacity for grid events
    pub capacity: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_items_per_page: 8,
            layout_direction: LayoutDirection::Vertical,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

impl Config {
    /// Load defaults, the optional file at `path`, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.max_items_per_page == 0 {
            return Err(ConfigError::Invalid(
                "grid.max_items_per_page must be at least 1".to_string(),
            ));
        }
        if self.events.capacity == 0 {
            return Err(ConfigError::Invalid(
                "events.capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
