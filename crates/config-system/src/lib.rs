//! Configuration system for the venue timeline
//! Grid geometry, default view, category palette and log level

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use timeline_renderer::{CategoryStyles, GridLayout};
use timeline_shared::{TimelineError, View, ViewportSize};

pub mod parser;
pub mod validation;

pub use parser::{ConfigFormat, ConfigParser, ConfigSerializer};
pub use validation::ConfigValidator;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<ConfigError> for TimelineError {
    fn from(err: ConfigError) -> Self {
        TimelineError::InvalidConfig {
            message: err.to_string(),
            field: None,
        }
    }
}

/// Top-level timeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub default_view: View,
    pub grid: GridSettings,
    pub styles: CategoryStyles,
    pub logging: LoggingConfig,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            default_view: View::Day,
            grid: GridSettings::default(),
            styles: CategoryStyles::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TimelineConfig {
    /// Parse a config file and reject anything the grid cannot lay out
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = ConfigParser::parse_file(path)?;
        ConfigValidator::validate(&config)?;
        log::info!("Loaded timeline configuration from {}", path.display());
        Ok(config)
    }
}

/// Cell geometry and virtualization margins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub column_width: f64,
    pub row_height: f64,
    /// Index column width at or above the breakpoint
    pub wide_index_width: f64,
    /// Index column width below the breakpoint
    pub narrow_index_width: f64,
    /// Viewport width in pixels at which the wide index column kicks in
    pub index_breakpoint: f64,
    pub overscan_column_count: u32,
    pub overscan_row_count: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            column_width: 120.0,
            row_height: 60.0,
            wide_index_width: 240.0,
            narrow_index_width: 120.0,
            index_breakpoint: 760.0,
            overscan_column_count: 1,
            overscan_row_count: 1,
        }
    }
}

impl GridSettings {
    pub fn index_width_for(&self, viewport_width: f64) -> f64 {
        if viewport_width >= self.index_breakpoint {
            self.wide_index_width
        } else {
            self.narrow_index_width
        }
    }

    pub fn layout_for(&self, viewport: ViewportSize) -> GridLayout {
        GridLayout::new(
            viewport,
            self.index_width_for(viewport.width),
            self.column_width,
            self.row_height,
        )
        .with_overscan(self.overscan_column_count, self.overscan_row_count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid log level: {:?}", self.level))
        })
    }
}
