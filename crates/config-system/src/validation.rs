//! Configuration validation utilities

use crate::{ConfigError, GridSettings, Result, TimelineConfig};
use timeline_renderer::{BarStyle, CategoryStyles};

/// Largest overscan margin, in cells, the grid accepts
pub const MAX_OVERSCAN: u32 = 64;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &TimelineConfig) -> Result<()> {
        Self::validate_grid(&config.grid)?;
        Self::validate_styles(&config.styles)?;
        config.logging.level_filter()?;
        Ok(())
    }

    fn validate_grid(grid: &GridSettings) -> Result<()> {
        let dimensions = [
            ("column_width", grid.column_width),
            ("row_height", grid.row_height),
            ("wide_index_width", grid.wide_index_width),
            ("narrow_index_width", grid.narrow_index_width),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "Invalid {}: {}. Must be a positive number of pixels",
                    name, value
                )));
            }
        }

        if !grid.index_breakpoint.is_finite() || grid.index_breakpoint <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "Invalid index_breakpoint: {}. Must be a positive viewport width",
                grid.index_breakpoint
            )));
        }

        if grid.narrow_index_width > grid.wide_index_width {
            return Err(ConfigError::Validation(format!(
                "narrow_index_width ({}) cannot exceed wide_index_width ({})",
                grid.narrow_index_width, grid.wide_index_width
            )));
        }

        for (name, value) in [
            ("overscan_column_count", grid.overscan_column_count),
            ("overscan_row_count", grid.overscan_row_count),
        ] {
            if value > MAX_OVERSCAN {
                return Err(ConfigError::Validation(format!(
                    "Invalid {}: {}. Must be between 0 and {}",
                    name, value, MAX_OVERSCAN
                )));
            }
        }

        Ok(())
    }

    fn validate_styles(styles: &CategoryStyles) -> Result<()> {
        styles.iter().try_for_each(Self::validate_style)
    }

    fn validate_style(style: &BarStyle) -> Result<()> {
        if style.colour.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Style colour cannot be empty".to_string(),
            ));
        }

        for opacity in [style.background_opacity, style.hover_opacity] {
            if opacity > 100 {
                return Err(ConfigError::Validation(format!(
                    "Invalid opacity for {}: {}. Must be a percentage",
                    style.colour, opacity
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejects(config: &TimelineConfig, needle: &str) {
        match ConfigValidator::validate(config) {
            Err(ConfigError::Validation(message)) => {
                assert!(message.contains(needle), "{message}")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&TimelineConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let mut config = TimelineConfig::default();
        config.grid.column_width = 0.0;
        rejects(&config, "column_width");

        let mut config = TimelineConfig::default();
        config.grid.row_height = f64::NAN;
        rejects(&config, "row_height");

        let mut config = TimelineConfig::default();
        config.grid.index_breakpoint = 0.0;
        rejects(&config, "index_breakpoint");
    }

    #[test]
    fn test_rejects_inverted_index_widths() {
        let mut config = TimelineConfig::default();
        config.grid.narrow_index_width = 300.0;
        rejects(&config, "narrow_index_width");
    }

    #[test]
    fn test_rejects_excessive_overscan() {
        let mut config = TimelineConfig::default();
        config.grid.overscan_row_count = 65;
        rejects(&config, "overscan_row_count");

        config.grid.overscan_row_count = 64;
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_bad_styles() {
        let mut config = TimelineConfig::default();
        config.styles.neutral.colour = " ".to_string();
        rejects(&config, "colour");

        let mut config = TimelineConfig::default();
        config.styles.art.hover_opacity = 120;
        rejects(&config, "opacity");
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let mut config = TimelineConfig::default();
        config.logging.level = "chatty".to_string();
        rejects(&config, "log level");
    }
}
