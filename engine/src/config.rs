//! Timeline configuration file support.
//!
//! This module provides utilities for reading timeline layout settings from
//! TOML configuration files. Every setting has a default, so an empty file
//! (or no file at all, via [`TimelineSettings::default`]) yields a working
//! configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

/// Layout settings from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default)]
    pub timeline: TimelineSettings,
}

/// Grid and viewport tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSettings {
    /// Width of one business-day column, px
    #[serde(default = "default_column_width_px")]
    pub column_width_px: f64,
    /// Gap between adjacent blocks, px
    #[serde(default = "default_gutter_px")]
    pub gutter_px: f64,
    /// Minimum visible window, whole weeks
    #[serde(default = "default_base_window_weeks")]
    pub base_window_weeks: u32,
    /// Extra business days of range on each side of the content
    #[serde(default = "default_padding_business_days")]
    pub padding_business_days: u32,
}

fn default_column_width_px() -> f64 {
    40.0
}

fn default_gutter_px() -> f64 {
    4.0
}

fn default_base_window_weeks() -> u32 {
    8
}

fn default_padding_business_days() -> u32 {
    5
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            column_width_px: default_column_width_px(),
            gutter_px: default_gutter_px(),
            base_window_weeks: default_base_window_weeks(),
            padding_business_days: default_padding_business_days(),
        }
    }
}

impl TimelineConfig {
    /// Load timeline configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: TimelineConfig = toml::from_str(&content).map_err(|e| {
            EngineError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load timeline configuration from the default location.
    ///
    /// Searches for `timeline.toml` in:
    /// 1. Current directory
    /// 2. `engine/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> EngineResult<Self> {
        let search_paths = vec![
            PathBuf::from("timeline.toml"),
            PathBuf::from("engine/timeline.toml"),
            PathBuf::from("../timeline.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(EngineError::configuration(
            "No timeline.toml found in standard locations",
        ))
    }
}

impl TimelineSettings {
    /// Validate ranges that serde alone cannot express.
    pub fn validate(&self) -> EngineResult<()> {
        if self.column_width_px <= 0.0 {
            return Err(EngineError::configuration(
                "'timeline.column_width_px' must be positive",
            ));
        }
        if self.gutter_px < 0.0 {
            return Err(EngineError::configuration(
                "'timeline.gutter_px' must not be negative",
            ));
        }
        if self.gutter_px >= self.column_width_px {
            return Err(EngineError::configuration(
                "'timeline.gutter_px' must be smaller than 'timeline.column_width_px'",
            ));
        }
        if self.base_window_weeks == 0 {
            return Err(EngineError::configuration(
                "'timeline.base_window_weeks' must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: TimelineConfig = toml::from_str("").unwrap();
        assert_eq!(config.timeline.column_width_px, 40.0);
        assert_eq!(config.timeline.gutter_px, 4.0);
        assert_eq!(config.timeline.base_window_weeks, 8);
        assert_eq!(config.timeline.padding_business_days, 5);
        assert!(config.timeline.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[timeline]
column_width_px = 32.0
gutter_px = 2.0
base_window_weeks = 12
padding_business_days = 10
"#;

        let config: TimelineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.timeline.column_width_px, 32.0);
        assert_eq!(config.timeline.gutter_px, 2.0);
        assert_eq!(config.timeline.base_window_weeks, 12);
        assert_eq!(config.timeline.padding_business_days, 10);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let toml = r#"
[timeline]
column_width_px = 24.0
"#;

        let config: TimelineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.timeline.column_width_px, 24.0);
        assert_eq!(config.timeline.gutter_px, 4.0);
        assert_eq!(config.timeline.base_window_weeks, 8);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timeline]\nbase_window_weeks = 6").unwrap();

        let config = TimelineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.timeline.base_window_weeks, 6);
    }

    #[test]
    fn test_from_file_missing() {
        let result = TimelineConfig::from_file("/nonexistent/timeline.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeline = not valid toml").unwrap();

        assert!(TimelineConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut settings = TimelineSettings::default();
        settings.column_width_px = 0.0;
        assert!(settings.validate().is_err());

        let mut settings = TimelineSettings::default();
        settings.gutter_px = -1.0;
        assert!(settings.validate().is_err());

        let mut settings = TimelineSettings::default();
        settings.gutter_px = 40.0;
        assert!(settings.validate().is_err());

        let mut settings = TimelineSettings::default();
        settings.base_window_weeks = 0;
        assert!(settings.validate().is_err());
    }
}
