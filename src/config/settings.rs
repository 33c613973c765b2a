//! Configuration settings for pomotui.
//!
//! Settings are loaded from `~/.pomotui/config.yaml` or the file given with
//! `--config`. Every field is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::PomoError;
use crate::timer::{Preset, Selector};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Presets offered by the selector, in display order.
    #[serde(default = "Preset::defaults")]
    pub presets: Vec<Preset>,
    /// Index of the preset highlighted at startup.
    #[serde(default)]
    pub default_preset: usize,
    /// Tick interval in milliseconds.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    /// Optional log file.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

const fn default_tick_millis() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            presets: Preset::defaults(),
            default_preset: 0,
            tick_millis: default_tick_millis(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration. Without
    /// a home directory the file is looked up under `./.pomotui/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PomoError> {
        Self::load_from_path(&Paths::default().config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if it contains a preset with a zero-length interval.
    pub fn load_from_path(path: &Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Check the settings that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` for an empty preset list, an out-of-range
    /// default preset, or a zero tick interval.
    pub fn validate(&self) -> Result<(), PomoError> {
        if self.tick_millis == 0 {
            return Err(PomoError::Config(
                "tick_millis must be greater than zero".to_string(),
            ));
        }
        self.selector().map(|_| ())
    }

    /// Build the selector with the default preset highlighted.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` if there are no presets or
    /// `default_preset` is out of range.
    pub fn selector(&self) -> Result<Selector, PomoError> {
        let mut selector = Selector::new(self.presets.clone())?;
        selector.highlight(self.default_preset)?;
        Ok(selector)
    }

    /// The tick interval.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.presets, vec![Preset::CLASSIC, Preset::LONG]);
        assert_eq!(config.default_preset, 0);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.presets.len(), 2);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
default_preset: 1
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.default_preset, 1);
        assert_eq!(config.presets, Preset::defaults());
        assert_eq!(config.selector().unwrap().confirm_selection(), Some(Preset::LONG));
    }

    #[test]
    fn test_custom_presets() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r"
presets:
  - focus_minutes: 15
    break_minutes: 3
  - focus_minutes: 90
    break_minutes: 20
log_file: /tmp/pomotui.log
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.presets[1], Preset::new(90, 20).unwrap());
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/pomotui.log")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_minute_preset_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r"
presets:
  - focus_minutes: 0
    break_minutes: 5
";
        std::fs::write(&config_path, yaml).unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, PomoError::Config(_)));
        assert!(err.to_string().contains("durations must be positive"));
    }

    #[test]
    fn test_empty_presets_rejected() {
        let config = Config {
            presets: vec![],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(PomoError::Config(_))));
    }

    #[test]
    fn test_default_preset_out_of_range() {
        let config = Config {
            default_preset: 5,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = Config {
            tick_millis: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
