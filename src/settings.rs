//! Shell settings
//!
//! Loaded from an optional JSON file. Every field has a default, so a file
//! only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame cap; simulation speed is tied to this
    pub target_fps: u32,
    /// Logical viewport height in simulation pixels. Width follows the
    /// terminal's aspect ratio.
    pub viewport_height: f32,
    /// Body sprite size
    pub body_width: f32,
    pub body_height: f32,
    /// RNG seed; random when absent
    pub seed: Option<u64>,
    /// Log measured FPS every this many frames (0 disables)
    pub fps_log_interval: u32,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: 90,
            viewport_height: 420.0,
            body_width: 30.0,
            body_height: 20.0,
            seed: None,
            fps_log_interval: 10,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_fps == 0 {
            return Err(ConfigError::InvalidTuning(
                "target_fps must be at least 1".into(),
            ));
        }
        self.tuning.validate()
    }

    /// Seed to use for this run
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_gives_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.target_fps, 90);
        assert_eq!(settings.viewport_height, 420.0);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_json_with_nested_tuning() {
        let settings =
            Settings::from_json(r#"{ "seed": 12, "tuning": { "fall_speed": 4.0 } }"#).unwrap();
        assert_eq!(settings.seed, Some(12));
        assert_eq!(settings.resolve_seed(), 12);
        assert_eq!(settings.tuning.fall_speed, 4.0);
        assert_eq!(settings.tuning.frames_per_flap, 17);
        assert_eq!(settings.body_width, 30.0);
    }

    #[test]
    fn test_zero_fps_rejected() {
        assert!(Settings::from_json(r#"{ "target_fps": 0 }"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load(Some(Path::new("/nonexistent/birdflap.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
