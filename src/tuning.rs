//! Data-driven game balance
//!
//! Defaults mirror `crate::consts`. Any subset of fields may be overridden
//! from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub fall_speed: f32,
    pub flap_multiplier: f32,
    pub frames_per_flap: u32,
    pub flap_lockout: u32,
    pub frames_per_obstacle: u32,
    pub obstacle_gap: f32,
    pub scroll_speed: f32,
    pub max_cloud_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            fall_speed: FALL_SPEED,
            flap_multiplier: FLAP_MULTIPLIER,
            frames_per_flap: FRAMES_PER_FLAP,
            flap_lockout: FLAP_LOCKOUT,
            frames_per_obstacle: FRAMES_PER_OBSTACLE,
            obstacle_gap: OBSTACLE_GAP,
            scroll_speed: SCROLL_SPEED,
            max_cloud_attempts: MAX_CLOUD_ATTEMPTS,
        }
    }
}

impl Tuning {
    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames_per_obstacle == 0 {
            return Err(ConfigError::InvalidTuning(
                "frames_per_obstacle must be at least 1".into(),
            ));
        }
        if self.fall_speed <= 0.0 || self.scroll_speed <= 0.0 {
            return Err(ConfigError::InvalidTuning(format!(
                "fall_speed ({}) and scroll_speed ({}) must be positive",
                self.fall_speed, self.scroll_speed
            )));
        }
        if self.obstacle_gap <= 0.0 {
            return Err(ConfigError::InvalidTuning(format!(
                "obstacle_gap must be positive, got {}",
                self.obstacle_gap
            )));
        }
        if self.flap_multiplier < 0.0 {
            return Err(ConfigError::InvalidTuning(format!(
                "flap_multiplier must not be negative, got {}",
                self.flap_multiplier
            )));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }
}
