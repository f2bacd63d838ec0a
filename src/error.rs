//! Configuration errors
//!
//! The simulation itself never fails once constructed; everything that can
//! go wrong is caught at startup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "viewport height {height} leaves no room for obstacles \
         (floor height {floor_height}, gap {gap})"
    )]
    ViewportTooShort {
        height: f32,
        floor_height: f32,
        gap: f32,
    },
    #[error("body size must be positive, got {width}x{height}")]
    InvalidBody { width: f32, height: f32 },
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
