//! Birdflap - a side-scrolling flap-through-the-pipes game
//!
//! Core modules:
//! - `sim`: Deterministic frame-step simulation (body, obstacles, collisions, clouds)
//! - `renderer`: Terminal half-block renderer
//! - `platform`: Terminal setup and input mapping
//! - `tuning`: Data-driven game balance
//! - `settings`: Shell configuration

pub mod error;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
///
/// All motion constants are in frame units: the simulation assumes the
/// caller advances it at a roughly fixed cadence.
pub mod consts {
    /// Pixels the body falls per frame while not flapping
    pub const FALL_SPEED: f32 = 5.0;
    /// Upward displacement per remaining flap frame
    pub const FLAP_MULTIPLIER: f32 = 0.9;
    /// Flap timer value set on each flap
    pub const FRAMES_PER_FLAP: u32 = 17;
    /// A new flap is refused while the timer is above this
    pub const FLAP_LOCKOUT: u32 = 3;

    /// Frames between obstacle spawns
    pub const FRAMES_PER_OBSTACLE: u32 = 200;
    /// Vertical distance between top and bottom segment centers
    pub const OBSTACLE_GAP: f32 = 320.0;
    /// Pixels obstacles scroll left per frame
    pub const SCROLL_SPEED: f32 = 2.0;

    /// Frame counter wraps to 0 after reaching this value
    pub const FRAME_COUNTER_MAX: u32 = i32::MAX as u32;
    /// Undrained session events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 64;

    /// Candidate draws before cloud placement gives up
    pub const MAX_CLOUD_ATTEMPTS: u32 = 1000;
    /// Minimum squared cloud spacing, in units of body width squared
    pub const CLOUD_SPACING_FACTOR: f32 = 15.0;

    /// Floor band is 1/20th of the viewport height, capped
    pub const FLOOR_HEIGHT_DIVISOR: f32 = 20.0;
    pub const FLOOR_HEIGHT_MAX: f32 = 50.0;
}

/// Floor band thickness for a viewport of the given height
#[inline]
pub fn floor_height_for(viewport_height: f32) -> f32 {
    (viewport_height / consts::FLOOR_HEIGHT_DIVISOR).min(consts::FLOOR_HEIGHT_MAX)
}
