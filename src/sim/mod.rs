//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed frame step only
//! - Seeded RNG only
//! - Obstacles kept in creation order
//! - No rendering or platform dependencies

pub mod body;
pub mod clouds;
pub mod collision;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use body::{Body, BodyPose};
pub use clouds::generate_clouds;
pub use collision::{collides, first_collision};
pub use obstacle::{Obstacle, ObstacleStream, obstacle_at, offset_span, spawn_obstacle};
pub use state::{GameEvent, GamePhase, GameState, SimClock, Viewport};
pub use tick::{FrameInput, advance, tick};
