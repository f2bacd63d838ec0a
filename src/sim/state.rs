//! Game session state
//!
//! Owns everything the simulation mutates. The shell advances it once per
//! display frame and renders from it read-only afterwards.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::clouds::generate_clouds;
use super::obstacle::{ObstacleStream, offset_span};
use crate::consts::{FRAME_COUNTER_MAX, MAX_PENDING_EVENTS};
use crate::error::ConfigError;
use crate::floor_height_for;
use crate::tuning::Tuning;

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Body and obstacles are moving
    Alive,
    /// Frozen until reset
    Dead,
}

/// Something the shell may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Scored { score: u32 },
    Died { score: u32, frames: u32 },
    Reset,
}

/// Frame counter driving spawn cadence. Wraps to 0 instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    frame: u32,
}

impl SimClock {
    pub fn starting_at(frame: u32) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Step to the next frame and return it
    pub fn tick(&mut self) -> u32 {
        self.frame = if self.frame >= FRAME_COUNTER_MAX {
            0
        } else {
            self.frame + 1
        };
        self.frame
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }
}

/// Complete game session
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    /// Last viewport seen; reset re-centers the body in it
    pub viewport: Viewport,
    /// Fixed at session start
    pub floor_height: f32,
    pub body: Body,
    pub obstacles: ObstacleStream,
    clouds: Vec<Vec2>,
    pub score: u32,
    /// Best score across restarts in this session
    pub best_score: u32,
    pub clock: SimClock,
    /// Events since the last drain, oldest first. Bounded; the oldest are
    /// dropped when nobody drains.
    #[serde(skip)]
    events: VecDeque<GameEvent>,
}

impl GameState {
    /// Start a session. Fails if the viewport is too short for any obstacle
    /// to fit or the body size is not positive.
    pub fn new(
        viewport: Viewport,
        body_width: f32,
        body_height: f32,
        tuning: Tuning,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        tuning.validate()?;
        if !(body_width > 0.0 && body_height > 0.0) {
            return Err(ConfigError::InvalidBody {
                width: body_width,
                height: body_height,
            });
        }

        let floor_height = floor_height_for(viewport.height);
        if offset_span(viewport.height, floor_height, tuning.obstacle_gap) <= 0 {
            return Err(ConfigError::ViewportTooShort {
                height: viewport.height,
                floor_height,
                gap: tuning.obstacle_gap,
            });
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = generate_clouds(&mut rng, viewport, body_width, tuning.max_cloud_attempts);

        log::info!(
            "Session started: seed {}, viewport {}x{}, floor height {}",
            seed,
            viewport.width,
            viewport.height,
            floor_height
        );

        Ok(Self {
            seed,
            rng,
            tuning,
            viewport,
            floor_height,
            body: Body::new(body_width, body_height, viewport),
            obstacles: ObstacleStream::new(),
            clouds,
            score: 0,
            best_score: 0,
            clock: SimClock::default(),
            events: VecDeque::new(),
        })
    }

    pub fn phase(&self) -> GamePhase {
        if self.body.dead {
            GamePhase::Dead
        } else {
            GamePhase::Alive
        }
    }

    pub fn is_dead(&self) -> bool {
        self.body.dead
    }

    /// Cloud positions, fixed for the lifetime of the session
    pub fn clouds(&self) -> &[Vec2] {
        &self.clouds
    }

    /// Flap input. Ignored while dead or early in a previous flap.
    pub fn handle_flap(&mut self) -> bool {
        self.body.trigger_flap(&self.tuning)
    }

    /// Reset input. Only acts while dead; clouds are kept.
    pub fn handle_reset(&mut self) -> bool {
        if !self.body.dead {
            return false;
        }
        self.body.respawn(self.viewport);
        self.score = 0;
        self.clock.reset();
        self.obstacles.clear();
        self.push_event(GameEvent::Reset);
        log::info!("Session reset");
        true
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take the events produced since the last call. At most
    /// `MAX_PENDING_EVENTS` of the newest are kept between calls.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }
}
