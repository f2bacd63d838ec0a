//! The player-controlled body
//!
//! Two motion modes: falling at a constant rate, or flapping, where the body
//! rises by a displacement proportional to the remaining flap timer. Each flap
//! is therefore a fast-then-slow rise.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Viewport;
use crate::tuning::Tuning;

/// Which sprite the renderer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BodyPose {
    /// Wings down, shown while rising
    Flapping,
    /// Wings up, shown while falling
    #[default]
    Resting,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Sprite size, fixed once the session is created
    pub width: f32,
    pub height: f32,
    /// Center position in viewport pixels (origin top-left)
    pub pos: Vec2,
    /// Frames of rise left in the current flap
    pub flap_timer: u32,
    pub flapping: bool,
    pub dead: bool,
    pub pose: BodyPose,
}

impl Body {
    /// Create a body centered in the viewport
    pub fn new(width: f32, height: f32, viewport: Viewport) -> Self {
        Self {
            width,
            height,
            pos: viewport.center(),
            flap_timer: 0,
            flapping: false,
            dead: false,
            pose: BodyPose::Resting,
        }
    }

    /// Highest allowed center (smallest y)
    #[inline]
    pub fn ceiling_line(&self) -> f32 {
        self.height / 2.0
    }

    /// Lowest allowed center, resting on the floor band
    #[inline]
    pub fn floor_line(&self, viewport_height: f32, floor_height: f32) -> f32 {
        viewport_height - floor_height - self.height / 2.0
    }

    /// Advance one frame. Does nothing once dead.
    ///
    /// Ground death is an exact comparison against the floor line: the body
    /// dies on the frame it reaches the floor.
    pub fn advance(&mut self, viewport: Viewport, floor_height: f32, tuning: &Tuning) {
        if self.dead {
            return;
        }

        let floor_line = self.floor_line(viewport.height, floor_height);

        if self.flapping {
            if self.flap_timer == 0 {
                self.flapping = false;
                self.pose = BodyPose::Resting;
            } else {
                self.flap_timer -= 1;
                let rise = tuning.flap_multiplier * self.flap_timer as f32;
                if self.pos.y > self.ceiling_line() + rise {
                    self.pos.y -= rise;
                }
            }
        } else {
            self.pos.y = (self.pos.y + tuning.fall_speed).min(floor_line);
            self.pos.x = viewport.width / 2.0;
        }

        if self.pos.y == floor_line {
            self.dead = true;
        }
    }

    /// Start a flap. Refused when dead or still early in a previous flap.
    pub fn trigger_flap(&mut self, tuning: &Tuning) -> bool {
        if self.dead || self.flap_timer > tuning.flap_lockout {
            return false;
        }
        self.flapping = true;
        self.pose = BodyPose::Flapping;
        self.flap_timer = tuning.frames_per_flap;
        true
    }

    /// Put the body back in the middle of the viewport, alive and falling
    pub fn respawn(&mut self, viewport: Viewport) {
        self.pos = viewport.center();
        self.flap_timer = 0;
        self.flapping = false;
        self.dead = false;
        self.pose = BodyPose::Resting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEW: Viewport = Viewport::new(400.0, 420.0);
    const FLOOR: f32 = 21.0;

    fn body() -> Body {
        Body::new(30.0, 20.0, VIEW)
    }

    #[test]
    fn test_falls_and_recenters() {
        let tuning = Tuning::default();
        let mut b = body();
        b.pos.x = 10.0;
        let y0 = b.pos.y;
        b.advance(VIEW, FLOOR, &tuning);
        assert_eq!(b.pos.y, y0 + tuning.fall_speed);
        assert_eq!(b.pos.x, 200.0);
        assert!(!b.dead);
    }

    #[test]
    fn test_flap_rises_with_easing() {
        let tuning = Tuning::default();
        let mut b = body();
        assert!(b.trigger_flap(&tuning));
        assert_eq!(b.pose, BodyPose::Flapping);

        let y0 = b.pos.y;
        b.advance(VIEW, FLOOR, &tuning);
        let first_rise = y0 - b.pos.y;
        let y1 = b.pos.y;
        b.advance(VIEW, FLOOR, &tuning);
        let second_rise = y1 - b.pos.y;

        assert!((first_rise - 0.9 * 16.0).abs() < 1e-4);
        assert!(second_rise < first_rise);
    }

    #[test]
    fn test_flap_ends_when_timer_runs_out() {
        let tuning = Tuning::default();
        let mut b = body();
        b.trigger_flap(&tuning);
        for _ in 0..tuning.frames_per_flap {
            b.advance(VIEW, FLOOR, &tuning);
        }
        assert!(b.flapping);
        assert_eq!(b.flap_timer, 0);
        b.advance(VIEW, FLOOR, &tuning);
        assert!(!b.flapping);
        assert_eq!(b.pose, BodyPose::Resting);
    }

    #[test]
    fn test_flap_lockout() {
        let tuning = Tuning::default();
        let mut b = body();
        assert!(b.trigger_flap(&tuning));
        assert!(!b.trigger_flap(&tuning));

        // Timer drops to the lockout threshold, re-flap allowed
        while b.flap_timer > tuning.flap_lockout {
            b.advance(VIEW, FLOOR, &tuning);
        }
        assert!(b.trigger_flap(&tuning));
        assert_eq!(b.flap_timer, tuning.frames_per_flap);
    }

    #[test]
    fn test_rise_blocked_at_ceiling() {
        let tuning = Tuning::default();
        let mut b = body();
        b.pos.y = b.ceiling_line() + 1.0;
        b.trigger_flap(&tuning);
        b.advance(VIEW, FLOOR, &tuning);
        assert_eq!(b.pos.y, b.ceiling_line() + 1.0);
    }

    #[test]
    fn test_clamps_to_floor_and_dies() {
        let tuning = Tuning::default();
        let mut b = body();
        let floor_line = b.floor_line(VIEW.height, FLOOR);
        b.pos.y = floor_line - 1.0;
        b.advance(VIEW, FLOOR, &tuning);
        assert_eq!(b.pos.y, floor_line);
        assert!(b.dead);
    }

    #[test]
    fn test_at_floor_dies_without_moving() {
        let tuning = Tuning::default();
        let mut b = body();
        let floor_line = b.floor_line(VIEW.height, FLOOR);
        b.pos.y = floor_line;
        b.advance(VIEW, FLOOR, &tuning);
        assert!(b.dead);
        assert_eq!(b.pos.y, floor_line);
    }

    #[test]
    fn test_dead_body_is_frozen() {
        let tuning = Tuning::default();
        let mut b = body();
        b.dead = true;
        let before = b.pos;
        b.advance(VIEW, FLOOR, &tuning);
        assert_eq!(b.pos, before);
        assert!(!b.trigger_flap(&tuning));
    }

    #[test]
    fn test_respawn() {
        let tuning = Tuning::default();
        let mut b = body();
        b.trigger_flap(&tuning);
        b.dead = true;
        b.pos = Vec2::new(3.0, 4.0);
        b.respawn(VIEW);
        assert_eq!(b.pos, VIEW.center());
        assert!(!b.dead && !b.flapping);
        assert_eq!(b.flap_timer, 0);
        assert_eq!(b.pose, BodyPose::Resting);
    }

    proptest! {
        #[test]
        fn prop_stays_in_vertical_band(flaps in proptest::collection::vec(any::<bool>(), 1..400)) {
            let tuning = Tuning::default();
            let mut b = body();
            let floor_line = b.floor_line(VIEW.height, FLOOR);
            for flap in flaps {
                if b.dead {
                    break;
                }
                if flap {
                    b.trigger_flap(&tuning);
                }
                b.advance(VIEW, FLOOR, &tuning);
                prop_assert!(b.pos.y >= b.ceiling_line());
                prop_assert!(b.pos.y <= floor_line);
            }
        }
    }
}
