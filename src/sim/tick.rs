//! Per-frame simulation step
//!
//! Advances the session by one frame unit. Motion constants are per frame,
//! so the caller must invoke this at a roughly fixed cadence.

use super::collision::first_collision;
use super::state::{GameEvent, GamePhase, GameState, Viewport};

/// Discrete input events gathered since the previous frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Flap key pressed
    pub flap: bool,
    /// Reset key pressed
    pub reset: bool,
}

/// Apply queued input, then advance one frame
pub fn tick(state: &mut GameState, input: &FrameInput, viewport: Viewport) -> GamePhase {
    if input.reset {
        state.handle_reset();
    }
    if input.flap {
        state.handle_flap();
    }
    advance(state, viewport)
}

/// Advance the session by one frame. A no-op while dead.
///
/// Order within a frame: clock, body motion and ground check, obstacle
/// collisions, scrolling and scoring, retirement, spawning. A death during
/// the body phase still lets the rest of the frame complete.
pub fn advance(state: &mut GameState, viewport: Viewport) -> GamePhase {
    state.viewport = viewport;
    if state.body.dead {
        return GamePhase::Dead;
    }

    let frame = state.clock.tick();
    let tuning = &state.tuning;

    state.body.advance(viewport, state.floor_height, tuning);
    if !state.body.dead {
        if let Some(hit) = first_collision(state.obstacles.iter(), &state.body) {
            log::debug!("Body hit obstacle {} at x {}", hit.id, hit.x());
            state.body.dead = true;
        }
    }

    let crossed = state.obstacles.advance(viewport.width, tuning.scroll_speed);
    for _ in 0..crossed {
        state.score += 1;
        state.push_event(GameEvent::Scored { score: state.score });
    }

    if let Some(retired) = state.obstacles.retire_expired(state.body.width) {
        log::debug!("Retired obstacle {}", retired.id);
    }

    if let Some(spawned) = state.obstacles.maybe_spawn(
        frame,
        state.tuning.frames_per_obstacle,
        &mut state.rng,
        viewport,
        state.floor_height,
        state.tuning.obstacle_gap,
    ) {
        log::debug!(
            "Spawned obstacle {} with gap {}..{}",
            spawned.id,
            spawned.top.y,
            spawned.bottom.y
        );
    }

    if state.body.dead {
        state.best_score = state.best_score.max(state.score);
        state.push_event(GameEvent::Died {
            score: state.score,
            frames: frame,
        });
        log::info!("Died with score {} after {} frames", state.score, frame);
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&*state) {
                Ok(json) => log::debug!("Final state: {}", json),
                Err(e) => log::warn!("Could not serialize final state: {}", e),
            }
        }
    }

    state.phase()
}

impl GameState {
    /// Advance one frame in the given viewport
    pub fn advance(&mut self, viewport: Viewport) -> GamePhase {
        advance(self, viewport)
    }
}
