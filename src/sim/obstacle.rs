//! Pipe obstacles: generation and the scrolling stream
//!
//! The stream is a FIFO: spawns append at the back, retirement pops the
//! front. Creation order is scroll order, so the front is always the oldest
//! and leftmost obstacle.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Viewport;

/// One pipe pair. Top and bottom share x and are always `gap` apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Creation sequence number within the current run
    pub id: u32,
    /// Center of the top segment's gap edge
    pub top: Vec2,
    /// Center of the bottom segment's gap edge
    pub bottom: Vec2,
}

impl Obstacle {
    #[inline]
    pub fn x(&self) -> f32 {
        self.bottom.x
    }

    #[inline]
    pub fn gap(&self) -> f32 {
        self.bottom.y - self.top.y
    }
}

/// Width of the range the top offset is drawn from. Each term is truncated
/// to whole pixels before combining.
///
/// Non-positive means the viewport is too short to place any obstacle.
pub fn offset_span(viewport_height: f32, floor_height: f32, gap: f32) -> i32 {
    viewport_height as i32 - 3 * floor_height as i32 - gap as i32
}

/// Build an obstacle flush with the right edge for a given top offset
pub fn obstacle_at(id: u32, offset: f32, viewport_width: f32, floor_height: f32, gap: f32) -> Obstacle {
    let top_y = floor_height + offset;
    Obstacle {
        id,
        top: Vec2::new(viewport_width, top_y),
        bottom: Vec2::new(viewport_width, top_y + gap),
    }
}

/// Generate an obstacle at a uniformly random height
pub fn spawn_obstacle<R: Rng>(
    rng: &mut R,
    id: u32,
    viewport: Viewport,
    floor_height: f32,
    gap: f32,
) -> Obstacle {
    let span = offset_span(viewport.height, floor_height, gap);
    let offset = if span > 0 {
        rng.random_range(0..span) as f32
    } else {
        log::warn!(
            "Viewport {}x{} too short for obstacle gap {}, spawning at offset 0",
            viewport.width,
            viewport.height,
            gap
        );
        0.0
    };
    obstacle_at(id, offset, viewport.width, floor_height, gap)
}

/// Live obstacles in creation order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleStream {
    obstacles: VecDeque<Obstacle>,
    next_id: u32,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn front(&self) -> Option<&Obstacle> {
        self.obstacles.front()
    }

    /// Scroll every obstacle left. Returns how many crossed the viewport's
    /// horizontal midpoint this frame.
    ///
    /// The crossing window is one scroll step wide, so each obstacle is
    /// counted on exactly one frame.
    pub fn advance(&mut self, viewport_width: f32, scroll_speed: f32) -> u32 {
        let mid = viewport_width / 2.0;
        let mut crossed = 0;
        for obstacle in &mut self.obstacles {
            obstacle.top.x -= scroll_speed;
            obstacle.bottom.x -= scroll_speed;

            if obstacle.bottom.x <= mid && obstacle.bottom.x > mid - scroll_speed {
                crossed += 1;
            }
        }
        crossed
    }

    /// Drop the oldest obstacle once it is fully past the left edge
    pub fn retire_expired(&mut self, body_width: f32) -> Option<Obstacle> {
        match self.obstacles.front() {
            Some(front) if front.top.x < -body_width => self.obstacles.pop_front(),
            _ => None,
        }
    }

    /// Append a fresh obstacle when `frame` lands on the spawn cadence
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        frame: u32,
        cadence: u32,
        rng: &mut R,
        viewport: Viewport,
        floor_height: f32,
        gap: f32,
    ) -> Option<&Obstacle> {
        if cadence == 0 || frame % cadence != 0 {
            return None;
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.obstacles
            .push_back(spawn_obstacle(rng, id, viewport, floor_height, gap));
        self.obstacles.back()
    }

    #[cfg(test)]
    pub(crate) fn push_back(&mut self, obstacle: Obstacle) {
        self.obstacles.push_back(obstacle);
    }

    /// Remove every obstacle and restart id numbering
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.next_id = 0;
    }
}
