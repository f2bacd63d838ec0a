//! Decorative cloud placement
//!
//! Rejection sampling of 2 or 3 points in the upper three quarters of the
//! viewport, each at least `sqrt(15) * body_width` from the others. Attempts
//! are capped; running out places fewer clouds instead of spinning forever.

use glam::Vec2;
use rand::Rng;

use super::state::Viewport;
use crate::consts::CLOUD_SPACING_FACTOR;

/// Place clouds once for a session
pub fn generate_clouds<R: Rng>(
    rng: &mut R,
    viewport: Viewport,
    body_width: f32,
    max_attempts: u32,
) -> Vec<Vec2> {
    let target: usize = rng.random_range(2..=3);
    let max_x = viewport.width as i32;
    let max_y = viewport.height as i32 / 4 * 3;
    if max_x <= 0 || max_y <= 0 {
        log::warn!(
            "Viewport {}x{} has no room for clouds",
            viewport.width,
            viewport.height
        );
        return Vec::new();
    }

    let min_dist_sq = CLOUD_SPACING_FACTOR * body_width * body_width;
    let mut clouds: Vec<Vec2> = Vec::with_capacity(target);
    let mut attempts = 0;

    while clouds.len() < target && attempts < max_attempts {
        attempts += 1;
        let candidate = Vec2::new(
            rng.random_range(0..max_x) as f32,
            rng.random_range(0..max_y) as f32,
        );
        if clouds
            .iter()
            .all(|c| c.distance_squared(candidate) >= min_dist_sq)
        {
            clouds.push(candidate);
        }
    }

    if clouds.len() < target {
        log::warn!(
            "Placed {} of {} clouds after {} attempts (viewport {}x{}, body width {})",
            clouds.len(),
            target,
            attempts,
            viewport.width,
            viewport.height,
            body_width
        );
    } else {
        log::debug!("Placed {} clouds in {} attempts", clouds.len(), attempts);
    }

    clouds
}
