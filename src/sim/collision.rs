//! Body vs obstacle collision
//!
//! The body is treated as a square of half-side `width` for this test,
//! regardless of its height. An obstacle is a vertical line at its x with a
//! gap between `top.y` and `bottom.y`.

use super::body::Body;
use super::obstacle::Obstacle;

/// True if the body touches either segment of the obstacle
pub fn collides(obstacle: &Obstacle, body: &Body) -> bool {
    let x = obstacle.x();
    let half = body.width;
    let overlaps_x = body.pos.x + half >= x && body.pos.x - half <= x;
    if !overlaps_x {
        return false;
    }
    body.pos.y - half <= obstacle.top.y || body.pos.y + half >= obstacle.bottom.y
}

/// First obstacle (oldest first) the body is touching, if any
pub fn first_collision<'a, I>(obstacles: I, body: &Body) -> Option<&'a Obstacle>
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    obstacles.into_iter().find(|o| collides(o, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::obstacle_at;
    use crate::sim::state::Viewport;
    use glam::Vec2;
    use proptest::prelude::*;

    fn body_at(x: f32, y: f32) -> Body {
        let mut b = Body::new(30.0, 20.0, Viewport::new(400.0, 420.0));
        b.pos = Vec2::new(x, y);
        b
    }

    // Gap from y=50 to y=370 at x=200
    fn pipe() -> Obstacle {
        obstacle_at(0, 29.0, 200.0, 21.0, 320.0)
    }

    #[test]
    fn test_inside_gap_is_safe() {
        assert!(!collides(&pipe(), &body_at(200.0, 210.0)));
    }

    #[test]
    fn test_hits_top_segment() {
        // 50 + 30 = 80 is the lowest safe center
        assert!(collides(&pipe(), &body_at(200.0, 80.0)));
        assert!(!collides(&pipe(), &body_at(200.0, 80.5)));
    }

    #[test]
    fn test_hits_bottom_segment() {
        // 370 - 30 = 340 is the highest safe center
        assert!(collides(&pipe(), &body_at(200.0, 340.0)));
        assert!(!collides(&pipe(), &body_at(200.0, 339.5)));
    }

    #[test]
    fn test_horizontal_edges_inclusive() {
        assert!(collides(&pipe(), &body_at(170.0, 60.0)));
        assert!(collides(&pipe(), &body_at(230.0, 60.0)));
        assert!(!collides(&pipe(), &body_at(169.9, 60.0)));
        assert!(!collides(&pipe(), &body_at(230.1, 60.0)));
    }

    #[test]
    fn test_first_collision_picks_oldest() {
        let a = obstacle_at(0, 29.0, 200.0, 21.0, 320.0);
        let b = obstacle_at(1, 29.0, 210.0, 21.0, 320.0);
        let obstacles = [a, b];
        let hit = first_collision(obstacles.iter(), &body_at(205.0, 60.0)).unwrap();
        assert_eq!(hit.id, 0);
        assert!(first_collision(obstacles.iter(), &body_at(205.0, 210.0)).is_none());
    }

    proptest! {
        #[test]
        fn prop_no_horizontal_overlap_no_collision(
            dx in 30.01f32..1000.0,
            left in any::<bool>(),
            y in -500.0f32..1000.0,
        ) {
            let x = if left { 200.0 - dx } else { 200.0 + dx };
            prop_assert!(!collides(&pipe(), &body_at(x, y)));
        }
    }
}
