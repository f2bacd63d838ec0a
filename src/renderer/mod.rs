//! Terminal rendering module
//!
//! Reads a `GameState` after the frame's update and paints it into a
//! `PixelBuf`. Simulation coordinates are scaled to fit the buffer height.

pub mod glyphs;
pub mod pixels;

pub use pixels::{PixelBuf, Rgb};

use glam::Vec2;

use crate::HighScores;
use crate::sim::{BodyPose, GameState};
use glyphs::{GLYPH_H, draw_text_centered};

const SKY_TOP: Rgb = Rgb(100, 150, 230);
const SKY_BOT: Rgb = Rgb(160, 200, 245);
const CLOUD: Rgb = Rgb(245, 248, 255);
const CLOUD_SHADE: Rgb = Rgb(215, 225, 240);
const PIPE: Rgb = Rgb(100, 170, 40);
const PIPE_EDGE: Rgb = Rgb(60, 100, 20);
const FLOOR: Rgb = Rgb(60, 180, 100);
const FLOOR_TOP: Rgb = Rgb(30, 45, 45);
const BODY: Rgb = Rgb(245, 200, 66);
const WING: Rgb = Rgb(215, 165, 35);
const BEAK: Rgb = Rgb(225, 75, 35);
const WHITE: Rgb = Rgb(255, 255, 255);
const SHADOW: Rgb = Rgb(0, 0, 0);

/// Pipe width in simulation pixels
const PIPE_WIDTH: f32 = 52.0;
/// Dark strip on top of the floor band, in simulation pixels
const FLOOR_TOP_HEIGHT: f32 = 10.0;
/// Vertical advance between text rows, in buffer pixels
const LINE_HEIGHT: i32 = GLYPH_H + 2;
/// Cloud half-extents in simulation pixels
const CLOUD_HALF: Vec2 = Vec2::new(40.0, 14.0);

/// Maps simulation pixels to buffer pixels
#[derive(Debug, Clone, Copy)]
struct Camera {
    scale: f32,
}

impl Camera {
    fn px(&self, v: f32) -> i32 {
        (v * self.scale).round() as i32
    }
}

/// Paint one frame
pub fn draw(state: &GameState, highscores: &HighScores, buf: &mut PixelBuf) {
    if buf.height() == 0 || buf.width() == 0 {
        return;
    }
    let cam = Camera {
        scale: buf.height() as f32 / state.viewport.height,
    };

    draw_sky(buf);
    draw_clouds(state, cam, buf);
    draw_obstacles(state, cam, buf);
    draw_floor(state, cam, buf);
    draw_body(state, cam, buf);

    let cx = buf.width() as i32 / 2;
    let score_y = buf.height() as i32 / 6;
    draw_text_centered(buf, cx, score_y, &state.score.to_string(), WHITE, Some(SHADOW));

    if state.is_dead() {
        draw_game_over(state, highscores, buf);
    }
}

fn draw_sky(buf: &mut PixelBuf) {
    let (w, h) = (buf.width() as i32, buf.height() as i32);
    for y in 0..h {
        let c = SKY_TOP.lerp(SKY_BOT, y as f32 / h as f32);
        buf.fill_rect(0, y, w, y + 1, c);
    }
}

fn draw_clouds(state: &GameState, cam: Camera, buf: &mut PixelBuf) {
    for c in state.clouds() {
        let (x0, x1) = (cam.px(c.x - CLOUD_HALF.x), cam.px(c.x + CLOUD_HALF.x));
        let (y0, y1) = (cam.px(c.y - CLOUD_HALF.y), cam.px(c.y + CLOUD_HALF.y));
        let inset = cam.px(CLOUD_HALF.x * 0.4);
        buf.fill_rect(x0, y0 + (y1 - y0) / 2, x1, y1, CLOUD_SHADE);
        buf.fill_rect(x0 + inset, y0, x1 - inset, y1 - 1, CLOUD);
    }
}

fn draw_obstacles(state: &GameState, cam: Camera, buf: &mut PixelBuf) {
    let floor_y = cam.px(state.viewport.height - state.floor_height);
    for o in state.obstacles.iter() {
        let x0 = cam.px(o.x() - PIPE_WIDTH / 2.0);
        let x1 = cam.px(o.x() + PIPE_WIDTH / 2.0);
        let top = cam.px(o.top.y);
        let bottom = cam.px(o.bottom.y);

        buf.fill_rect(x0, 0, x1, top, PIPE);
        buf.fill_rect(x0, bottom, x1, floor_y, PIPE);
        // Edges
        buf.fill_rect(x0, 0, x0 + 1, top, PIPE_EDGE);
        buf.fill_rect(x1 - 1, 0, x1, top, PIPE_EDGE);
        buf.fill_rect(x0, top - 1, x1, top, PIPE_EDGE);
        buf.fill_rect(x0, bottom, x0 + 1, floor_y, PIPE_EDGE);
        buf.fill_rect(x1 - 1, bottom, x1, floor_y, PIPE_EDGE);
        buf.fill_rect(x0, bottom, x1, bottom + 1, PIPE_EDGE);
    }
}

fn draw_floor(state: &GameState, cam: Camera, buf: &mut PixelBuf) {
    let (w, h) = (buf.width() as i32, buf.height() as i32);
    let y0 = cam.px(state.viewport.height - state.floor_height);
    buf.fill_rect(0, y0, w, h, FLOOR);
    buf.fill_rect(0, y0, w, y0 + cam.px(FLOOR_TOP_HEIGHT).max(1), FLOOR_TOP);
}

fn draw_body(state: &GameState, cam: Camera, buf: &mut PixelBuf) {
    let b = &state.body;
    let x0 = cam.px(b.pos.x - b.width / 2.0);
    let x1 = cam.px(b.pos.x + b.width / 2.0);
    let y0 = cam.px(b.pos.y - b.height / 2.0);
    let y1 = cam.px(b.pos.y + b.height / 2.0);
    buf.fill_rect(x0, y0, x1, y1, BODY);

    // Wing position shows the pose
    let mid = (y0 + y1) / 2;
    let (wy0, wy1) = match b.pose {
        BodyPose::Flapping => (mid, y1),
        BodyPose::Resting => (y0, mid),
    };
    buf.fill_rect(x0, wy0, x0 + (x1 - x0) / 2, wy1, WING);

    let beak = ((x1 - x0) / 4).max(1);
    buf.fill_rect(x1, mid - beak / 2, x1 + beak, mid + beak / 2 + 1, BEAK);
    buf.set(x1 - beak, y0 + 1, SHADOW);
}

fn draw_game_over(state: &GameState, highscores: &HighScores, buf: &mut PixelBuf) {
    buf.dim_all();
    let cx = buf.width() as i32 / 2;
    let h = buf.height() as i32;

    let mut y = h / 6;
    draw_text_centered(buf, cx, y, &state.score.to_string(), WHITE, Some(SHADOW));
    y += LINE_HEIGHT + 1;
    draw_text_centered(buf, cx, y, &format!("BEST {}", state.best_score), BODY, Some(SHADOW));
    y += LINE_HEIGHT + 1;
    draw_text_centered(buf, cx, y, "PRESS R TO RESET", WHITE, None);

    if highscores.is_empty() {
        return;
    }
    y += LINE_HEIGHT + 3;
    for (i, line) in leaderboard_lines(highscores).iter().enumerate() {
        if y + GLYPH_H > h {
            break;
        }
        let color = if i == 0 { BODY } else { WHITE };
        draw_text_centered(buf, cx, y, line, color, Some(SHADOW));
        y += LINE_HEIGHT;
    }
}

/// Header plus one fixed-width row per ranked run
fn leaderboard_lines(highscores: &HighScores) -> Vec<String> {
    std::iter::once(format!("{:>2} {:>5} {:>6}", "NO", "SCORE", "FRAMES"))
        .chain(
            highscores
                .ranked()
                .map(|(rank, e)| format!("{:>2} {:>5} {:>6}", rank, e.score, e.frames)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Viewport;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(Viewport::new(400.0, 420.0), 30.0, 20.0, Tuning::default(), 3).unwrap()
    }

    #[test]
    fn test_draws_floor_at_bottom() {
        let state = state();
        let mut buf = PixelBuf::new(80, 84);
        draw(&state, &HighScores::new(), &mut buf);
        assert_eq!(buf.get(0, 83), FLOOR);
    }

    #[test]
    fn test_death_overlay_dims() {
        let mut state = state();
        let mut buf = PixelBuf::new(80, 84);
        draw(&state, &HighScores::new(), &mut buf);
        let alive_floor = buf.get(0, 83);

        state.body.dead = true;
        draw(&state, &HighScores::new(), &mut buf);
        assert_eq!(buf.get(0, 83), alive_floor.dim());
    }

    #[test]
    fn test_leaderboard_lines() {
        let mut hs = HighScores::new();
        hs.add_score(4, 900);
        hs.add_score(12, 2750);
        assert_eq!(
            leaderboard_lines(&hs),
            vec![
                "NO SCORE FRAMES".to_string(),
                " 1    12   2750".to_string(),
                " 2     4    900".to_string(),
            ]
        );
    }

    #[test]
    fn test_death_overlay_lists_every_ranked_run() {
        let mut state = state();
        state.body.dead = true;

        let mut one = HighScores::new();
        one.add_score(9, 1500);
        let mut two = one.clone();
        two.add_score(3, 700);

        let mut a = PixelBuf::new(100, 160);
        let mut b = PixelBuf::new(100, 160);
        draw(&state, &one, &mut a);
        draw(&state, &two, &mut b);

        // Second row sits below the header and first row
        let first_row = 160 / 6 + 3 * (LINE_HEIGHT + 1) + 2 + LINE_HEIGHT;
        let second_row = first_row + LINE_HEIGHT;
        let differs = (second_row..second_row + GLYPH_H)
            .any(|y| (0..100).any(|x| a.get(x, y as usize) != b.get(x, y as usize)));
        assert!(differs);
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut buf = PixelBuf::new(0, 0);
        draw(&state(), &HighScores::new(), &mut buf);
    }
}
