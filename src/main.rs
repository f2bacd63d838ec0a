//! Birdflap entry point
//!
//! Sets up the terminal, then runs update-then-render at a capped frame
//! rate. Logs go to stderr; redirect them (`2>birdflap.log`) to keep the
//! screen clean.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use thiserror::Error;

use birdflap::platform::{self, Control, Terminal};
use birdflap::renderer::{self, PixelBuf};
use birdflap::sim::{FrameInput, GameEvent, GameState, Viewport, tick};
use birdflap::{ConfigError, HighScores, Settings};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Simulation viewport for a buffer: fixed logical height, width following
/// the buffer's aspect ratio.
fn logical_viewport(buf_w: usize, buf_h: usize, height: f32) -> Viewport {
    let per_px = height / buf_h.max(1) as f32;
    Viewport::new(buf_w as f32 * per_px, height)
}

/// Measures achieved frame rate over a window of frames
struct FpsMeter {
    interval: u32,
    frames: u32,
    window_start: Instant,
}

impl FpsMeter {
    fn new(interval: u32) -> Self {
        Self {
            interval,
            frames: 0,
            window_start: Instant::now(),
        }
    }

    fn frame(&mut self) {
        if self.interval == 0 {
            return;
        }
        self.frames += 1;
        if self.frames >= self.interval {
            let elapsed = self.window_start.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                log::debug!("FPS: {:.0}", self.frames as f64 / elapsed);
            }
            self.frames = 0;
            self.window_start = Instant::now();
        }
    }
}

fn run(term: &mut Terminal, settings: &Settings) -> Result<(), AppError> {
    let (w, h) = platform::pixel_size()?;
    let mut buf = PixelBuf::new(w, h);
    let mut viewport = logical_viewport(w, h, settings.viewport_height);

    let seed = settings.resolve_seed();
    let mut state = GameState::new(
        viewport,
        settings.body_width,
        settings.body_height,
        settings.tuning.clone(),
        seed,
    )?;
    let mut highscores = HighScores::new();
    let mut fps = FpsMeter::new(settings.fps_log_interval);
    let frame_dur = Duration::from_secs_f64(1.0 / settings.target_fps as f64);

    log::info!("Birdflap running at {} fps cap", settings.target_fps);

    loop {
        let frame_start = Instant::now();

        let mut input = FrameInput::default();
        match platform::poll_input(&mut input)? {
            Control::Quit => return Ok(()),
            Control::Resized(w, h) => {
                buf.resize(w, h);
                viewport = logical_viewport(w, h, settings.viewport_height);
                log::debug!("Resized to {}x{} ({}x{} logical)", w, h, viewport.width, viewport.height);
            }
            Control::Continue => {}
        }

        tick(&mut state, &input, viewport);

        for event in state.drain_events() {
            if let GameEvent::Died { score, frames } = event {
                if let Some(rank) = highscores.add_score(score, frames) {
                    log::info!("Run ranked #{} with score {}", rank, score);
                }
            }
        }

        renderer::draw(&state, &highscores, &mut buf);
        buf.render(term.out())?;
        fps.frame();

        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}

fn main() -> Result<(), AppError> {
    env_logger::init();
    log::info!("Birdflap starting...");

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref())?;

    let mut term = Terminal::enter()?;
    let result = run(&mut term, &settings);
    drop(term);

    if let Err(e) = &result {
        log::error!("{}", e);
    }
    result
}
