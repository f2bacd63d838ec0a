//! Platform abstraction layer
//!
//! Handles the terminal side of the game:
//! - Raw mode and alternate screen, restored on drop
//! - Terminal size in half-block pixels
//! - Key events mapped to simulation input

use std::io::{self, Stdout, stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, terminal,
};

use crate::sim::FrameInput;

/// What the shell should do after draining input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// New buffer size in pixels
    Resized(usize, usize),
    Quit,
}

/// Terminal in game mode. Dropping it restores the previous state.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )?;
        Ok(Self { out })
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Terminal size in pixels: one per column, two per row
pub fn pixel_size() -> io::Result<(usize, usize)> {
    let (cols, rows) = terminal::size()?;
    Ok(cells_to_pixels(cols, rows))
}

fn cells_to_pixels(cols: u16, rows: u16) -> (usize, usize) {
    (cols as usize, rows as usize * 2)
}

/// Drain pending terminal events without blocking, recording flap and reset
/// presses into `input`.
pub fn poll_input(input: &mut FrameInput) -> io::Result<Control> {
    let mut control = Control::Continue;
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key) => {
                if apply_key(key, input) {
                    return Ok(Control::Quit);
                }
            }
            Event::Resize(cols, rows) => {
                let (w, h) = cells_to_pixels(cols, rows);
                control = Control::Resized(w, h);
            }
            _ => {}
        }
    }
    Ok(control)
}

/// Map one key event. Returns true for quit.
fn apply_key(key: KeyEvent, input: &mut FrameInput) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(' ') | KeyCode::Up => input.flap = true,
        KeyCode::Char('r') | KeyCode::Char('R') => input.reset = true,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        let mut input = FrameInput::default();
        assert!(!apply_key(press(KeyCode::Char(' ')), &mut input));
        assert!(input.flap);
        assert!(!input.reset);

        assert!(!apply_key(press(KeyCode::Char('r')), &mut input));
        assert!(input.reset);

        assert!(apply_key(press(KeyCode::Esc), &mut FrameInput::default()));
        assert!(apply_key(press(KeyCode::Char('q')), &mut FrameInput::default()));
    }

    #[test]
    fn test_release_ignored() {
        let mut input = FrameInput::default();
        let mut key = press(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;
        apply_key(key, &mut input);
        assert!(!input.flap);
    }

    #[test]
    fn test_cells_to_pixels() {
        assert_eq!(cells_to_pixels(80, 24), (80, 48));
    }
}
