//! 3x5 bitmap font for the score, the reset prompt and the leaderboard

use super::pixels::{PixelBuf, Rgb};

pub const GLYPH_W: i32 = 3;
pub const GLYPH_H: i32 = 5;

#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

#[rustfmt::skip]
fn letter(c: char) -> Option<[u8; 15]> {
    Some(match c {
        'A' => [0,1,0, 1,0,1, 1,1,1, 1,0,1, 1,0,1],
        'B' => [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,1,0],
        'C' => [0,1,1, 1,0,0, 1,0,0, 1,0,0, 0,1,1],
        'E' => [1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,1,1],
        'F' => [1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,0,0],
        'M' => [1,0,1, 1,1,1, 1,1,1, 1,0,1, 1,0,1],
        'N' => [1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,0,1],
        'O' => [0,1,0, 1,0,1, 1,0,1, 1,0,1, 0,1,0],
        'P' => [1,1,0, 1,0,1, 1,1,0, 1,0,0, 1,0,0],
        'R' => [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,0,1],
        'S' => [0,1,1, 1,0,0, 0,1,0, 0,0,1, 1,1,0],
        'T' => [1,1,1, 0,1,0, 0,1,0, 0,1,0, 0,1,0],
        _ => return None,
    })
}

fn glyph(c: char) -> Option<[u8; 15]> {
    match c.to_digit(10) {
        Some(d) => Some(DIGITS[d as usize]),
        None => letter(c.to_ascii_uppercase()),
    }
}

fn draw_glyph(buf: &mut PixelBuf, x: i32, y: i32, bits: &[u8; 15], fg: Rgb, shadow: Option<Rgb>) {
    for row in 0..GLYPH_H {
        for col in 0..GLYPH_W {
            if bits[(row * GLYPH_W + col) as usize] == 1 {
                if let Some(s) = shadow {
                    buf.set(x + col + 1, y + row + 1, s);
                }
                buf.set(x + col, y + row, fg);
            }
        }
    }
}

/// Pixel width of a rendered string
pub fn text_width(text: &str) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 { 0 } else { n * (GLYPH_W + 1) - 1 }
}

/// Draw text horizontally centered on `cx`. Unknown characters render as
/// blanks.
pub fn draw_text_centered(buf: &mut PixelBuf, cx: i32, y: i32, text: &str, fg: Rgb, shadow: Option<Rgb>) {
    let start_x = cx - text_width(text) / 2;
    for (i, ch) in text.chars().enumerate() {
        if let Some(bits) = glyph(ch) {
            draw_glyph(buf, start_x + i as i32 * (GLYPH_W + 1), y, &bits, fg, shadow);
        }
    }
}
