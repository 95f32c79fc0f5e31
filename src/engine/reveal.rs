//! Message reveal and colour cycling.
//!
//! Everything here is a pure function of the frame counter. The reveal only
//! restarts when the host wraps the counter back to zero.

use std::f64::consts::PI;

use crate::types::{Color, GRID_HEIGHT, GRID_WIDTH};

/// Time is slowed by this factor relative to a 60-tick second.
pub const SLOWDOWN_FACTOR: u32 = 3;
/// The frame counter wraps at this value.
pub const FRAME_PERIOD: u32 = 240 * SLOWDOWN_FACTOR;
/// Frames until every line is fully revealed.
pub const REVEAL_FRAMES: u32 = 180;

pub const MESSAGE: [&str; 3] = ["HARB", "NAWARTU", "AWA"];
/// Row offset of each message line from the grid's middle row.
const LINE_OFFSETS: [i32; 3] = [-4, 0, 4];
/// Overall progress at which each line starts to appear.
const LINE_DELAYS: [f64; 3] = [0.0, 0.3, 0.6];

pub const PALETTE: [Color; 5] = [
    Color::rgb(0x00, 0x64, 0x00),
    Color::rgb(0x2F, 0x4F, 0x2F),
    Color::rgb(0x22, 0x8B, 0x22),
    Color::rgb(0x00, 0x80, 0x00),
    Color::rgb(0x1F, 0x4F, 0x1F),
];

/// Continuous animation time for a frame.
pub fn frame_time(frame: u32) -> f64 {
    frame as f64 * PI / (60 * SLOWDOWN_FACTOR) as f64
}

/// Palette colour for time `t`, shared by all visible text in a frame.
pub fn active_color(t: f64) -> Color {
    let index = (t * 2.0).floor().max(0.0) as usize % PALETTE.len();
    PALETTE[index]
}

/// The visible portion of one message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealedLine {
    pub text: &'static str,
    pub row: usize,
    /// First column of the first character. Each character spans two columns.
    pub start_col: usize,
}

impl RevealedLine {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The message character shown at `(x, y)`, if any. Only the first of a
    /// character's two columns shows it; the second falls through.
    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        if y != self.row || self.is_empty() || x < self.start_col {
            return None;
        }
        let offset = x - self.start_col;
        if offset % 2 != 0 {
            return None;
        }
        self.text.as_bytes().get(offset / 2).map(|&b| b as char)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// In priority order: the first line that claims a cell wins.
    pub lines: [RevealedLine; 3],
    pub color: Color,
}

/// Overall reveal progress in `[0, 1]`.
pub fn progress(frame: u32) -> f64 {
    (frame as f64 / REVEAL_FRAMES as f64).min(1.0)
}

/// Number of characters of message line `line` visible at `frame`.
pub fn visible_chars(frame: u32, line: usize) -> usize {
    let Some(&text) = MESSAGE.get(line) else {
        return 0;
    };
    let line_progress = ((progress(frame) - LINE_DELAYS[line]) * 3.0).clamp(0.0, 1.0);
    ((text.len() as f64 * line_progress).floor() as usize).min(text.len())
}

pub fn reveal(frame: u32) -> Reveal {
    let t = frame_time(frame);
    let lines = std::array::from_fn(|i| {
        let full: &'static str = MESSAGE[i];
        let text = &full[..visible_chars(frame, i)];
        let row = (GRID_HEIGHT as i32 / 2 + LINE_OFFSETS[i]) as usize;
        let start_col = GRID_WIDTH.saturating_sub(text.len() * 2) / 2;
        RevealedLine {
            text,
            row,
            start_col,
        }
    });
    Reveal {
        lines,
        color: active_color(t),
    }
}
