//! Engine — the frame compositor.
//!
//! Turns a `FrameInput` (frame counter, field, pointer, surface box) into a
//! `Grid` of typed cells. Message characters take priority over the
//! background; everything else is a quantized field value.
//!
//! The engine is pure. It owns no timers and keeps nothing between calls.

pub mod field;
pub mod glyph;
pub mod pointer;
pub mod reveal;

use crate::types::{Cell, FrameInput, Grid, GRID_HEIGHT, GRID_WIDTH};
use field::field;
use glyph::to_glyph;
use pointer::{pointer_in_grid, ripple};
use reveal::{frame_time, reveal, Reveal};

pub struct Engine;

impl Engine {
    /// Render one full frame.
    pub fn render_frame(input: &FrameInput) -> Grid {
        let t = frame_time(input.frame);
        let message = reveal(input.frame);
        let pointer = pointer_in_grid(&input.pointer, input.surface);

        let mut grid = Grid::blank();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let cell = match Self::text_at(&message, x, y) {
                    Some(cell) => cell,
                    None => {
                        let (fx, fy) = (x as f64, y as f64);
                        let mut value = field(input.field, fx, fy, t);
                        if let Some((gx, gy)) = pointer {
                            value += ripple(fx, fy, t, gx, gy);
                        }
                        Cell::background(to_glyph(value))
                    }
                };
                grid.set(x, y, cell);
            }
        }
        grid
    }

    /// First message line claiming `(x, y)` wins.
    fn text_at(message: &Reveal, x: usize, y: usize) -> Option<Cell> {
        message
            .lines
            .iter()
            .find_map(|line| line.char_at(x, y))
            .map(|ch| Cell::text(ch, message.color))
    }
}
