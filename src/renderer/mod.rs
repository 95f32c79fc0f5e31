//! Renderer — turns a `Grid` into what a surface can draw.
//!
//! The renderer is pure and stateless. Given the same grid, it always
//! produces the same output. It knows nothing about time, fields, or input.

use crate::types::{CellChange, Grid};

pub struct Renderer;

impl Renderer {
    /// Plain text block: one line per row, each terminated by `\n`.
    pub fn to_text(grid: &Grid) -> String {
        let mut out = String::with_capacity(grid.height() * (grid.width() * 3 + 1));
        for row in grid.rows() {
            out.extend(row.iter().map(|cell| cell.ch));
            out.push('\n');
        }
        out
    }

    /// Text block with inline colour spans around message characters.
    ///
    /// Background glyphs carry no markup; the surface's default ink applies.
    pub fn to_markup(grid: &Grid) -> String {
        let mut out = String::new();
        for row in grid.rows() {
            for cell in row {
                match cell.style.fg {
                    Some(color) => {
                        let weight = if cell.style.bold { " font-weight: bold;" } else { "" };
                        out.push_str(&format!(
                            "<span style=\"color: {};{weight}\">{}</span>",
                            color.to_hex(),
                            cell.ch
                        ));
                    }
                    None => out.push(cell.ch),
                }
            }
            out.push('\n');
        }
        out
    }

    /// Compute a cell-level diff between two grids.
    pub fn diff(prev: &Grid, next: &Grid) -> Vec<CellChange> {
        let mut changes = Vec::new();
        for (y, (prev_row, next_row)) in prev.rows().iter().zip(next.rows()).enumerate() {
            for (x, (prev_cell, next_cell)) in prev_row.iter().zip(next_row).enumerate() {
                if prev_cell != next_cell {
                    changes.push(CellChange {
                        x: x as u16,
                        y: y as u16,
                        cell: *next_cell,
                    });
                }
            }
        }
        changes
    }
}
