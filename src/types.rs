//! Shared boundary types for the field renderer.
//!
//! This module defines the data contracts between the pieces:
//! - Host → Engine: `FrameInput` (frame counter, field, pointer, surface box)
//! - Engine → Surface: `Grid` of typed `Cell`s, never pre-formatted markup

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Grid columns. Fixed for the lifetime of the process.
pub const GRID_WIDTH: usize = 80;
/// Grid rows. Fixed for the lifetime of the process.
pub const GRID_HEIGHT: usize = 40;

// ---------------------------------------------------------------------------
// Shared style primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<Color>,
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
}

impl Style {
    pub fn is_default(&self) -> bool {
        self.fg.is_none() && !self.bold
    }
}

// ---------------------------------------------------------------------------
// Engine → Surface boundary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub ch: char,
    #[serde(skip_serializing_if = "Style::is_default")]
    pub style: Style,
}

impl Cell {
    /// A background density glyph; carries no colour.
    pub fn background(ch: char) -> Self {
        Cell {
            ch,
            style: Style::default(),
        }
    }

    /// A message character drawn in the active palette colour.
    pub fn text(ch: char, color: Color) -> Self {
        Cell {
            ch,
            style: Style {
                fg: Some(color),
                bold: true,
            },
        }
    }

    pub fn is_text(&self) -> bool {
        self.style.fg.is_some()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::background(' ')
    }
}

/// One rendered frame: always `GRID_HEIGHT` rows of `GRID_WIDTH` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn blank() -> Self {
        Grid {
            rows: vec![vec![Cell::default(); GRID_WIDTH]; GRID_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(slot) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = cell;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

// ---------------------------------------------------------------------------
// Host → Engine boundary
// ---------------------------------------------------------------------------

/// The four background fields, in click order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Balance,
    Duality,
    Flow,
    Chaos,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Balance,
        FieldKind::Duality,
        FieldKind::Flow,
        FieldKind::Chaos,
    ];

    pub fn index(self) -> usize {
        match self {
            FieldKind::Balance => 0,
            FieldKind::Duality => 1,
            FieldKind::Flow => 2,
            FieldKind::Chaos => 3,
        }
    }

    /// Wraps, so any index is accepted.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Balance => "balance",
            FieldKind::Duality => "duality",
            FieldKind::Flow => "flow",
            FieldKind::Chaos => "chaos",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown field '{s}' (expected balance, duality, flow or chaos)"))
    }
}

/// Raw pointer position in screen units plus the press flag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub pressed: bool,
}

/// Bounding box of the render surface, in the same units as `PointerState`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBox {
    /// A box that cannot be used to map the pointer (zero, negative or
    /// non-finite extent) counts as unmeasured.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.left.is_finite()
            && self.top.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Map a screen-space point into fractional grid coordinates.
    pub fn to_grid(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.left) / self.width * GRID_WIDTH as f64,
            (y - self.top) / self.height * GRID_HEIGHT as f64,
        )
    }
}

/// Everything the compositor needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub frame: u32,
    pub field: FieldKind,
    pub pointer: PointerState,
    pub surface: Option<SurfaceBox>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_cycles_in_click_order() {
        assert_eq!(FieldKind::Balance.next(), FieldKind::Duality);
        assert_eq!(FieldKind::Chaos.next(), FieldKind::Balance);
        assert_eq!(FieldKind::from_index(6), FieldKind::Flow);
    }

    #[test]
    fn field_kind_parses_case_insensitively() {
        assert_eq!("FLOW".parse::<FieldKind>(), Ok(FieldKind::Flow));
        assert!("plasma".parse::<FieldKind>().is_err());
    }

    #[test]
    fn surface_box_maps_corners_to_grid_extent() {
        let b = SurfaceBox {
            left: 10.0,
            top: 5.0,
            width: 160.0,
            height: 80.0,
        };
        assert_eq!(b.to_grid(10.0, 5.0), (0.0, 0.0));
        assert_eq!(b.to_grid(170.0, 85.0), (80.0, 40.0));
    }

    #[test]
    fn degenerate_surface_box_is_unusable() {
        let mut b = SurfaceBox {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 40.0,
        };
        assert!(!b.is_usable());
        b.width = f64::NAN;
        assert!(!b.is_usable());
        b.width = 80.0;
        assert!(b.is_usable());
    }

    #[test]
    fn grid_ignores_out_of_range_writes() {
        let mut grid = Grid::blank();
        grid.set(GRID_WIDTH, 0, Cell::background('█'));
        grid.set(3, 2, Cell::background('▓'));
        assert_eq!(grid.get(3, 2).map(|c| c.ch), Some('▓'));
        assert!(grid.get(GRID_WIDTH, 0).is_none());
    }

    #[test]
    fn color_hex_is_uppercase() {
        assert_eq!(Color::rgb(0x2F, 0x4F, 0x2F).to_hex(), "#2F4F2F");
    }
}
