//! Background fields.
//!
//! Each field maps a grid position and time to a real value, roughly in
//! `[-1.4, 1.4]`. Values are not clamped; the glyph mapper handles any real.

use crate::types::FieldKind;

const CX: f64 = 40.0;
const CY: f64 = 20.0;

/// Evaluate `kind` at grid cell `(x, y)` and time `t`.
pub fn field(kind: FieldKind, x: f64, y: f64, t: f64) -> f64 {
    match kind {
        FieldKind::Balance => balance(x, y, t),
        FieldKind::Duality => duality(x, y, t),
        FieldKind::Flow => flow(x, y, t),
        FieldKind::Chaos => chaos(x, y, t),
    }
}

/// Concentric pulsing symmetry around the centre.
fn balance(x: f64, y: f64, t: f64) -> f64 {
    let dx = x - CX;
    let dy = y - CY;
    let dist = dx.hypot(dy);
    (dx * 0.3 + t * 0.5).sin() * (dy * 0.3 + t * 0.3).cos() * (dist * 0.1 - t * 0.4).sin()
}

/// Sine on the left half, cosine on the right, sharing a vertical wave.
fn duality(x: f64, y: f64, t: f64) -> f64 {
    let left = if x < CX { (x * 0.2 + t * 0.3).sin() } else { 0.0 };
    let right = if x >= CX { (x * 0.2 - t * 0.3).cos() } else { 0.0 };
    left + right + (y * 0.3 + t * 0.2).sin()
}

/// Rotating rings in polar coordinates.
fn flow(x: f64, y: f64, t: f64) -> f64 {
    let angle = (y - CY).atan2(x - CX);
    let dist = (x - CX).hypot(y - CY);
    (angle * 3.0 + t * 0.4).sin() * (dist * 0.1 - t * 0.3).cos()
}

fn chaos(x: f64, y: f64, t: f64) -> f64 {
    let noise1 = (x * 0.5 + t).sin() * (y * 0.3 - t).cos();
    let noise2 = (y * 0.4 + t * 0.5).sin() * (x * 0.2 + t * 0.7).cos();
    let noise3 = ((x + y) * 0.2 + t * 0.8).sin();
    noise1 * 0.3 + noise2 * 0.3 + noise3 * 0.4
}
