//! Pointer perturbation: a decaying ripple centred on the pressed pointer.

use log::trace;

use crate::types::{PointerState, SurfaceBox};

/// Additive adjustment to the field value at grid cell `(x, y)`.
///
/// Contributes nothing while the pointer is released, or when the surface has
/// not been measured (or was measured with an unusable extent).
pub fn perturb(x: f64, y: f64, t: f64, pointer: &PointerState, surface: Option<SurfaceBox>) -> f64 {
    match pointer_in_grid(pointer, surface) {
        Some((gx, gy)) => ripple(x, y, t, gx, gy),
        None => 0.0,
    }
}

/// Ripple strength at `(x, y)` for a pointer already mapped to `(gx, gy)`.
pub fn ripple(x: f64, y: f64, t: f64, gx: f64, gy: f64) -> f64 {
    let dist = (x - gx).hypot(y - gy);
    (-dist * 0.1).exp() * (t * 2.0).sin() * 0.8
}

/// The pointer in grid space, or `None` when no ripple applies this frame.
pub fn pointer_in_grid(pointer: &PointerState, surface: Option<SurfaceBox>) -> Option<(f64, f64)> {
    if !pointer.pressed {
        return None;
    }
    match surface {
        Some(b) if b.is_usable() => Some(b.to_grid(pointer.x, pointer.y)),
        Some(b) => {
            trace!("ignoring unusable surface box {b:?}");
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn surface() -> SurfaceBox {
        SurfaceBox {
            left: 0.0,
            top: 1.0,
            width: 80.0,
            height: 40.0,
        }
    }

    #[test]
    fn released_pointer_contributes_exactly_zero() {
        let pointer = PointerState {
            x: 40.0,
            y: 21.0,
            pressed: false,
        };
        for &(x, y, t) in &[(40.0, 20.0, 0.7), (0.0, 0.0, 3.1), (79.0, 39.0, 12.0)] {
            assert_eq!(perturb(x, y, t, &pointer, Some(surface())), 0.0);
        }
    }

    #[test]
    fn unmeasured_surface_contributes_zero() {
        let pointer = PointerState {
            x: 40.0,
            y: 21.0,
            pressed: true,
        };
        assert_eq!(perturb(40.0, 20.0, 0.7, &pointer, None), 0.0);
        let flat = SurfaceBox {
            height: 0.0,
            ..surface()
        };
        assert_eq!(perturb(40.0, 20.0, 0.7, &pointer, Some(flat)), 0.0);
        assert_eq!(pointer_in_grid(&pointer, Some(flat)), None);
    }

    #[test]
    fn ripple_peaks_under_the_pointer_and_decays() {
        let pointer = PointerState {
            x: 40.0,
            y: 21.0,
            pressed: true,
        };
        let t = std::f64::consts::PI / 4.0; // sin(2t) = 1
        let at = perturb(40.0, 20.0, t, &pointer, Some(surface()));
        assert!((at - 0.8).abs() < 1e-12);
        let near = perturb(43.0, 24.0, t, &pointer, Some(surface()));
        assert!((near - (-0.5_f64).exp() * 0.8).abs() < 1e-12);
        assert!(near < at);
    }

    #[test]
    fn screen_coordinates_are_scaled_into_grid_space() {
        let pointer = PointerState {
            x: 120.0,
            y: 50.0,
            pressed: true,
        };
        let wide = SurfaceBox {
            left: 40.0,
            top: 10.0,
            width: 160.0,
            height: 80.0,
        };
        assert_eq!(pointer_in_grid(&pointer, Some(wide)), Some((40.0, 20.0)));
    }
}
