//! Density glyphs for background field values.

/// Lower bounds (exclusive) paired with their glyph, highest first.
const THRESHOLDS: [(f64, char); 5] = [
    (0.8, '█'),
    (0.5, '▓'),
    (0.2, '▒'),
    (-0.2, '░'),
    (-0.5, '·'),
];

/// Quantize a field value. Values at a threshold take the lower glyph; NaN
/// maps to blank.
pub fn to_glyph(value: f64) -> char {
    THRESHOLDS
        .iter()
        .find(|(bound, _)| value > *bound)
        .map_or(' ', |&(_, ch)| ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_value_per_band() {
        let glyphs: String = [0.9, 0.6, 0.3, 0.0, -0.3, -0.6]
            .into_iter()
            .map(to_glyph)
            .collect();
        assert_eq!(glyphs, "█▓▒░· ");
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(to_glyph(0.8), '▓');
        assert_eq!(to_glyph(0.5), '▒');
        assert_eq!(to_glyph(0.2), '░');
        assert_eq!(to_glyph(-0.2), '·');
        assert_eq!(to_glyph(-0.5), ' ');
    }

    #[test]
    fn total_over_extremes() {
        assert_eq!(to_glyph(f64::INFINITY), '█');
        assert_eq!(to_glyph(f64::NEG_INFINITY), ' ');
        assert_eq!(to_glyph(f64::NAN), ' ');
    }
}
