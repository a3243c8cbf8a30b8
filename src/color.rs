use std::collections::{BTreeMap, BTreeSet};

use palette::{Hsl, IntoColor, Srgb};

/// Hex colour used for carriers the map does not know about.
const DEFAULT_COLOR: &str = "#808080";

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// formatted as `#rrggbb`.
pub fn generate_palette(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            format!(
                "#{:02x}{:02x}{:02x}",
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: carrier code → colour
// ---------------------------------------------------------------------------

/// Maps every carrier in the dataset to a distinct colour so a carrier is
/// drawn the same way on every chart and for every year.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, String>,
}

impl ColorMap {
    /// Build a colour map from the set of carrier codes.
    pub fn new(carriers: &BTreeSet<String>) -> Self {
        let palette = generate_palette(carriers.len());
        let mapping = carriers.iter().cloned().zip(palette).collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a carrier.
    pub fn color_for(&self, carrier: &str) -> &str {
        self.mapping
            .get(carrier)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct_hex() {
        let colors = generate_palette(6);
        assert_eq!(colors.len(), 6);
        let unique: BTreeSet<_> = colors.iter().collect();
        assert_eq!(unique.len(), 6);
        assert!(colors
            .iter()
            .all(|c| c.len() == 7 && c.starts_with('#')));
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn carriers_get_stable_colours() {
        let carriers: BTreeSet<String> = ["AA", "DL", "UA"].iter().map(|s| s.to_string()).collect();
        let map = ColorMap::new(&carriers);
        assert_ne!(map.color_for("AA"), map.color_for("DL"));
        assert_eq!(map.color_for("AA"), ColorMap::new(&carriers).color_for("AA"));
        assert_eq!(map.color_for("ZZ"), DEFAULT_COLOR);
    }
}
