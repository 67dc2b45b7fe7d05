use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.6);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: genre → Color32
// ---------------------------------------------------------------------------

/// Maps each distinct genre value to its own colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: HashMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the dataset's distinct genres.
    pub fn new(genres: &[String]) -> Self {
        let mapping = genres
            .iter()
            .cloned()
            .zip(generate_palette(genres.len()))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::LIGHT_BLUE,
        }
    }

    /// Look up the colour for a genre; missing or unknown genres get the default.
    pub fn color_for(&self, genre: Option<&str>) -> Color32 {
        genre
            .and_then(|g| self.mapping.get(g))
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colours() {
        let palette = generate_palette(4);
        assert_eq!(palette.len(), 4);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_genre_falls_back_to_default() {
        let map = ColorMap::new(&["Drama".to_string(), "Action".to_string()]);
        assert_ne!(map.color_for(Some("Drama")), map.color_for(Some("Action")));
        assert_eq!(map.color_for(Some("Horror")), Color32::LIGHT_BLUE);
        assert_eq!(map.color_for(None), Color32::LIGHT_BLUE);
    }
}
