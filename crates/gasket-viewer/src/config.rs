use gasket_engine::paint::Color;

/// Viewer configuration.
///
/// Resolution, recursion depth, and colors are data passed into runtime and
/// renderer construction rather than literals scattered through the drawing
/// code. There are no CLI flags or config files; `main` builds the defaults.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,

    /// Initial window size in logical pixels.
    pub window_size: (f64, f64),

    /// Maximum recursion depth of the subdivision.
    ///
    /// Draw requests grow geometrically: (3^depth - 1) / 2 triangles per
    /// frame, so depth 9 records 9841 instances.
    pub max_depth: u32,

    pub palette: Palette,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Sierpinski's Triangle".to_string(),
            window_size: (800.0, 600.0),
            max_depth: 9,
            palette: Palette::default(),
        }
    }
}

/// Colors used by the viewer.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Window background (the frame's clear color).
    pub background: Color,

    /// Fill of the one-off inverted base triangle drawn behind the fractal.
    pub inverted: Color,

    /// Per-level fills for the subdivision; cycles when the recursion goes
    /// deeper than the list.
    pub levels: Vec<Color>,
}

impl Palette {
    /// Returns the fill color for a recursion level (0 = root).
    pub fn level_color(&self, level: u32) -> Color {
        if self.levels.is_empty() {
            return Color::white();
        }
        self.levels[level as usize % self.levels.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::opaque(0.762, 0.8131, 1.0),
            inverted: Color::opaque(0.2, 0.31, 0.261),
            levels: vec![
                Color::opaque(0.2, 0.31, 0.61),
                Color::opaque(0.2, 0.31, 0.261),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_color_cycles_through_palette() {
        let palette = Palette::default();
        assert_eq!(palette.level_color(0), palette.level_color(2));
        assert_eq!(palette.level_color(1), palette.level_color(3));
        assert_ne!(palette.level_color(0), palette.level_color(1));
    }

    #[test]
    fn empty_palette_falls_back_to_white() {
        let palette = Palette {
            levels: Vec::new(),
            ..Palette::default()
        };
        assert_eq!(palette.level_color(4), Color::white());
    }
}
