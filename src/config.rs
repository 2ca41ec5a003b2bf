/// Horizontal alignment of the status bar label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Everything the indicator needs to know at launch. There is no runtime
/// configuration source; the defaults are the product.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfig {
    /// Base name of the bundled font resource.
    pub font_name: &'static str,
    pub font_extension: &'static str,
    pub point_size: f64,
    pub glyph: &'static str,
    /// Shown when the custom font cannot be loaded.
    pub fallback_glyph: &'static str,
    pub alignment: Alignment,
    /// Nudges the glyph down so it sits in the middle of the menu bar.
    pub baseline_offset: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        IndicatorConfig {
            font_name: "Pixellari",
            font_extension: "ttf",
            point_size: 16.0,
            glyph: "V",
            fallback_glyph: "V",
            alignment: Alignment::Center,
            baseline_offset: -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_label_is_centered_and_nudged_down() {
        let config = IndicatorConfig::default();
        assert_eq!(config.alignment, Alignment::Center);
        assert!(config.baseline_offset < 0.0);
        assert_eq!(config.glyph, config.fallback_glyph);
    }
}
