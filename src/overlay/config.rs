// Layout knobs for the caption-table overlay. All ratios are relative to
// the photo being stamped, so the table scales with the image.

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Font size as a fraction of image height (default 0.02).
    pub font_height_ratio: f32,

    /// Hard floor for the computed font size in pixels (default 12).
    pub min_font_px: f32,

    /// Cell padding as a fraction of the font size (default 0.5).
    pub padding_ratio: f32,

    /// Gap between wrapped lines as a fraction of the font size
    /// (default 0.2).
    pub line_spacing_ratio: f32,

    /// Target table width as a fraction of image width (default 0.3).
    /// The value column gets whatever the key column leaves of this.
    pub target_width_ratio: f32,

    /// Minimum table width as a fraction of image width (default 0.2);
    /// the value column is widened to reach it.
    pub min_width_ratio: f32,

    /// Value-column floor in em units (default 4.0) so long keys cannot
    /// squeeze the values to nothing.
    pub min_value_width_em: f32,

    /// Wrap values character-by-character to the value column width.
    /// Off, each value renders as one line and may overrun the table.
    pub wrap_values: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            font_height_ratio: 0.02,
            min_font_px: 12.0,
            padding_ratio: 0.5,
            line_spacing_ratio: 0.2,
            target_width_ratio: 0.3,
            min_width_ratio: 0.2,
            min_value_width_em: 4.0,
            wrap_values: true,
        }
    }
}
