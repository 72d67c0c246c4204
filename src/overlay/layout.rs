//! Geometry pass for the caption-table overlay.
//!
//! Everything here is measurement-driven: the backend reports rendered
//! text widths and the layout derives column widths, wraps the values,
//! sums row heights and anchors the table bottom-right. No pixels are
//! touched; `compositor` consumes the result.

use unicode_segmentation::UnicodeSegmentation;

use super::config::OverlayConfig;
use super::table::CaptionTable;
use crate::rendering::TextBackend;

/// One table row after wrapping: the display lines of the value and the
/// resulting row height in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub lines: Vec<String>,
    pub height: u32,
}

/// Resolved geometry for one composite call. Ephemeral; recomputed from
/// scratch every time.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub font_size: f32,
    /// Vertical advance of a single text line, in whole pixels.
    pub line_advance: u32,
    pub padding: u32,
    pub line_spacing: u32,
    pub col1_width: u32,
    pub col2_width: u32,
    pub width: u32,
    pub height: u32,
    pub origin_x: u32,
    pub origin_y: u32,
    pub rows: Vec<RowLayout>,
}

impl TableLayout {
    /// Compute the table geometry for an image of `img_w` × `img_h`.
    ///
    /// The caller guarantees a non-empty image; the layout itself never
    /// fails. Oversized tables are clamped to the image width and the
    /// origin floors at zero, so the rectangle satisfies
    /// `origin_x + width <= img_w` for any input.
    pub fn compute(
        img_w: u32,
        img_h: u32,
        table: &CaptionTable,
        config: &OverlayConfig,
        text: &dyn TextBackend,
    ) -> Self {
        let requested = (img_h as f32 * config.font_height_ratio).max(config.min_font_px);
        let font_size = text.preferred_font_size(requested);
        let line_advance = font_size.round() as u32;
        let padding = (font_size * config.padding_ratio).round() as u32;
        let line_spacing = (font_size * config.line_spacing_ratio).round() as u32;

        // Keys never wrap; the key column fits the widest one.
        let max_key_width = table
            .rows()
            .map(|(key, _)| text.measure(key, font_size))
            .fold(0.0_f32, f32::max);
        let col1_width = max_key_width.ceil() as u32 + 2 * padding;

        let target_width = (img_w as f32 * config.target_width_ratio) as u32;
        let col2_floor = (font_size * config.min_value_width_em).round() as u32;
        let mut col2_width = target_width
            .saturating_sub(col1_width + 2 * padding)
            .max(col2_floor);

        let rows: Vec<RowLayout> = table
            .rows()
            .map(|(_, value)| {
                let lines = if config.wrap_values {
                    wrap_to_width(value, col2_width as f32, font_size, text)
                } else {
                    vec![value.to_string()]
                };
                let count = lines.len() as u32;
                let height = count * line_advance + (count - 1) * line_spacing + 2 * padding;
                RowLayout { lines, height }
            })
            .collect();

        let mut width = col1_width + col2_width + 2 * padding;
        let min_width = (img_w as f32 * config.min_width_ratio) as u32;
        if width < min_width {
            col2_width += min_width - width;
            width = min_width;
        }
        if width > img_w {
            // Values may overrun the narrowed column; lossy but bounded.
            col2_width = col2_width.saturating_sub(width - img_w);
            width = img_w;
        }

        let height = rows.iter().map(|row| row.height).sum();
        let origin_x = img_w.saturating_sub(width + padding);
        let origin_y = img_h.saturating_sub(height + padding);

        Self {
            font_size,
            line_advance,
            padding,
            line_spacing,
            col1_width,
            col2_width,
            width,
            height,
            origin_x,
            origin_y,
            rows,
        }
    }
}

/// Greedy character wrap: graphemes accumulate onto the current line
/// while the measured line still fits `max_width`; the first overflowing
/// grapheme opens the next line. A grapheme wider than the column gets a
/// line of its own rather than being dropped. Empty input yields one
/// empty line so the row keeps its minimum height.
pub fn wrap_to_width(
    value: &str,
    max_width: f32,
    font_size: f32,
    text: &dyn TextBackend,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for grapheme in value.graphemes(true) {
        let mut candidate = current.clone();
        candidate.push_str(grapheme);
        if text.measure(&candidate, font_size) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(current);
            }
            current = grapheme.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
