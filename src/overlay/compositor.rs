//! Rasterizes the caption table onto a photo.
//!
//! `composite_table` is a pure transform: it clones the source image,
//! computes a fresh [`TableLayout`] and draws the table bottom-right.
//! The canvas keeps the source dimensions; with a deterministic text
//! backend the output is pixel-identical across calls.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use super::config::OverlayConfig;
use super::layout::TableLayout;
use super::table::CaptionTable;
use crate::rendering::TextBackend;

pub const TABLE_FILL: Rgb<u8> = Rgb([255, 255, 255]);
pub const TABLE_INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Rule thickness in pixels.
const RULE_WEIGHT: u32 = 2;

/// Stamp `table` onto a copy of `image` and return the copy.
pub fn composite_table(
    image: &RgbImage,
    table: &CaptionTable,
    config: &OverlayConfig,
    text: &dyn TextBackend,
) -> RgbImage {
    let mut canvas = image.clone();
    let layout = TableLayout::compute(canvas.width(), canvas.height(), table, config, text);
    draw_table(&mut canvas, &layout, table, text);
    canvas
}

fn draw_table(
    canvas: &mut RgbImage,
    layout: &TableLayout,
    table: &CaptionTable,
    text: &dyn TextBackend,
) {
    let ox = layout.origin_x;
    let oy = layout.origin_y;

    draw_filled_rect_mut(
        canvas,
        Rect::at(ox as i32, oy as i32).of_size(layout.width, layout.height),
        TABLE_FILL,
    );

    let mut row_y = oy;
    for (index, ((key, _), row)) in table.rows().zip(layout.rows.iter()).enumerate() {
        if index > 0 {
            // Separator above every row but the first; the border pass
            // owns the outer edges.
            fill_rect(canvas, ox, row_y, layout.width, RULE_WEIGHT);
        }
        fill_rect(canvas, ox + layout.col1_width, row_y, RULE_WEIGHT, row.height);

        let key_x = (ox + layout.padding) as i32;
        let key_y = (row_y + layout.padding) as i32;
        text.draw_text(canvas, TABLE_INK, key_x, key_y, layout.font_size, key);

        let value_x = (ox + layout.col1_width + layout.padding) as i32;
        for (line_index, line) in row.lines.iter().enumerate() {
            let line_y = row_y
                + layout.padding
                + line_index as u32 * (layout.line_advance + layout.line_spacing);
            text.draw_text(
                canvas,
                TABLE_INK,
                value_x,
                line_y as i32,
                layout.font_size,
                line,
            );
        }

        row_y += row.height;
    }

    // Closed outer border, each edge drawn exactly once.
    fill_rect(canvas, ox, oy, layout.width, RULE_WEIGHT);
    let bottom = oy + layout.height.saturating_sub(RULE_WEIGHT);
    fill_rect(canvas, ox, bottom, layout.width, RULE_WEIGHT);
    fill_rect(canvas, ox, oy, RULE_WEIGHT, layout.height);
    let right = ox + layout.width.saturating_sub(RULE_WEIGHT);
    fill_rect(canvas, right, oy, RULE_WEIGHT, layout.height);
}

fn fill_rect(canvas: &mut RgbImage, x: u32, y: u32, width: u32, height: u32) {
    draw_filled_rect_mut(
        canvas,
        Rect::at(x as i32, y as i32).of_size(width, height),
        TABLE_INK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::table::ROW_COUNT;
    use crate::rendering::FixedAdvanceBackend;

    const SOURCE_GRAY: Rgb<u8> = Rgb([120, 130, 140]);

    fn source(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, SOURCE_GRAY)
    }

    fn layout_for(image: &RgbImage, table: &CaptionTable) -> TableLayout {
        TableLayout::compute(
            image.width(),
            image.height(),
            table,
            &OverlayConfig::default(),
            &FixedAdvanceBackend::scaled(),
        )
    }

    #[test]
    fn test_composite_preserves_canvas_dimensions() {
        let image = source(1000, 800);
        let table = CaptionTable::new();
        let backend = FixedAdvanceBackend::scaled();
        let out = composite_table(&image, &table, &OverlayConfig::default(), &backend);

        assert_eq!(out.dimensions(), (1000, 800));
    }

    #[test]
    fn test_composite_does_not_mutate_source() {
        let image = source(640, 480);
        let table = CaptionTable::new();
        let backend = FixedAdvanceBackend::scaled();
        let _ = composite_table(&image, &table, &OverlayConfig::default(), &backend);

        assert!(image.pixels().all(|p| *p == SOURCE_GRAY));
    }

    #[test]
    fn test_composite_is_idempotent_from_same_source() {
        let image = source(1000, 800);
        let mut table = CaptionTable::new();
        table.set_value(0, "배수공사");
        table.set_value(2, "2026-08-05");
        let backend = FixedAdvanceBackend::scaled();
        let config = OverlayConfig::default();

        let first = composite_table(&image, &table, &config, &backend);
        let second = composite_table(&image, &table, &config, &backend);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_pixels_outside_table_untouched() {
        let image = source(1000, 800);
        let table = CaptionTable::new();
        let backend = FixedAdvanceBackend::scaled();
        let out = composite_table(&image, &table, &OverlayConfig::default(), &backend);

        // The table sits bottom-right; the top-left quadrant is source.
        assert_eq!(*out.get_pixel(0, 0), SOURCE_GRAY);
        assert_eq!(*out.get_pixel(400, 300), SOURCE_GRAY);
    }

    #[test]
    fn test_table_fill_and_border_pixels() {
        let image = source(1000, 800);
        let table = CaptionTable::new();
        let backend = FixedAdvanceBackend::scaled();
        let out = composite_table(&image, &table, &OverlayConfig::default(), &backend);
        let layout = layout_for(&image, &table);

        // Corners of the table rect are border ink.
        assert_eq!(*out.get_pixel(layout.origin_x, layout.origin_y), TABLE_INK);
        assert_eq!(
            *out.get_pixel(
                layout.origin_x + layout.width - 1,
                layout.origin_y + layout.height - 1
            ),
            TABLE_INK
        );

        // Just inside the value column of the first row: plain fill
        // (empty values draw no glyphs there).
        let inside_x = layout.origin_x + layout.col1_width + 4;
        let inside_y = layout.origin_y + 4;
        assert_eq!(*out.get_pixel(inside_x, inside_y), TABLE_FILL);
    }

    #[test]
    fn test_column_separator_spans_each_row() {
        let image = source(1000, 800);
        let table = CaptionTable::new();
        let backend = FixedAdvanceBackend::scaled();
        let out = composite_table(&image, &table, &OverlayConfig::default(), &backend);
        let layout = layout_for(&image, &table);

        let sep_x = layout.origin_x + layout.col1_width;
        let mut row_y = layout.origin_y;
        for row in &layout.rows {
            assert_eq!(*out.get_pixel(sep_x, row_y + row.height / 2), TABLE_INK);
            row_y += row.height;
        }
    }

    #[test]
    fn test_row_separators_present_between_rows() {
        let image = source(1000, 800);
        let table = CaptionTable::new();
        let backend = FixedAdvanceBackend::scaled();
        let out = composite_table(&image, &table, &OverlayConfig::default(), &backend);
        let layout = layout_for(&image, &table);

        let mid_x = layout.origin_x + layout.width / 2;
        let mut boundary = layout.origin_y;
        for row in layout.rows.iter().take(ROW_COUNT - 1) {
            boundary += row.height;
            assert_eq!(*out.get_pixel(mid_x, boundary), TABLE_INK);
        }
    }

    #[test]
    fn test_key_glyphs_marked_in_key_column() {
        let image = source(1000, 800);
        let table = CaptionTable::new();
        let backend = FixedAdvanceBackend::scaled();
        let out = composite_table(&image, &table, &OverlayConfig::default(), &backend);
        let layout = layout_for(&image, &table);

        // Fallback tofu boxes start one pixel inside the text origin.
        let glyph_x = layout.origin_x + layout.padding + 1;
        let glyph_y = layout.origin_y + layout.padding + 1;
        assert_eq!(*out.get_pixel(glyph_x, glyph_y), TABLE_INK);
    }

    #[test]
    fn test_oversized_table_clips_without_panic() {
        let image = source(60, 40);
        let mut table = CaptionTable::new();
        table.set_value(4, "이미지보다 큰 표가 되는 아주 긴 설명");
        let backend = FixedAdvanceBackend::new();
        let out = composite_table(&image, &table, &OverlayConfig::default(), &backend);

        assert_eq!(out.dimensions(), (60, 40));
    }
}
