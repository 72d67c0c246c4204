//! End-to-end checks of the overlay pipeline against a synthetic photo.

use image::{Rgb, RgbImage};
use sitestamp::overlay::{
    composite_table, wrap_to_width, CaptionTable, OverlayConfig, TableLayout, TABLE_FILL,
    TABLE_INK,
};
use sitestamp::rendering::{FixedAdvanceBackend, TextBackend};

const PHOTO_GRAY: Rgb<u8> = Rgb([85, 95, 105]);

#[test]
fn empty_table_on_large_photo() {
    let photo = RgbImage::from_pixel(1000, 800, PHOTO_GRAY);
    let table = CaptionTable::new();
    let config = OverlayConfig::default();
    let backend = FixedAdvanceBackend::scaled();

    let out = composite_table(&photo, &table, &config, &backend);
    assert_eq!(out.dimensions(), (1000, 800), "Canvas never resizes");

    let layout = TableLayout::compute(1000, 800, &table, &config, &backend);

    // Five minimal rows, anchored bottom-right one padding from the edge.
    assert_eq!(layout.rows.len(), 5);
    assert_eq!(layout.height, 5 * (layout.line_advance + 2 * layout.padding));
    assert_eq!(layout.origin_x + layout.width + layout.padding, 1000);
    assert_eq!(layout.origin_y + layout.height + layout.padding, 800);

    // The first key (공사명) leaves glyph marks in the key column; the
    // value cells stay blank fill.
    let key_mark = *out.get_pixel(
        layout.origin_x + layout.padding + 1,
        layout.origin_y + layout.padding + 1,
    );
    assert_eq!(key_mark, TABLE_INK);
    let value_cell = *out.get_pixel(
        layout.origin_x + layout.col1_width + layout.padding + 4,
        layout.origin_y + layout.padding + 4,
    );
    assert_eq!(value_cell, TABLE_FILL);

    // Photo untouched outside the table rect.
    assert_eq!(*out.get_pixel(10, 10), PHOTO_GRAY);
}

#[test]
fn long_value_wraps_and_grows_its_row() {
    let photo = RgbImage::from_pixel(1000, 800, PHOTO_GRAY);
    let config = OverlayConfig::default();
    let backend = FixedAdvanceBackend::scaled();

    let mut table = CaptionTable::new();
    table.set_value(4, "터파기 후 기초 콘크리트 타설 및 양생 상태 확인 작업 전경");

    let layout = TableLayout::compute(1000, 800, &table, &config, &backend);
    let note_row = &layout.rows[4];
    assert!(
        note_row.lines.len() >= 2,
        "Value wider than the column must wrap: got {:?}",
        note_row.lines
    );
    let lines = note_row.lines.len() as u32;
    assert_eq!(
        note_row.height,
        lines * layout.line_advance + (lines - 1) * layout.line_spacing + 2 * layout.padding
    );

    // Rendering the wrapped table still fits the canvas.
    let out = composite_table(&photo, &table, &config, &backend);
    assert_eq!(out.dimensions(), (1000, 800));
}

#[test]
fn wrap_round_trip_over_assorted_widths() {
    let backend = FixedAdvanceBackend::scaled();
    let samples = [
        "",
        "가",
        "배수로 정비",
        "mixed 한글 and latin 1234",
        "아주 길게 이어지는 현장 설명 문장이 줄바꿈을 여러 번 일으킵니다",
    ];
    for sample in samples {
        for width in [10.0, 48.0, 120.0, 500.0] {
            let lines = wrap_to_width(sample, width, 16.0, &backend);
            assert_eq!(
                lines.concat(),
                sample,
                "width {width}: wrapped lines must concatenate to the input"
            );
            for line in &lines {
                let fits = backend.measure(line, 16.0) <= width
                    || line.chars().count() == 1
                    || lines.len() == 1;
                assert!(fits, "width {width}: line {line:?} overflows");
            }
        }
    }
}

#[test]
fn composite_is_deterministic_end_to_end() {
    let photo = RgbImage::from_pixel(640, 480, PHOTO_GRAY);
    let config = OverlayConfig::default();
    let backend = FixedAdvanceBackend::scaled();

    let mut table = CaptionTable::new();
    table.set_value(0, "옹벽 설치공사");
    table.set_value(1, "부산 사하구");
    table.set_value(2, "2026-08-05");
    table.set_value(3, "철근콘크리트");
    table.set_value(4, "1단 타설 완료");

    let first = composite_table(&photo, &table, &config, &backend);
    let second = composite_table(&photo, &table, &config, &backend);
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn fallback_backend_composites_small_photos_without_panic() {
    // Pinned 20px metrics against a photo smaller than the table.
    let photo = RgbImage::from_pixel(120, 90, PHOTO_GRAY);
    let mut table = CaptionTable::new();
    table.set_value(4, "사진보다 넓은 표가 만들어지는 경우");
    let backend = FixedAdvanceBackend::new();

    let out = composite_table(&photo, &table, &OverlayConfig::default(), &backend);
    assert_eq!(out.dimensions(), (120, 90));

    let layout = TableLayout::compute(120, 90, &table, &OverlayConfig::default(), &backend);
    assert!(layout.origin_x + layout.width <= 120);
    assert_eq!(layout.font_size, 20.0);
}
