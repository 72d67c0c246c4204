//! Text measurement and rasterization backends
//!
//! The overlay layout is driven entirely by a `TextBackend`: it asks the
//! backend how wide a string renders at a given size and later hands it
//! the canvas to draw into. Two implementations exist — the production
//! glyph backend over a loaded font, and a fixed-advance fallback used
//! when no usable font file can be found on the machine. The fallback
//! keeps the layout deterministic but pins the font size and renders
//! missing-glyph boxes instead of text.

use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::font::string_width;

/// Font size used when no font file is available. The layout scales the
/// size from the image otherwise; without real metrics the scaled value
/// would be meaningless, so the fallback pins it.
pub const FALLBACK_FONT_SIZE: f32 = 20.0;

/// Measurement + rasterization capability consumed by the compositor.
///
/// Implementations must be deterministic: the same text at the same size
/// always measures the same width, so a layout is reproducible.
pub trait TextBackend {
    /// Rendered pixel width of `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f32) -> f32;

    /// Draw `text` with its top-left corner at (x, y).
    fn draw_text(
        &self,
        canvas: &mut RgbImage,
        color: Rgb<u8>,
        x: i32,
        y: i32,
        font_size: f32,
        text: &str,
    );

    /// The size this backend will actually render at, given the size the
    /// layout computed from the image. Backends with real metrics keep
    /// the request.
    fn preferred_font_size(&self, requested: f32) -> f32 {
        requested
    }
}

/// Production backend: ab_glyph metrics, imageproc glyph rasterization.
pub struct GlyphBackend {
    font: FontRef<'static>,
}

impl GlyphBackend {
    pub fn new(font: FontRef<'static>) -> Self {
        Self { font }
    }
}

impl TextBackend for GlyphBackend {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        string_width(&self.font, text, font_size)
    }

    fn draw_text(
        &self,
        canvas: &mut RgbImage,
        color: Rgb<u8>,
        x: i32,
        y: i32,
        font_size: f32,
        text: &str,
    ) {
        draw_text_mut(
            canvas,
            color,
            x,
            y,
            PxScale::from(font_size),
            &self.font,
            text,
        );
    }
}

/// Fallback backend for machines with none of the candidate fonts.
///
/// Widths come from terminal-style display width (CJK counts two cells)
/// times half the font size, which tracks real CJK proportions closely
/// enough for the table not to collapse. Glyphs are drawn as hollow
/// boxes, one per non-space grapheme.
pub struct FixedAdvanceBackend {
    font_size_override: Option<f32>,
}

impl FixedAdvanceBackend {
    /// The degraded-rendering configuration: size pinned to
    /// [`FALLBACK_FONT_SIZE`].
    pub fn new() -> Self {
        Self {
            font_size_override: Some(FALLBACK_FONT_SIZE),
        }
    }

    /// Keeps whatever size the layout computes. Used where the caller
    /// wants deterministic metrics but image-scaled geometry.
    pub fn scaled() -> Self {
        Self {
            font_size_override: None,
        }
    }

    fn advance(&self, text: &str, font_size: f32) -> f32 {
        UnicodeWidthStr::width(text) as f32 * font_size * 0.5
    }
}

impl Default for FixedAdvanceBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBackend for FixedAdvanceBackend {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        self.advance(text, font_size)
    }

    fn draw_text(
        &self,
        canvas: &mut RgbImage,
        color: Rgb<u8>,
        x: i32,
        y: i32,
        font_size: f32,
        text: &str,
    ) {
        let mut cursor = x as f32;
        let box_height = (font_size - 2.0).max(1.0) as u32;
        for grapheme in text.graphemes(true) {
            let advance = self.advance(grapheme, font_size);
            if grapheme.trim().is_empty() {
                cursor += advance;
                continue;
            }
            let box_width = (advance - 2.0).max(1.0) as u32;
            draw_hollow_rect_mut(
                canvas,
                Rect::at(cursor as i32 + 1, y + 1).of_size(box_width, box_height),
                color,
            );
            cursor += advance;
        }
    }

    fn preferred_font_size(&self, requested: f32) -> f32 {
        self.font_size_override.unwrap_or(requested)
    }
}
