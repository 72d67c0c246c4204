use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use lazy_static::lazy_static;
use std::path::Path;

/// Font files probed in order until one loads. Malgun Gothic first (the
/// table labels are Korean), then the common CJK installs on Linux and
/// macOS, then Latin-only fonts that at least keep metrics sensible.
const FONT_CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/malgun.ttf",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "C:/Windows/Fonts/arial.ttf",
];

lazy_static! {
    static ref SYSTEM_FONT: Option<FontRef<'static>> = FONT_CANDIDATES
        .iter()
        .find_map(|path| load_font_from_path(path));
}

/// First font from the candidate list that loads, if any.
pub fn get_font() -> Option<FontRef<'static>> {
    SYSTEM_FONT.clone()
}

/// Load a .ttf/.otf/.ttc file. Collections use their first face.
pub fn load_font_from_path<P: AsRef<Path>>(path: P) -> Option<FontRef<'static>> {
    std::fs::read(path).ok().and_then(|bytes| {
        // Leak the bytes to get 'static lifetime
        let leaked_bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        FontRef::try_from_slice(leaked_bytes)
            .or_else(|_| FontRef::try_from_slice_and_index(leaked_bytes, 0))
            .ok()
    })
}

#[derive(Debug, Clone, Default)]
pub struct FontConfig {
    /// Explicit font file; wins over the system candidate list.
    pub custom_font_path: Option<std::path::PathBuf>,
}

pub fn get_font_with_config(config: &FontConfig) -> Option<FontRef<'static>> {
    config
        .custom_font_path
        .as_ref()
        .and_then(load_font_from_path)
        .or_else(get_font)
}

pub fn string_width(font: &FontRef, text: &str, font_size: f32) -> f32 {
    let scaled = font.as_scaled(PxScale::from(font_size));
    text.chars()
        .map(|c| scaled.h_advance(font.glyph_id(c)))
        .sum()
}
