pub mod backend;
pub mod font;

pub use backend::{FixedAdvanceBackend, GlyphBackend, TextBackend, FALLBACK_FONT_SIZE};
pub use font::{get_font, get_font_with_config, load_font_from_path, FontConfig};
