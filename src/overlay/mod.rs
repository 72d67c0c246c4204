pub mod compositor;
pub mod config;
pub mod layout;
pub mod table;

pub use compositor::{composite_table, TABLE_FILL, TABLE_INK};
pub use config::OverlayConfig;
pub use layout::{wrap_to_width, RowLayout, TableLayout};
pub use table::{CaptionTable, KEY_DATE, KEY_LOCATION, KEY_NOTE, KEY_PROJECT, KEY_WORK_TYPE};
