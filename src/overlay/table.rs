//! The fixed caption table stamped onto every photo.
//!
//! Five rows, keys hardcoded in display order. Only the values change.

pub const KEY_PROJECT: &str = "공사명";
pub const KEY_LOCATION: &str = "위치";
pub const KEY_DATE: &str = "날짜";
pub const KEY_WORK_TYPE: &str = "공종";
pub const KEY_NOTE: &str = "내용";

pub const ROW_COUNT: usize = 5;

/// Row keys in display order. Row order in the rendered table is exactly
/// this order.
pub const ROW_KEYS: [&str; ROW_COUNT] = [
    KEY_PROJECT,
    KEY_LOCATION,
    KEY_DATE,
    KEY_WORK_TYPE,
    KEY_NOTE,
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptionTable {
    values: [String; ROW_COUNT],
}

impl CaptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, row: usize) -> &str {
        &self.values[row]
    }

    pub fn set_value(&mut self, row: usize, value: impl Into<String>) {
        self.values[row] = value.into();
    }

    /// Value for a key, or None if the key is not one of the five.
    pub fn value_for(&self, key: &str) -> Option<&str> {
        ROW_KEYS
            .iter()
            .position(|k| *k == key)
            .map(|row| self.values[row].as_str())
    }

    /// Set by key; returns false for unknown keys.
    pub fn set_value_for(&mut self, key: &str, value: impl Into<String>) -> bool {
        match ROW_KEYS.iter().position(|k| *k == key) {
            Some(row) => {
                self.values[row] = value.into();
                true
            }
            None => false,
        }
    }

    /// (key, value) pairs in display order.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &str)> {
        ROW_KEYS
            .iter()
            .zip(self.values.iter())
            .map(|(k, v)| (*k, v.as_str()))
    }

    /// True once every value has non-whitespace content. The session
    /// re-composites automatically at this point.
    pub fn all_values_filled(&self) -> bool {
        self.values.iter().all(|v| !v.trim().is_empty())
    }

    pub fn project(&self) -> &str {
        self.value(0)
    }

    pub fn date(&self) -> &str {
        self.value(2)
    }
}
