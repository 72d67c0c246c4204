//! Export rules: filename convention and required-field validation.
//!
//! Exported files are named `{number}_{날짜}_{공사명}.jpg` (the number
//! prefix is dropped for unnumbered photos) with filesystem-invalid
//! characters stripped. Export refuses to run while 공사명 or 날짜 is
//! blank, and writes nothing in that case.

use std::path::{Path, PathBuf};

use super::{AppError, Session};
use crate::overlay::{KEY_DATE, KEY_PROJECT};

/// Characters stripped from composed filenames.
pub const INVALID_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

pub fn sanitize_filename(raw: &str) -> String {
    raw.chars()
        .filter(|c| !INVALID_FILENAME_CHARS.contains(c))
        .collect()
}

/// Compose the export filename. `number` 0 means unnumbered.
pub fn export_filename(number: usize, date: &str, name: &str) -> String {
    let prefix = if number > 0 {
        format!("{number}_")
    } else {
        String::new()
    };
    sanitize_filename(&format!("{prefix}{date}_{name}.jpg"))
}

/// Write the session's displayed image into `dir` under the composed
/// name. Returns the path written.
pub fn export_session(session: &Session, dir: &Path) -> Result<PathBuf, AppError> {
    let image = session.displayed_image().ok_or(AppError::NoImage)?;

    let name = session.table.project();
    let date = session.table.date();
    if name.trim().is_empty() {
        return Err(AppError::MissingField(KEY_PROJECT));
    }
    if date.trim().is_empty() {
        return Err(AppError::MissingField(KEY_DATE));
    }

    let path = dir.join(export_filename(session.current_number(), date, name));
    image.save(&path)?;
    Ok(path)
}
