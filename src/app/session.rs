//! Session state for the annotate/export workflow.
//!
//! One `Session` owns the numbered photo roll, the currently selected
//! photo (decoded original plus the last composited result) and the
//! caption table being edited. The compositor itself stays pure; the
//! session is the only mutable place.

use image::RgbImage;
use std::path::{Path, PathBuf};

use super::AppError;
use crate::input::{photo, LoadError};
use crate::overlay::{composite_table, CaptionTable, OverlayConfig};
use crate::rendering::TextBackend;

#[derive(Debug, Clone)]
pub struct PhotoEntry {
    pub path: PathBuf,
    pub number: usize,
}

pub struct Session {
    photos: Vec<PhotoEntry>,
    current: Option<usize>,
    original: Option<RgbImage>,
    composited: Option<RgbImage>,
    pub table: CaptionTable,
    pub config: OverlayConfig,
}

impl Session {
    pub fn new() -> Self {
        Self {
            photos: Vec::new(),
            current: None,
            original: None,
            composited: None,
            table: CaptionTable::new(),
            config: OverlayConfig::default(),
        }
    }

    /// Add a photo to the roll. Numbers are assigned in drop order
    /// starting at 1 and end up as the export filename prefix. The first
    /// photo added is selected (and decoded) immediately.
    pub fn add_photo<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, LoadError> {
        let path = path.as_ref();
        if !crate::input::is_supported_image(path) {
            return Err(LoadError::UnsupportedFormat(path.display().to_string()));
        }

        let number = self.photos.len() + 1;
        self.photos.push(PhotoEntry {
            path: path.to_path_buf(),
            number,
        });

        if self.current.is_none() {
            self.select(number)?;
        }
        Ok(number)
    }

    /// Select a photo by its roll number, decoding it fresh. Any
    /// previous composite belongs to the old photo and is discarded.
    pub fn select(&mut self, number: usize) -> Result<(), LoadError> {
        let index = number
            .checked_sub(1)
            .filter(|i| *i < self.photos.len())
            .ok_or_else(|| LoadError::FileNotFound(PathBuf::from(format!("photo #{number}"))))?;

        let loaded = photo::load(&self.photos[index].path)?;
        self.original = Some(loaded.image);
        self.composited = None;
        self.current = Some(index);
        Ok(())
    }

    /// Roll number of the selected photo; 0 when nothing is selected.
    pub fn current_number(&self) -> usize {
        self.current.map(|i| self.photos[i].number).unwrap_or(0)
    }

    /// Override the roll number stamped into the export filename.
    pub fn renumber_current(&mut self, number: usize) {
        if let Some(index) = self.current {
            self.photos[index].number = number;
        }
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// What the user currently sees: the composite when one exists,
    /// otherwise the untouched original.
    pub fn displayed_image(&self) -> Option<&RgbImage> {
        self.composited.as_ref().or(self.original.as_ref())
    }

    /// Stamp the caption table onto the selected photo. Always works
    /// from the original, so repeated merges never stack tables.
    pub fn merge_table(&mut self, text: &dyn TextBackend) -> Result<(), AppError> {
        let original = self.original.as_ref().ok_or(AppError::NoImage)?;
        self.composited = Some(composite_table(original, &self.table, &self.config, text));
        Ok(())
    }

    /// Merge as soon as every table value is filled; returns whether a
    /// merge ran. Lets editors re-stamp automatically on the last field.
    pub fn auto_merge(&mut self, text: &dyn TextBackend) -> Result<bool, AppError> {
        if self.table.all_values_filled() {
            self.merge_table(text)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
