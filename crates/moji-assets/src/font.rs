//! Font loading
//!
//! Fonts keep their raw bytes and are re-parsed on demand by whoever needs
//! outlines or metrics, so a `Font` is cheap to share behind an `Arc`.

use std::fs;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};

use moji_core::error::{FontLoadError, Result};

/// A validated font face held in memory
#[derive(Debug, Clone)]
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let data = fs::read(path.as_ref())
            .map_err(|_| FontLoadError::FileNotFound(path.as_ref().display().to_string()))?;

        Self::from_data_index(data, face_index)
    }

    /// Wraps font bytes, e.g. from `include_bytes!`
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        // Without a head table there is no em square to scale by
        font_ref
            .head()
            .map_err(|_| FontLoadError::MissingTable("head"))?;

        log::debug!("Loaded font: {} bytes, face {}", data.len(), face_index);

        Ok(Font { data, face_index })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Face index for TTC collections (0 for single fonts)
    pub fn face_index(&self) -> u32 {
        self.face_index
    }
}
