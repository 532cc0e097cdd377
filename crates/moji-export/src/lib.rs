//! Export module for moji
//!
//! Turns a finished canvas snapshot into bytes, and bytes into files.

use std::fs;
use std::path::Path;

use moji_core::error::{ExportError, Result};

pub mod png;

pub use png::{encode_bitmap_to_png, PngExporter};

/// Write encoded output to `path`, creating missing parent directories
pub fn write_output(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| ExportError::WriteFailed(format!("{}: {}", parent.display(), e)))?;
    }
    fs::write(path, bytes)
        .map_err(|e| ExportError::WriteFailed(format!("{}: {}", path.display(), e)))?;
    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
