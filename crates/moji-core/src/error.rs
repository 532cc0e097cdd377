//! Error types for moji

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MojiError>;

/// Main error type for moji
///
/// Only fatal conditions travel through this type. A missing emoji asset or
/// a malformed emoji sequence is logged and skipped where it happens.
#[derive(Debug, Error)]
pub enum MojiError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Rendering failed: {0}")]
    RenderingFailed(#[from] RenderError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Font is missing required table: {0}")]
    MissingTable(&'static str),
}

/// Emoji asset errors
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode {key}: {reason}")]
    DecodeFailed { key: String, reason: String },

    #[error("Asset {0} decoded to an empty image")]
    EmptyImage(String),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapCreationFailed,

    #[error("Glyph not found for {0:?}")]
    GlyphNotFound(char),

    #[error("Invalid font")]
    InvalidFont,
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}
