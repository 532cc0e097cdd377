//! moji: inline emoji text rendering
//!
//! Text goes through four stages:
//! 1. Segmentation: emoji sequences become placeholders plus asset keys
//! 2. Layout: measure the line, then place glyphs and emoji boxes
//! 3. Compositing: draw glyphs, decode and fit emoji bitmaps onto the canvas
//! 4. Export: encode the canvas
//!
//! # Example
//!
//! ```ignore
//! use moji::prelude::*;
//!
//! let pairs = Arc::new(ModifierPairTable::from_path("data/sequences.json")?);
//! let font = Arc::new(Font::from_file("fonts/Roboto-Regular.ttf")?);
//! let params = RenderParams::default();
//!
//! let pipeline = moji::png_pipeline(pairs, font.clone(), "data/emojis", params.font_size)?;
//! let mut canvas = SkiaCanvas::new(font, &params)?;
//! let png = pipeline.process("hello 🍕", &mut canvas)?;
//! ```
//!
//! # Feature Flags
//!
//! - `render-skia`: skrifa metrics and the tiny-skia canvas (default)
//! - `export-png`: PNG exporter (default)

pub use moji_core::{error, traits, types, Color, Pipeline, RenderParams};

pub use moji_assets as assets;
pub use moji_unicode as unicode;

#[cfg(feature = "render-skia")]
pub use moji_render_skia as render_skia;

#[cfg(feature = "export-png")]
pub use moji_export as export;

/// Common imports for typical usage
pub mod prelude {
    pub use std::sync::Arc;

    pub use moji_assets::{DirAssetStore, Font, MemoryAssetStore, StdImageCodec};
    pub use moji_core::{
        error::{MojiError, Result},
        traits::{AssetStore, Canvas, Exporter, ImageCodec, Segmenter, TextMetrics},
        types::{AssetKey, BitmapData, DrawCommand, Layout, NormalizedDocument},
        Color, Pipeline, RenderParams,
    };
    pub use moji_unicode::{EmojiSegmenter, ModifierPairTable};

    #[cfg(feature = "render-skia")]
    pub use moji_render_skia::{SkiaCanvas, SkrifaMetrics};

    #[cfg(feature = "export-png")]
    pub use moji_export::PngExporter;
}

/// The stock pipeline: emoji segmenter, skrifa metrics, directory assets,
/// `image` decoding and PNG output
#[cfg(all(feature = "render-skia", feature = "export-png"))]
pub fn png_pipeline(
    pairs: std::sync::Arc<unicode::ModifierPairTable>,
    font: std::sync::Arc<assets::Font>,
    emoji_dir: impl Into<std::path::PathBuf>,
    font_size: f32,
) -> error::Result<Pipeline> {
    use std::sync::Arc;

    Pipeline::builder()
        .segmenter(Arc::new(unicode::EmojiSegmenter::new(pairs)))
        .metrics(Arc::new(render_skia::SkrifaMetrics::new(font, font_size)?))
        .assets(Arc::new(assets::DirAssetStore::new(emoji_dir)))
        .codec(Arc::new(assets::StdImageCodec::new()))
        .exporter(Arc::new(export::PngExporter::new()))
        .build()
}
