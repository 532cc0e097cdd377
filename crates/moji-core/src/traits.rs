//! The contracts between the pipeline and its collaborators
//!
//! - [`Segmenter`] - Collapses emoji sequences into placeholders
//! - [`TextMetrics`] - Measures text in the one font used for the render
//! - [`Canvas`] - The raster surface glyphs and bitmaps land on
//! - [`AssetStore`] - Where encoded emoji bitmaps live
//! - [`ImageCodec`] - Decodes and fits those bitmaps
//! - [`Exporter`] - Encodes the finished canvas

use crate::{
    error::Result,
    types::{AssetKey, BitmapData, NormalizedDocument},
};

/// Turns raw text into a [`NormalizedDocument`]
///
/// Segmentation never fails: anything that is not a recognisable emoji
/// sequence is kept as literal text.
pub trait Segmenter: Send + Sync {
    /// Used for debugging and logging
    fn name(&self) -> &'static str;

    fn segment(&self, text: &str) -> NormalizedDocument;
}

/// Text measurement for a single font face at a fixed size
///
/// Both layout passes measure through the same instance, which keeps the
/// width of the reference character identical between them.
pub trait TextMetrics: Send + Sync {
    /// Horizontal advance of `text` in pixels
    fn measure(&self, text: &str) -> f32;

    /// Advance of a single character
    fn measure_char(&self, ch: char) -> f32 {
        let mut buf = [0u8; 4];
        self.measure(ch.encode_utf8(&mut buf))
    }
}

/// A fixed-size raster surface
pub trait Canvas {
    /// Width and height in pixels
    fn size(&self) -> (u32, u32);

    /// Draw one character with its left edge and vertical centre at `(x, y)`
    fn draw_char(&mut self, ch: char, x: f32, y: f32);

    /// Blend a straight-alpha RGBA bitmap with its top-left corner at
    /// `(left, top)`; parts outside the canvas are clipped
    fn draw_image(&mut self, image: &BitmapData, left: i32, top: i32);

    /// Copy of the current pixels
    fn snapshot(&self) -> BitmapData;
}

/// Read-only lookup from [`AssetKey`] to encoded image bytes
pub trait AssetStore: Send + Sync {
    fn name(&self) -> &'static str;

    /// `Ok(None)` when the store has no asset under `key`
    fn load(&self, key: &AssetKey) -> Result<Option<Vec<u8>>>;
}

/// Image decoding and resizing
pub trait ImageCodec: Send + Sync {
    /// Decode encoded bytes into straight RGBA8
    fn decode(&self, key: &AssetKey, bytes: &[u8]) -> Result<BitmapData>;

    /// Scale `image` to fit within `max_side x max_side`, keeping its
    /// aspect ratio
    fn fit(&self, image: &BitmapData, max_side: u32) -> Result<BitmapData>;
}

/// Encodes the finished canvas
pub trait Exporter: Send + Sync {
    fn name(&self) -> &'static str;

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>>;

    /// File extension for the encoded output
    fn extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;
}
