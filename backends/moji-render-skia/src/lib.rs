//! Skia backend for moji
//!
//! [`SkiaCanvas`] rasterises glyph outlines and composites emoji bitmaps
//! with tiny-skia. [`SkrifaMetrics`] measures the same font at the same
//! size, which is what keeps the layout's two passes in agreement.
//!
//! ```ignore
//! let font = Arc::new(Font::from_file("SecularOne.ttf")?);
//! let params = RenderParams::default();
//! let metrics = SkrifaMetrics::new(font.clone(), params.font_size)?;
//! let mut canvas = SkiaCanvas::new(font, &params)?;
//! ```

mod canvas;
mod metrics;

pub use canvas::SkiaCanvas;
pub use metrics::SkrifaMetrics;
