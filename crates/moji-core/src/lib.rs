//! moji core: from mixed text and emoji to a composited canvas
//!
//! A line of text containing emoji travels through three steps:
//!
//! 1. **Segmentation** - emoji sequences collapse into a single placeholder
//!    character each, and their asset keys are collected in order
//! 2. **Layout** - a measurement pass and a render pass turn the normalized
//!    text into positioned draw commands
//! 3. **Compositing** - draw commands are replayed onto a canvas, with emoji
//!    bitmaps loaded, decoded and fitted on the way
//!
//! The font, the emoji bitmaps and the canvas are all reached through the
//! traits in [`traits`], so each backend can be swapped or faked in tests.
//!
//! ```rust,no_run
//! use moji_core::{Pipeline, RenderParams};
//! # use std::sync::Arc;
//! # use moji_core::traits::*;
//! # use moji_core::types::*;
//! # fn parts() -> (Arc<dyn Segmenter>, Arc<dyn TextMetrics>, Arc<dyn AssetStore>, Arc<dyn ImageCodec>) { unimplemented!() }
//! # fn canvas() -> Box<dyn Canvas> { unimplemented!() }
//! let (segmenter, metrics, assets, codec) = parts();
//! let pipeline = Pipeline::builder()
//!     .segmenter(segmenter)
//!     .metrics(metrics)
//!     .assets(assets)
//!     .codec(codec)
//!     .build()?;
//!
//! let mut canvas = canvas();
//! let bitmap = pipeline.render("hello \u{1F600}", canvas.as_mut())?;
//! # Ok::<(), moji_core::MojiError>(())
//! ```

pub mod compositor;
pub mod emoji_cache;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod traits;

pub use compositor::{CompositeStats, Compositor};
pub use emoji_cache::EmojiCache;
pub use error::{MojiError, Result};
pub use layout::{LayoutEngine, Measurement};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use traits::{AssetStore, Canvas, Exporter, ImageCodec, Segmenter, TextMetrics};

/// Reserved code point standing in for one emoji sequence in normalized text.
///
/// U+FFF5 is an unassigned specials code point, outside every emoji, join
/// and modifier range, so it never collides with real input.
pub const PLACEHOLDER: char = '\u{FFF5}';

/// Character whose advance defines the width of one emoji slot.
pub const REFERENCE_CHAR: char = 'M';

/// Text and emoji presentation selectors. Never drawn, never measured.
pub const VARIATION_SELECTORS: [char; 2] = ['\u{FE0E}', '\u{FE0F}'];

/// Whether `ch` is one of the two presentation selectors.
pub fn is_variation_selector(ch: char) -> bool {
    VARIATION_SELECTORS.contains(&ch)
}

/// The data structures that flow between stages
pub mod types {
    use std::fmt;

    use crate::PLACEHOLDER;

    /// Lookup key for one emoji bitmap, e.g. `emoji_u1f1fa_1f1f8.png`
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct AssetKey(String);

    impl AssetKey {
        pub fn new(key: impl Into<String>) -> Self {
            Self(key.into())
        }

        pub fn as_str(&self) -> &str {
            &self.0
        }
    }

    impl fmt::Display for AssetKey {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl AsRef<str> for AssetKey {
        fn as_ref(&self) -> &str {
            &self.0
        }
    }

    /// Text with every emoji sequence replaced by [`PLACEHOLDER`]
    ///
    /// `keys[n]` belongs to the n-th placeholder, counting from the left.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct NormalizedDocument {
        pub text: String,
        pub keys: Vec<AssetKey>,
    }

    impl NormalizedDocument {
        /// Number of placeholder characters in the text
        pub fn placeholder_count(&self) -> usize {
            self.text.chars().filter(|&ch| ch == PLACEHOLDER).count()
        }

        /// One key per placeholder, no more, no less
        pub fn is_consistent(&self) -> bool {
            self.placeholder_count() == self.keys.len()
        }

        /// The text with the placeholder swapped for `replacement`
        pub fn text_with(&self, replacement: char) -> String {
            self.text
                .chars()
                .map(|ch| if ch == PLACEHOLDER { replacement } else { ch })
                .collect()
        }
    }

    /// One instruction for the compositor
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCommand {
        /// A literal character, left edge and vertical centre at `(x, y)`
        Text { ch: char, x: f32, y: f32 },
        /// An emoji bitmap fitted into `size x size`, right edge and
        /// vertical centre at `(x, y)`
        Image {
            key: AssetKey,
            x: f32,
            y: f32,
            size: f32,
        },
    }

    /// Positioned draw commands for one line of normalized text
    #[derive(Debug, Clone, PartialEq)]
    pub struct Layout {
        /// Where the first command starts
        pub start_x: f32,
        /// Vertical centre shared by every command
        pub y: f32,
        /// Width measured by the measurement pass
        pub total_width: f32,
        /// Advance of one reference character; also the emoji box size
        pub unit_width: f32,
        /// Cursor position after the last command
        pub end_x: f32,
        pub commands: Vec<DrawCommand>,
    }

    impl Layout {
        /// Width actually walked by the render pass
        pub fn rendered_width(&self) -> f32 {
            self.end_x - self.start_x
        }

        pub fn image_count(&self) -> usize {
            self.commands
                .iter()
                .filter(|cmd| matches!(cmd, DrawCommand::Image { .. }))
                .count()
        }
    }

    /// Straight (non-premultiplied) RGBA8 pixels
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub data: Vec<u8>,
    }

    impl BitmapData {
        /// Byte count an RGBA8 buffer of this size must have
        pub fn expected_len(&self) -> usize {
            self.width as usize * self.height as usize * 4
        }

        pub fn is_empty(&self) -> bool {
            self.width == 0 || self.height == 0
        }

        /// RGBA of the pixel at `(x, y)`, if inside the bitmap
        pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
            if x >= self.width || y >= self.height {
                return None;
            }
            let idx = (y as usize * self.width as usize + x as usize) * 4;
            let px = self.data.get(idx..idx + 4)?;
            Some([px[0], px[1], px[2], px[3]])
        }
    }
}

/// Simple RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::rgba(255, 255, 255, 255)
    }

    /// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`
    pub fn from_hex(color: &str) -> Result<Self> {
        let hex = color.trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(MojiError::ConfigError(format!(
                "Color must be in RRGGBB or RRGGBBAA format, got {:?}",
                color
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| MojiError::ConfigError(format!("Invalid color: {:?}", color)))
        };

        let a = if hex.len() == 8 { channel(6..8)? } else { 255 };
        Ok(Self::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, a))
    }
}

/// How a render should look
///
/// The defaults reproduce the classic output: a 512x512 black square with
/// white text at 50px.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Font size in pixels
    pub font_size: f32,
    pub foreground: Color,
    pub background: Color,
}

impl RenderParams {
    /// Reject canvases and font sizes no backend can honour
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(error::RenderError::InvalidDimensions {
                width: self.canvas_width,
                height: self.canvas_height,
            }
            .into());
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(MojiError::ConfigError(format!(
                "Font size must be positive, got {}",
                self.font_size
            )));
        }
        Ok(())
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            canvas_width: 512,
            canvas_height: 512,
            font_size: 50.0,
            foreground: Color::white(),
            background: Color::black(),
        }
    }
}
