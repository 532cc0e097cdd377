//! Text metrics from skrifa

use std::sync::Arc;

use skrifa::instance::{LocationRef, Size};
use skrifa::{GlyphId, MetadataProvider};

use moji_assets::Font;
use moji_core::{error::RenderError, traits::TextMetrics, Result};

/// Advance widths of one font at one pixel size
///
/// Text is measured as the plain sum of glyph advances: no shaping, no
/// kerning. A character missing from the font measures zero.
pub struct SkrifaMetrics {
    font: Arc<Font>,
    size: f32,
}

impl SkrifaMetrics {
    pub fn new(font: Arc<Font>, font_size: f32) -> Result<Self> {
        skrifa::FontRef::from_index(font.data(), font.face_index())
            .map_err(|_| RenderError::InvalidFont)?;
        Ok(Self {
            font,
            size: font_size,
        })
    }

    pub fn font_size(&self) -> f32 {
        self.size
    }

    fn font_ref(&self) -> Option<skrifa::FontRef<'_>> {
        skrifa::FontRef::from_index(self.font.data(), self.font.face_index()).ok()
    }

    /// Glyph for `ch`, if the font maps it
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.font_ref()?.charmap().map(ch)
    }

    /// Scaled ascent and descent (descent is negative)
    pub fn vertical_metrics(&self) -> (f32, f32) {
        self.font_ref()
            .map(|font| {
                let metrics = font.metrics(Size::new(self.size), LocationRef::default());
                (metrics.ascent, metrics.descent)
            })
            .unwrap_or((self.size, 0.0))
    }
}

impl TextMetrics for SkrifaMetrics {
    fn measure(&self, text: &str) -> f32 {
        let Some(font) = self.font_ref() else {
            return 0.0;
        };
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(Size::new(self.size), LocationRef::default());

        text.chars()
            .filter_map(|ch| charmap.map(ch))
            .filter_map(|gid| glyph_metrics.advance_width(gid))
            .sum()
    }
}
