//! Replays a [`Layout`] onto a [`Canvas`]
//!
//! Text commands go straight to the canvas. Image commands fetch their
//! asset, decode it and fit it into the emoji box before blending. Any
//! failure along that path skips the one emoji and nothing else; the slot
//! was already reserved by the layout, so later glyphs stay where they are.

use std::sync::Arc;

use crate::{
    emoji_cache::EmojiCache,
    error::{AssetError, Result},
    traits::{AssetStore, Canvas, ImageCodec},
    types::{AssetKey, BitmapData, DrawCommand, Layout},
};

/// What happened while compositing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositeStats {
    pub glyphs: usize,
    pub images: usize,
    pub skipped_images: usize,
}

pub struct Compositor<'a> {
    assets: &'a dyn AssetStore,
    codec: &'a dyn ImageCodec,
    cache: Option<&'a EmojiCache>,
}

impl<'a> Compositor<'a> {
    pub fn new(assets: &'a dyn AssetStore, codec: &'a dyn ImageCodec) -> Self {
        Self {
            assets,
            codec,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: &'a EmojiCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn paint(&self, layout: &Layout, canvas: &mut dyn Canvas) -> CompositeStats {
        let mut stats = CompositeStats::default();

        for command in &layout.commands {
            match command {
                DrawCommand::Text { ch, x, y } => {
                    canvas.draw_char(*ch, *x, *y);
                    stats.glyphs += 1;
                },
                DrawCommand::Image { key, x, y, size } => {
                    // Box size truncates like an integer pixel count would
                    let box_size = (*size as u32).max(1);
                    match self.fitted(key, box_size) {
                        Ok(image) => {
                            let left = *x as i32 - image.width as i32;
                            let top = (*y - image.height as f32 / 2.0).round() as i32;
                            canvas.draw_image(&image, left, top);
                            stats.images += 1;
                        },
                        Err(err) => {
                            log::warn!("Skipping emoji {}: {}", key, err);
                            stats.skipped_images += 1;
                        },
                    }
                },
            }
        }

        log::debug!(
            "Composited {} glyphs, {} images ({} skipped)",
            stats.glyphs,
            stats.images,
            stats.skipped_images
        );
        stats
    }

    fn fitted(&self, key: &AssetKey, box_size: u32) -> Result<Arc<BitmapData>> {
        if let Some(hit) = self.cache.and_then(|cache| cache.get(key, box_size)) {
            return Ok(hit);
        }

        let bytes = self
            .assets
            .load(key)?
            .ok_or_else(|| AssetError::NotFound(key.to_string()))?;
        let decoded = self.codec.decode(key, &bytes)?;
        if decoded.is_empty() {
            return Err(AssetError::EmptyImage(key.to_string()).into());
        }
        let fitted = Arc::new(self.codec.fit(&decoded, box_size)?);

        if let Some(cache) = self.cache {
            cache.insert(key.clone(), box_size, fitted.clone());
        }
        Ok(fitted)
    }
}
