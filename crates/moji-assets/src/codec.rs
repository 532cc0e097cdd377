//! Emoji bitmap decoding and fitting via the `image` crate

use image::{imageops::FilterType, ImageBuffer, RgbaImage};

use moji_core::{
    error::{AssetError, Result},
    traits::ImageCodec,
    types::{AssetKey, BitmapData},
};

/// Decodes any format `image` was built with (PNG here) and fits with
/// linear (triangle) resampling
#[derive(Debug, Clone, Copy, Default)]
pub struct StdImageCodec;

impl StdImageCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for StdImageCodec {
    fn decode(&self, key: &AssetKey, bytes: &[u8]) -> Result<BitmapData> {
        let decoded = image::load_from_memory(bytes).map_err(|e| AssetError::DecodeFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        let rgba = decoded.to_rgba8();

        Ok(BitmapData {
            width: rgba.width(),
            height: rgba.height(),
            data: rgba.into_raw(),
        })
    }

    fn fit(&self, image: &BitmapData, max_side: u32) -> Result<BitmapData> {
        if image.width <= max_side && image.height <= max_side {
            return Ok(image.clone());
        }

        let source: RgbaImage =
            ImageBuffer::from_raw(image.width, image.height, image.data.clone()).ok_or_else(
                || AssetError::DecodeFailed {
                    key: format!("{}x{} bitmap", image.width, image.height),
                    reason: "buffer too small".into(),
                },
            )?;

        let (width, height) = fit_dimensions(image.width, image.height, max_side);
        let resized = image::imageops::resize(&source, width, height, FilterType::Triangle);

        Ok(BitmapData {
            width,
            height,
            data: resized.into_raw(),
        })
    }
}

/// Largest size with the source aspect ratio that fits in a square box
pub fn fit_dimensions(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let max_side = max_side.max(1);
    if width == 0 || height == 0 {
        return (max_side, max_side);
    }

    let aspect = width as f64 / height as f64;
    let (w, h) = if aspect > 1.0 {
        (max_side as f64, (max_side as f64 / aspect).round())
    } else {
        ((max_side as f64 * aspect).round(), max_side as f64)
    };

    ((w as u32).max(1), (h as u32).max(1))
}
