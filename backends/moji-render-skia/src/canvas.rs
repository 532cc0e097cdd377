//! tiny-skia canvas
//!
//! Glyph outlines come from skrifa at the canvas font size and are filled
//! with the foreground color; emoji bitmaps are premultiplied and blended
//! with source-over.

use std::sync::Arc;

use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::MetadataProvider;
use tiny_skia::{
    ColorU8, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8, Transform,
};

use moji_assets::Font;
use moji_core::{
    error::RenderError, traits::Canvas, types::BitmapData, Color, RenderParams, Result,
};

/// Collects skrifa outline commands into a tiny-skia path
struct SkiaPen {
    builder: PathBuilder,
}

impl OutlinePen for SkiaPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Fixed-size RGBA canvas that draws text in a single font
pub struct SkiaCanvas {
    pixmap: Pixmap,
    font: Arc<Font>,
    size: f32,
    foreground: Color,
}

impl SkiaCanvas {
    /// A canvas of `params.canvas_width x params.canvas_height` filled with
    /// the background color
    pub fn new(font: Arc<Font>, params: &RenderParams) -> Result<Self> {
        params.validate()?;
        skrifa::FontRef::from_index(font.data(), font.face_index())
            .map_err(|_| RenderError::InvalidFont)?;

        let mut pixmap = Pixmap::new(params.canvas_width, params.canvas_height)
            .ok_or(RenderError::PixmapCreationFailed)?;
        let bg = params.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));

        Ok(Self {
            pixmap,
            font,
            size: params.font_size,
            foreground: params.foreground,
        })
    }

    fn font_ref(&self) -> Option<skrifa::FontRef<'_>> {
        skrifa::FontRef::from_index(self.font.data(), self.font.face_index()).ok()
    }
}

impl Canvas for SkiaCanvas {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn draw_char(&mut self, ch: char, x: f32, y: f32) {
        let Some(font) = self.font_ref() else {
            return;
        };
        let Some(glyph_id) = font.charmap().map(ch) else {
            log::warn!("{}", RenderError::GlyphNotFound(ch));
            return;
        };
        let Some(glyph) = font.outline_glyphs().get(glyph_id) else {
            return;
        };

        let size = Size::new(self.size);
        let metrics = font.metrics(size, LocationRef::default());
        // Centre the ascent..descent band on y
        let baseline = y + (metrics.ascent + metrics.descent) / 2.0;

        let mut pen = SkiaPen {
            builder: PathBuilder::new(),
        };
        if let Err(err) = glyph.draw(DrawSettings::unhinted(size, LocationRef::default()), &mut pen)
        {
            log::warn!("Outline extraction failed for {:?}: {}", ch, err);
            return;
        }
        // Whitespace has no contours
        let Some(path) = pen.builder.finish() else {
            return;
        };

        let mut paint = Paint::default();
        let fg = self.foreground;
        paint.set_color_rgba8(fg.r, fg.g, fg.b, fg.a);
        paint.anti_alias = true;

        // Font units point up, pixmap rows point down
        let transform = Transform::from_row(1.0, 0.0, 0.0, -1.0, x, baseline);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, transform, None);
    }

    fn draw_image(&mut self, image: &BitmapData, left: i32, top: i32) {
        let Some(mut sprite) = Pixmap::new(image.width, image.height) else {
            return;
        };
        if image.data.len() < image.expected_len() {
            log::warn!(
                "Bitmap buffer too small for {}x{}, skipping",
                image.width,
                image.height
            );
            return;
        }

        for (dst, src) in sprite.pixels_mut().iter_mut().zip(image.data.chunks_exact(4)) {
            *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
        }

        self.pixmap.draw_pixmap(
            left,
            top,
            sprite.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    fn snapshot(&self) -> BitmapData {
        let data = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|px: &PremultipliedColorU8| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();

        BitmapData {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
            data,
        }
    }
}
