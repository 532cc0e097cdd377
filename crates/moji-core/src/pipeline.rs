//! The engine that drives text from segmentation to pixels

// this_file: crates/moji-core/src/pipeline.rs

use std::sync::Arc;
use std::time::Instant;

use crate::{
    compositor::{CompositeStats, Compositor},
    emoji_cache::EmojiCache,
    error::{MojiError, Result},
    layout::LayoutEngine,
    traits::{AssetStore, Canvas, Exporter, ImageCodec, Segmenter, TextMetrics},
    types::{BitmapData, Layout, NormalizedDocument},
};

/// Segment → Layout → Composite → (Export)
///
/// ```ignore
/// let pipeline = Pipeline::builder()
///     .segmenter(Arc::new(EmojiSegmenter::new(pairs)))
///     .metrics(Arc::new(SkrifaMetrics::new(font.clone(), 50.0)?))
///     .assets(Arc::new(DirAssetStore::new("data/emojis")))
///     .codec(Arc::new(StdImageCodec::new()))
///     .exporter(Arc::new(PngExporter::new()))
///     .build()?;
///
/// let png = pipeline.process("hello 🍕", &mut canvas)?;
/// ```
pub struct Pipeline {
    segmenter: Arc<dyn Segmenter>,
    metrics: Arc<dyn TextMetrics>,
    assets: Arc<dyn AssetStore>,
    codec: Arc<dyn ImageCodec>,
    exporter: Option<Arc<dyn Exporter>>,
    cache: Option<EmojiCache>,
}

impl Pipeline {
    /// Start building a new pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Segmentation only
    pub fn segment(&self, text: &str) -> NormalizedDocument {
        let doc = self.segmenter.segment(text);
        debug_assert!(doc.is_consistent(), "placeholder count must match key count");
        doc
    }

    /// Segmentation and both layout passes, without touching a canvas
    pub fn layout(&self, text: &str, canvas_width: u32, canvas_height: u32) -> Layout {
        let doc = self.segment(text);
        LayoutEngine::new(self.metrics.as_ref()).layout(&doc, canvas_width, canvas_height)
    }

    /// Lay out `text` for `canvas` and paint it
    pub fn composite(&self, text: &str, canvas: &mut dyn Canvas) -> CompositeStats {
        let (width, height) = canvas.size();
        let layout = self.layout(text, width, height);

        let compositor = Compositor::new(self.assets.as_ref(), self.codec.as_ref());
        let compositor = match &self.cache {
            Some(cache) => compositor.with_cache(cache),
            None => compositor,
        };
        compositor.paint(&layout, canvas)
    }

    /// Paint `text` onto `canvas` and return the resulting pixels
    pub fn render(&self, text: &str, canvas: &mut dyn Canvas) -> Result<BitmapData> {
        let started = Instant::now();
        let stats = self.composite(text, canvas);
        log::info!(
            "Rendered {} glyphs and {} emoji in {:?}",
            stats.glyphs,
            stats.images,
            started.elapsed()
        );
        Ok(canvas.snapshot())
    }

    /// Render and encode with the configured exporter
    pub fn process(&self, text: &str, canvas: &mut dyn Canvas) -> Result<Vec<u8>> {
        let exporter = self
            .exporter
            .as_ref()
            .ok_or_else(|| MojiError::ConfigError("No exporter configured".into()))?;
        let bitmap = self.render(text, canvas)?;
        exporter.export(&bitmap)
    }

    pub fn exporter(&self) -> Option<&Arc<dyn Exporter>> {
        self.exporter.as_ref()
    }

    /// Drop every cached emoji bitmap
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

/// Build pipelines piece by piece
pub struct PipelineBuilder {
    segmenter: Option<Arc<dyn Segmenter>>,
    metrics: Option<Arc<dyn TextMetrics>>,
    assets: Option<Arc<dyn AssetStore>>,
    codec: Option<Arc<dyn ImageCodec>>,
    exporter: Option<Arc<dyn Exporter>>,
    cache_capacity: Option<usize>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            segmenter: None,
            metrics: None,
            assets: None,
            codec: None,
            exporter: None,
            cache_capacity: Some(64),
        }
    }

    /// Who finds the emoji sequences
    pub fn segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    /// Who measures the text
    pub fn metrics(mut self, metrics: Arc<dyn TextMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Where emoji bitmaps come from
    pub fn assets(mut self, assets: Arc<dyn AssetStore>) -> Self {
        self.assets = Some(assets);
        self
    }

    /// Who decodes and fits emoji bitmaps
    pub fn codec(mut self, codec: Arc<dyn ImageCodec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Who encodes the finished canvas (optional)
    pub fn exporter(mut self, exporter: Arc<dyn Exporter>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    /// Capacity of the fitted-bitmap cache; `None` disables it
    pub fn emoji_cache(mut self, capacity: Option<usize>) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn build(self) -> Result<Pipeline> {
        Ok(Pipeline {
            segmenter: self
                .segmenter
                .ok_or_else(|| MojiError::ConfigError("No segmenter configured".into()))?,
            metrics: self
                .metrics
                .ok_or_else(|| MojiError::ConfigError("No text metrics configured".into()))?,
            assets: self
                .assets
                .ok_or_else(|| MojiError::ConfigError("No asset store configured".into()))?,
            codec: self
                .codec
                .ok_or_else(|| MojiError::ConfigError("No image codec configured".into()))?,
            exporter: self.exporter,
            cache: self.cache_capacity.map(EmojiCache::with_capacity),
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
