//! Fitted emoji bitmap cache
//!
//! A line like "🍕🍕🍕" names the same asset several times at the same box
//! size; the bitmap is loaded, decoded and fitted once and shared after.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::types::{AssetKey, BitmapData};

const DEFAULT_CAPACITY: usize = 64;

/// LRU cache of fitted bitmaps keyed by asset and box size
pub struct EmojiCache {
    entries: Mutex<LruCache<(AssetKey, u32), Arc<BitmapData>>>,
}

impl EmojiCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A zero capacity is bumped to one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: &AssetKey, box_size: u32) -> Option<Arc<BitmapData>> {
        let hit = self.entries.lock().get(&(key.clone(), box_size)).cloned();
        if hit.is_some() {
            log::debug!("Emoji cache hit: {} @ {}px", key, box_size);
        }
        hit
    }

    pub fn insert(&self, key: AssetKey, box_size: u32, bitmap: Arc<BitmapData>) {
        self.entries.lock().put((key, box_size), bitmap);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for EmojiCache {
    fn default() -> Self {
        Self::new()
    }
}
