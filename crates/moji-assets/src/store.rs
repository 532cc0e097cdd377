//! Emoji asset stores
//!
//! Assets are looked up by [`AssetKey`] only. A miss is `Ok(None)` so the
//! compositor can log it and move on.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use moji_core::{error::Result, traits::AssetStore, types::AssetKey};

/// Assets stored as `<root>/<asset key>` files
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &AssetKey) -> PathBuf {
        self.root.join(key.as_str())
    }
}

impl AssetStore for DirAssetStore {
    fn name(&self) -> &'static str {
        "dir"
    }

    fn load(&self, key: &AssetKey) -> Result<Option<Vec<u8>>> {
        // Keys are flat file names; anything path-like cannot name an asset
        if key.as_str().contains(['/', '\\']) || key.as_str().starts_with('.') {
            log::warn!("Refusing path-like asset key {:?}", key.as_str());
            return Ok(None);
        }

        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No asset at {}", path.display());
                Ok(None)
            },
            Err(err) => Err(err.into()),
        }
    }
}

/// Assets held in memory, e.g. embedded with `include_bytes!`
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    assets: HashMap<AssetKey, Vec<u8>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.assets.insert(AssetKey::new(key), bytes.into());
    }

    pub fn with(mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(key, bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetStore for MemoryAssetStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load(&self, key: &AssetKey) -> Result<Option<Vec<u8>>> {
        Ok(self.assets.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_store_reads_files_by_key() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("emoji_u1f600.png"), b"png bytes").unwrap();
        let store = DirAssetStore::new(dir.path());

        let hit = store.load(&AssetKey::new("emoji_u1f600.png")).unwrap();
        assert_eq!(hit.as_deref(), Some(&b"png bytes"[..]));

        let miss = store.load(&AssetKey::new("emoji_u1f601.png")).unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn dir_store_ignores_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirAssetStore::new(dir.path());
        assert!(store.load(&AssetKey::new("../secret")).unwrap().is_none());
        assert!(store.load(&AssetKey::new("a/b.png")).unwrap().is_none());
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryAssetStore::new().with("emoji_u1f355.png", vec![1, 2, 3]);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.load(&AssetKey::new("emoji_u1f355.png")).unwrap(),
            Some(vec![1, 2, 3])
        );
        assert_eq!(store.load(&AssetKey::new("emoji_u1f354.png")).unwrap(), None);
    }
}
