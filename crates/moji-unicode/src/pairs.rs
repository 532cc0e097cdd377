// this_file: crates/moji-unicode/src/pairs.rs

//! Officially combinable two-code-point emoji pairs.
//!
//! Loaded once from sequence data shaped like
//! `{"1f1fa": ["1f1f8", "1f1fe"], ...}`: a base code point mapped to the code
//! points that may directly follow it (flags, keycaps and the like).

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use moji_core::{MojiError, Result};

use crate::namer::hex_id;

/// Read-only table of valid (first, second) pairs, keyed by hex identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierPairTable {
    pairs: HashMap<String, HashSet<String>>,
}

impl ModifierPairTable {
    /// An empty table: no pair ever matches
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse sequence data from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_slice(json.as_bytes())
    }

    pub fn from_json_slice(json: &[u8]) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_slice(json)
            .map_err(|e| MojiError::ConfigError(format!("Invalid sequence data: {}", e)))?;

        let mut table = Self::new();
        for (base, seconds) in raw {
            for second in seconds {
                table.insert(&base, &second);
            }
        }
        log::debug!("Loaded {} modifier pair bases", table.pairs.len());
        Ok(table)
    }

    /// Load sequence data from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| {
            MojiError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_slice(&data)
    }

    /// Build a table from code point pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        let mut table = Self::new();
        for (first, second) in pairs {
            table.insert(&hex_id(first), &hex_id(second));
        }
        table
    }

    /// Add one pair; identifiers may carry a `u`/`U+` prefix and any case
    pub fn insert(&mut self, base: &str, second: &str) {
        self.pairs
            .entry(normalize_id(base))
            .or_default()
            .insert(normalize_id(second));
    }

    /// Whether `second` may directly follow `first` as one emoji
    pub fn contains(&self, first: char, second: char) -> bool {
        self.pairs
            .get(&hex_id(first))
            .is_some_and(|seconds| seconds.contains(&hex_id(second)))
    }

    /// Number of base code points with at least one partner
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// `"U+1F1FA"`, `"u1f1fa"` and `"1F1FA"` all become `"1f1fa"`; short ids
/// are padded to four digits like [`hex_id`]
fn normalize_id(id: &str) -> String {
    let lower = id.trim().to_ascii_lowercase();
    let bare = lower
        .strip_prefix("u+")
        .or_else(|| lower.strip_prefix('u'))
        .unwrap_or(lower.as_str());
    format!("{:0>4}", bare)
}
