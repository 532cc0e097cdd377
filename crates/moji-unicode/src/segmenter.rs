//! Single-pass replacement of emoji sequences with placeholders.

use std::sync::Arc;

use moji_core::{traits::Segmenter, types::NormalizedDocument, PLACEHOLDER};

use crate::classify::is_emoji_candidate;
use crate::namer::asset_key;
use crate::pairs::ModifierPairTable;
use crate::tokenizer::EmojiTokenizer;

/// Emoji-aware [`Segmenter`] backed by [`EmojiTokenizer`]
#[derive(Debug, Clone)]
pub struct EmojiSegmenter {
    tokenizer: EmojiTokenizer,
}

impl EmojiSegmenter {
    pub fn new(pairs: Arc<ModifierPairTable>) -> Self {
        Self {
            tokenizer: EmojiTokenizer::new(pairs),
        }
    }

    pub fn tokenizer(&self) -> &EmojiTokenizer {
        &self.tokenizer
    }

    /// Replace each emoji sequence in `text` with one [`PLACEHOLDER`] and
    /// collect the asset keys in the same order
    pub fn normalize(&self, text: &str) -> NormalizedDocument {
        let chars: Vec<char> = text.chars().collect();
        let mut doc = NormalizedDocument {
            text: String::with_capacity(text.len()),
            keys: Vec::new(),
        };

        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];

            if is_emoji_candidate(ch) {
                if let Some(found) = self.tokenizer.tokenize(&chars, i) {
                    doc.text.push(PLACEHOLDER);
                    doc.keys.push(asset_key(&found.sequence));
                    i = found.end + 1;
                    continue;
                }
                log::warn!("No emoji found at {} ({:?}), keeping it as text", i, ch);
            }

            doc.text.push(ch);
            i += 1;
        }

        doc
    }
}

impl Segmenter for EmojiSegmenter {
    fn name(&self) -> &'static str {
        "emoji"
    }

    fn segment(&self, text: &str) -> NormalizedDocument {
        self.normalize(text)
    }
}
