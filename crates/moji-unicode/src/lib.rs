// this_file: crates/moji-unicode/src/lib.rs

//! Emoji-aware text segmentation for moji.
//!
//! - [`classify`] tags single code points by fixed ranges
//! - [`pairs`] holds the officially combinable two-code-point pairs
//! - [`tokenizer`] groups code points into emoji sequences
//! - [`namer`] turns a sequence into its asset key
//! - [`segmenter`] ties them together into a [`NormalizedDocument`]
//!
//! ```
//! use std::sync::Arc;
//! use moji_unicode::{EmojiSegmenter, ModifierPairTable};
//!
//! let segmenter = EmojiSegmenter::new(Arc::new(ModifierPairTable::new()));
//! let doc = segmenter.normalize("hi\u{1F600}");
//! assert_eq!(doc.text, "hi\u{FFF5}");
//! assert_eq!(doc.keys[0].as_str(), "emoji_u1f600.png");
//! ```
//!
//! [`NormalizedDocument`]: moji_core::types::NormalizedDocument

pub mod classify;
pub mod namer;
pub mod pairs;
pub mod segmenter;
pub mod tokenizer;

pub use classify::{classify, Classification};
pub use namer::asset_key;
pub use pairs::ModifierPairTable;
pub use segmenter::EmojiSegmenter;
pub use tokenizer::{EmojiMatch, EmojiSequence, EmojiTokenizer};

#[cfg(test)]
mod tests;

#[cfg(test)]
mod proptests;
