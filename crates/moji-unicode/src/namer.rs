//! Asset keys for emoji sequences.
//!
//! The naming has to match the emoji asset files byte for byte:
//! `emoji_u1f1fa_1f1f8.png` is the first code point with a `u` marker,
//! every later one as bare hex, all lower case, at least four digits.

use moji_core::types::AssetKey;

use crate::tokenizer::EmojiSequence;

pub const ASSET_PREFIX: &str = "emoji_";
pub const ASSET_EXTENSION: &str = "png";

/// Lower-case hex identifier of a code point, zero padded to four digits
pub fn hex_id(ch: char) -> String {
    format!("{:04x}", ch as u32)
}

/// Build the asset key for `sequence`.
///
/// An empty sequence yields `emoji_.png`, which no store will have.
pub fn asset_key(sequence: &EmojiSequence) -> AssetKey {
    asset_key_for(sequence.as_slice())
}

pub fn asset_key_for(chars: &[char]) -> AssetKey {
    let joined = chars
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            if i == 0 {
                format!("u{}", hex_id(ch))
            } else {
                hex_id(ch)
            }
        })
        .collect::<Vec<_>>()
        .join("_");

    AssetKey::new(format!("{}{}.{}", ASSET_PREFIX, joined, ASSET_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_code_point() {
        assert_eq!(asset_key_for(&['\u{1F600}']).as_str(), "emoji_u1f600.png");
    }

    #[test]
    fn only_first_token_keeps_the_marker() {
        let key = asset_key_for(&['\u{1F1FA}', '\u{1F1F8}']);
        assert_eq!(key.as_str(), "emoji_u1f1fa_1f1f8.png");

        let family = asset_key_for(&['\u{1F468}', '\u{200D}', '\u{1F469}', '\u{200D}', '\u{1F467}']);
        assert_eq!(family.as_str(), "emoji_u1f468_200d_1f469_200d_1f467.png");
    }

    #[test]
    fn short_code_points_are_padded() {
        assert_eq!(asset_key_for(&['\u{A9}']).as_str(), "emoji_u00a9.png");
        assert_eq!(hex_id('\u{20E3}'), "20e3");
    }

    #[test]
    fn same_sequence_same_key() {
        let seq = ['\u{1F44B}', '\u{1F3FD}'];
        assert_eq!(asset_key_for(&seq), asset_key_for(&seq.to_vec()));
    }
}
