// this_file: crates/moji-unicode/src/classify.rs

//! Code point classification by fixed numeric ranges.
//!
//! The ranges are data: when new emoji blocks appear, extend
//! [`EMOJI_RANGES`] and the scanner picks them up unchanged.

use std::ops::RangeInclusive;

pub use moji_core::{is_variation_selector, VARIATION_SELECTORS};

/// Inclusive code point ranges treated as emoji candidates
pub const EMOJI_RANGES: [RangeInclusive<u32>; 4] = [
    127744..=129782, // U+1F300..U+1FAF6 pictographs, emoticons, transport, supplemental
    126980..=127569, // U+1F004..U+1F251 mahjong, cards, enclosed alphanumerics (incl. regional indicators)
    169..=174,       // U+00A9..U+00AE copyright, registered
    8205..=12953,    // U+200D..U+3299 joiner, arrows, misc symbols, dingbats, CJK enclosed
];

/// Zero width joiner
pub const JOIN_CHAR: char = '\u{200D}';

/// Fitzpatrick skin tone modifiers, U+1F3FB..U+1F3FF
pub const SKIN_TONE_MODIFIERS: RangeInclusive<u32> = 0x1F3FB..=0x1F3FF;

/// Role of a single code point in emoji scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Ordinary,
    EmojiCandidate,
    JoinChar,
    SkinToneModifier,
    VariationSelector,
}

/// Most specific tag for `ch`.
///
/// The joiner and the tone modifiers sit inside the candidate ranges and get
/// their own tags first.
pub fn classify(ch: char) -> Classification {
    if is_join_char(ch) {
        Classification::JoinChar
    } else if is_skin_tone_modifier(ch) {
        Classification::SkinToneModifier
    } else if is_variation_selector(ch) {
        Classification::VariationSelector
    } else if is_emoji_candidate(ch) {
        Classification::EmojiCandidate
    } else {
        Classification::Ordinary
    }
}

/// Raw membership in [`EMOJI_RANGES`]
pub fn is_emoji_candidate(ch: char) -> bool {
    let cp = ch as u32;
    EMOJI_RANGES.iter().any(|range| range.contains(&cp))
}

pub fn is_join_char(ch: char) -> bool {
    ch == JOIN_CHAR
}

pub fn is_skin_tone_modifier(ch: char) -> bool {
    SKIN_TONE_MODIFIERS.contains(&(ch as u32))
}
