// this_file: crates/moji-unicode/src/tokenizer.rs

//! Greedy emoji sequence scanner.
//!
//! Starting at an emoji candidate, the scanner swallows code points as long
//! as they extend the same cluster:
//!
//! ```text
//! base ( tone | pair-partner | ZWJ base )*
//! ```
//!
//! with two restrictions: a toned base ends the cluster unless a ZWJ
//! follows, and a pair ends it for good (a trailing ZWJ is still swallowed,
//! the next candidate is not). This is a practical subset of the emoji ZWJ grammar,
//! not full grapheme cluster segmentation. It does not check that the
//! resulting sequence is a registered emoji.

use std::sync::Arc;

use crate::classify::{is_emoji_candidate, is_join_char, is_skin_tone_modifier};
use crate::pairs::ModifierPairTable;

/// One recognised emoji cluster, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EmojiSequence(Vec<char>);

impl EmojiSequence {
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, ch: char) {
        self.0.push(ch);
    }
}

impl From<Vec<char>> for EmojiSequence {
    fn from(chars: Vec<char>) -> Self {
        Self(chars)
    }
}

/// A sequence and the index of the last code point it consumed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiMatch {
    pub sequence: EmojiSequence,
    /// Inclusive end index into the scanned slice
    pub end: usize,
}

/// What the previously consumed code point did to the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastStep {
    /// Nothing consumed yet
    Empty,
    /// A base emoji, open to tones, pairs and joins
    Base,
    /// A zero width joiner; the next candidate continues the chain
    Joined,
    /// A joiner after a pair; the chain cannot continue
    PairJoined,
    /// A skin tone modifier; only a joiner may follow
    Toned,
    /// The second half of a modifier pair; no candidate may follow
    Paired,
}

/// Scans emoji sequences against a shared [`ModifierPairTable`]
#[derive(Debug, Clone)]
pub struct EmojiTokenizer {
    pairs: Arc<ModifierPairTable>,
}

impl EmojiTokenizer {
    pub fn new(pairs: Arc<ModifierPairTable>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &ModifierPairTable {
        &self.pairs
    }

    /// Scan the longest emoji sequence starting at `start`.
    ///
    /// `None` means nothing was consumed: `start` is out of bounds, is not an
    /// emoji candidate, or is a joiner with nothing to join.
    pub fn tokenize(&self, chars: &[char], start: usize) -> Option<EmojiMatch> {
        let mut sequence = EmojiSequence::default();
        let mut last = LastStep::Empty;
        let mut prev: Option<char> = None;

        for &ch in chars.get(start..)? {
            let next = if is_join_char(ch) {
                match last {
                    LastStep::Empty => {
                        log::warn!("Invalid emoji sequence (starts with join char) at {}", start);
                        break;
                    },
                    LastStep::Paired | LastStep::PairJoined => LastStep::PairJoined,
                    _ => LastStep::Joined,
                }
            } else if is_emoji_candidate(ch) {
                match self.extend(last, prev, ch) {
                    Some(step) => step,
                    None => break,
                }
            } else {
                break;
            };

            sequence.push(ch);
            last = next;
            prev = Some(ch);
        }

        if sequence.is_empty() {
            return None;
        }

        let end = start + sequence.len() - 1;
        log::debug!("Emoji sequence {:?} at {}..={}", sequence.as_slice(), start, end);
        Some(EmojiMatch { sequence, end })
    }

    /// Decide whether candidate `ch` extends the cluster, and how
    fn extend(&self, last: LastStep, prev: Option<char>, ch: char) -> Option<LastStep> {
        let as_base = if is_skin_tone_modifier(ch) {
            LastStep::Toned
        } else {
            LastStep::Base
        };

        match last {
            LastStep::Empty | LastStep::Joined => Some(as_base),
            LastStep::Paired | LastStep::PairJoined | LastStep::Toned => None,
            LastStep::Base if is_skin_tone_modifier(ch) => Some(LastStep::Toned),
            LastStep::Base => prev
                .filter(|&p| self.pairs.contains(p, ch))
                .map(|_| LastStep::Paired),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const US_FLAG: [char; 2] = ['\u{1F1FA}', '\u{1F1F8}'];

    fn tokenizer() -> EmojiTokenizer {
        EmojiTokenizer::new(Arc::new(ModifierPairTable::from_pairs([(
            US_FLAG[0], US_FLAG[1],
        )])))
    }

    fn scan(text: &str, start: usize) -> Option<(Vec<char>, usize)> {
        let chars: Vec<char> = text.chars().collect();
        tokenizer()
            .tokenize(&chars, start)
            .map(|m| (m.sequence.as_slice().to_vec(), m.end))
    }

    #[test]
    fn isolated_emoji() {
        assert_eq!(scan("\u{1F600}", 0), Some((vec!['\u{1F600}'], 0)));
        assert_eq!(scan("a\u{1F600}b", 1), Some((vec!['\u{1F600}'], 1)));
    }

    #[test]
    fn zwj_chain() {
        let text = "\u{1F468}\u{200D}\u{1F4BB}!";
        assert_eq!(
            scan(text, 0),
            Some((vec!['\u{1F468}', '\u{200D}', '\u{1F4BB}'], 2))
        );
    }

    #[test]
    fn adjacent_emoji_without_pair_split() {
        let text = "\u{1F355}\u{1F354}";
        assert_eq!(scan(text, 0), Some((vec!['\u{1F355}'], 0)));
        assert_eq!(scan(text, 1), Some((vec!['\u{1F354}'], 1)));
    }

    #[test]
    fn flag_pair_is_atomic() {
        let text = "\u{1F1FA}\u{1F1F8}\u{1F1FA}";
        assert_eq!(scan(text, 0), Some((US_FLAG.to_vec(), 1)));
    }

    #[test]
    fn pair_stays_closed_after_a_joiner() {
        let text = "\u{1F1FA}\u{1F1F8}\u{200D}\u{1F600}";
        assert_eq!(scan(text, 0).map(|(seq, end)| (seq.len(), end)), Some((3, 2)));
        // The candidate after the joiner starts its own sequence
        assert_eq!(scan(text, 3), Some((vec!['\u{1F600}'], 3)));

        let doubled = "\u{1F1FA}\u{1F1F8}\u{200D}\u{200D}\u{1F600}";
        assert_eq!(scan(doubled, 0).map(|(_, end)| end), Some(3));
    }

    #[test]
    fn toned_base_continues_through_a_joiner() {
        let text = "\u{1F44B}\u{1F3FD}\u{200D}\u{1F600}";
        assert_eq!(scan(text, 0).map(|(seq, end)| (seq.len(), end)), Some((4, 3)));
    }

    #[test]
    fn skin_tone_attaches_then_closes() {
        let text = "\u{1F44B}\u{1F3FD}\u{1F600}";
        assert_eq!(scan(text, 0), Some((vec!['\u{1F44B}', '\u{1F3FD}'], 1)));
    }

    #[test]
    fn toned_zwj_sequence() {
        // man technologist, medium skin tone
        let text = "\u{1F468}\u{1F3FD}\u{200D}\u{1F4BB}";
        assert_eq!(scan(text, 0).map(|(seq, end)| (seq.len(), end)), Some((4, 3)));
    }

    #[test]
    fn variation_selector_ends_the_sequence() {
        let text = "\u{2764}\u{FE0F}";
        assert_eq!(scan(text, 0), Some((vec!['\u{2764}'], 0)));
    }

    #[test]
    fn leading_joiner_consumes_nothing() {
        assert_eq!(scan("\u{200D}\u{1F600}", 0), None);
    }

    #[test]
    fn ordinary_start_and_out_of_bounds() {
        assert_eq!(scan("abc", 0), None);
        assert_eq!(scan("abc", 7), None);
        assert_eq!(scan("", 0), None);
    }

    #[test]
    fn trailing_joiner_is_kept() {
        let text = "\u{1F44D}\u{200D}x";
        assert_eq!(scan(text, 0), Some((vec!['\u{1F44D}', '\u{200D}'], 1)));
    }
}
