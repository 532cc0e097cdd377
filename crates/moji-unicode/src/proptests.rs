use std::sync::Arc;

use proptest::prelude::*;

use super::*;

fn segmenter() -> EmojiSegmenter {
    EmojiSegmenter::new(Arc::new(ModifierPairTable::from_pairs([
        ('\u{1F1FA}', '\u{1F1F8}'),
        ('\u{1F1E8}', '\u{1F1E6}'),
    ])))
}

/// Characters drawn from text, emoji, joiners, tones and selectors
fn mixed_char() -> impl Strategy<Value = char> {
    prop_oneof![
        proptest::char::range('a', 'z'),
        proptest::char::range('\u{1F600}', '\u{1F64F}'),
        proptest::char::range('\u{1F1E6}', '\u{1F1FF}'),
        proptest::char::range('\u{1F3FB}', '\u{1F3FF}'),
        Just('\u{200D}'),
        Just('\u{FE0F}'),
        Just(' '),
    ]
}

// Property: one key per placeholder, for any input
proptest! {
    #[test]
    fn prop_placeholders_match_keys(chars in proptest::collection::vec(mixed_char(), 0..64)) {
        let text: String = chars.into_iter().collect();
        let doc = segmenter().normalize(&text);
        prop_assert!(doc.is_consistent());
    }
}

// Property: text with no emoji candidates comes back unchanged
proptest! {
    #[test]
    fn prop_plain_text_is_identity(text in "[a-zA-Z0-9 .,!?\\-]*") {
        let doc = segmenter().normalize(&text);
        prop_assert_eq!(doc.text, text);
        prop_assert!(doc.keys.is_empty());
    }
}

// Property: segmentation is a pure function of its input
proptest! {
    #[test]
    fn prop_segmentation_is_deterministic(chars in proptest::collection::vec(mixed_char(), 0..32)) {
        let text: String = chars.into_iter().collect();
        prop_assert_eq!(segmenter().normalize(&text), segmenter().normalize(&text));
    }
}

// Property: the namer keeps the marker on the first token only
proptest! {
    #[test]
    fn prop_namer_marks_first_token(chars in proptest::collection::vec(mixed_char(), 1..8)) {
        let key = namer::asset_key_for(&chars);
        let body = key
            .as_str()
            .strip_prefix(namer::ASSET_PREFIX)
            .and_then(|rest| rest.strip_suffix(".png"))
            .unwrap();
        let tokens: Vec<&str> = body.split('_').collect();
        prop_assert_eq!(tokens.len(), chars.len());
        prop_assert!(tokens[0].starts_with('u'));
        prop_assert!(tokens[1..].iter().all(|t| !t.contains('u')));
        prop_assert_eq!(key.clone(), namer::asset_key_for(&chars));
    }
}

// Property: a match never ends before it starts or past the input
proptest! {
    #[test]
    fn prop_tokenizer_end_in_bounds(
        chars in proptest::collection::vec(mixed_char(), 1..32),
        start in 0usize..32,
    ) {
        let seg = segmenter();
        if let Some(found) = seg.tokenizer().tokenize(&chars, start) {
            prop_assert!(found.end >= start);
            prop_assert!(found.end < chars.len());
            prop_assert_eq!(found.sequence.len(), found.end - start + 1);
            prop_assert_eq!(found.sequence.as_slice(), &chars[start..=found.end]);
        }
    }
}
