// this_file: crates/moji-unicode/src/tests.rs

use std::sync::Arc;

use moji_core::PLACEHOLDER;

use super::*;

const FLAG_JSON: &str = r#"{
    "1f1fa": ["1f1f8", "1f1fe"],
    "1f1e8": ["1f1e6", "1f1ed"]
}"#;

fn segmenter() -> EmojiSegmenter {
    let pairs = ModifierPairTable::from_json_str(FLAG_JSON).unwrap();
    EmojiSegmenter::new(Arc::new(pairs))
}

#[test]
fn test_flag_between_words() {
    let doc = segmenter().normalize("hello\u{1F1E8}\u{1F1E6}world");
    assert_eq!(doc.text.chars().count(), 5 + 1 + 5);
    assert_eq!(doc.placeholder_count(), 1);
    assert_eq!(doc.keys.len(), 1);
    assert_eq!(doc.keys[0].as_str(), "emoji_u1f1e8_1f1e6.png");
}

#[test]
fn test_no_emoji_is_identity() {
    let text = "The quick brown fox, 123 - naïve café";
    let doc = segmenter().normalize(text);
    assert_eq!(doc.text, text);
    assert!(doc.keys.is_empty());
}

#[test]
fn test_grinning_face_scenario() {
    let doc = segmenter().normalize("hi\u{1F600}");
    assert_eq!(doc.text, format!("hi{}", PLACEHOLDER));
    assert_eq!(doc.keys.len(), 1);
    assert_eq!(doc.keys[0].as_str(), "emoji_u1f600.png");
}

#[test]
fn test_flag_followed_by_unjoined_indicator() {
    let chars: Vec<char> = "\u{1F1FA}\u{1F1F8}\u{1F1FE}".chars().collect();
    let found = segmenter().tokenizer().tokenize(&chars, 0).unwrap();
    assert_eq!(found.sequence.len(), 2);
    assert_eq!(found.end, 1);

    let doc = segmenter().normalize("\u{1F1FA}\u{1F1F8}\u{1F1FE}");
    assert_eq!(doc.keys.len(), 2);
    assert_eq!(doc.keys[1].as_str(), "emoji_u1f1fe.png");
}

#[test]
fn test_family_is_one_placeholder() {
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
    let doc = segmenter().normalize(&format!("a{}b", family));
    assert_eq!(doc.text, format!("a{}b", PLACEHOLDER));
    assert_eq!(
        doc.keys[0].as_str(),
        "emoji_u1f468_200d_1f469_200d_1f467_200d_1f466.png"
    );
}

#[test]
fn test_toned_wave_then_emoji() {
    let doc = segmenter().normalize("\u{1F44B}\u{1F3FF}\u{1F600}");
    let keys: Vec<&str> = doc.keys.iter().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["emoji_u1f44b_1f3ff.png", "emoji_u1f600.png"]);
}

#[test]
fn test_copyright_sign_is_an_emoji() {
    let doc = segmenter().normalize("\u{A9} 2024");
    assert_eq!(doc.text, format!("{} 2024", PLACEHOLDER));
    assert_eq!(doc.keys[0].as_str(), "emoji_u00a9.png");
}

#[test]
fn test_original_demo_string() {
    let doc = segmenter().normalize("hello\u{1F355}\u{1F354}\u{1F600}\u{1F601}\u{1F60D}\u{1F642}\u{1F636}");
    assert_eq!(doc.text.chars().count(), 12);
    assert_eq!(doc.keys.len(), 7);
    assert!(doc.is_consistent());
}

#[test]
fn test_classification_of_every_tone_modifier() {
    for ch in ['\u{1F3FB}', '\u{1F3FC}', '\u{1F3FD}', '\u{1F3FE}', '\u{1F3FF}'] {
        assert!(classify::is_skin_tone_modifier(ch));
        assert_eq!(classify(ch), Classification::SkinToneModifier);
    }
}

#[test]
fn test_flag_joiner_emoji_splits_after_joiner() {
    let doc = segmenter().normalize("\u{1F1FA}\u{1F1F8}\u{200D}\u{1F600}");
    assert_eq!(doc.text, format!("{}{}", PLACEHOLDER, PLACEHOLDER));
    let keys: Vec<&str> = doc.keys.iter().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["emoji_u1f1fa_1f1f8_200d.png", "emoji_u1f600.png"]);
}
