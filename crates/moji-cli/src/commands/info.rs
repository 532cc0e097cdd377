//! Info command implementation
//!
//! Displays what counts as an emoji and how renders look by default.

use moji_core::{error::Result, RenderParams, PLACEHOLDER, REFERENCE_CHAR, VARIATION_SELECTORS};
use moji_unicode::classify::{EMOJI_RANGES, JOIN_CHAR, SKIN_TONE_MODIFIERS};

pub fn run() -> Result<()> {
    println!("moji v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Emoji candidate ranges:");
    for range in EMOJI_RANGES.iter() {
        println!("  U+{:04X}..U+{:04X}", range.start(), range.end());
    }
    println!();

    println!("Special code points:");
    println!("  join char         U+{:04X}", JOIN_CHAR as u32);
    println!(
        "  skin tones        U+{:04X}..U+{:04X}",
        SKIN_TONE_MODIFIERS.start(),
        SKIN_TONE_MODIFIERS.end()
    );
    let selectors: Vec<String> = VARIATION_SELECTORS
        .iter()
        .map(|&ch| format!("U+{:04X}", ch as u32))
        .collect();
    println!("  selectors         {} (skipped when drawing)", selectors.join(", "));
    println!("  placeholder       U+{:04X}", PLACEHOLDER as u32);
    println!("  reference char    {:?} (emoji box width)", REFERENCE_CHAR);
    println!();

    let params = RenderParams::default();
    println!("Render defaults:");
    println!("  canvas            {}x{}", params.canvas_width, params.canvas_height);
    println!("  font size         {}px", params.font_size);
    println!(
        "  foreground        #{:02X}{:02X}{:02X}{:02X}",
        params.foreground.r, params.foreground.g, params.foreground.b, params.foreground.a
    );
    println!(
        "  background        #{:02X}{:02X}{:02X}{:02X}",
        params.background.r, params.background.g, params.background.b, params.background.a
    );
    println!("  output            PNG");

    Ok(())
}
