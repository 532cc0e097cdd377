//! Segment command implementation
//!
//! Runs only the segmenter and prints what the renderer would see.

use std::sync::Arc;

use moji_core::{error::Result, types::NormalizedDocument, MojiError, PLACEHOLDER};
use moji_unicode::{EmojiSegmenter, ModifierPairTable};
use serde::Serialize;

use super::get_input_text;
use crate::cli::SegmentArgs;

#[derive(Debug, Serialize)]
struct SegmentReport<'a> {
    text: &'a str,
    keys: Vec<&'a str>,
}

pub fn run(args: &SegmentArgs) -> Result<()> {
    let text = get_input_text(args.text.as_deref(), None, args.text_file.as_deref())?;
    let pairs = ModifierPairTable::from_path(&args.sequences)?;
    let doc = EmojiSegmenter::new(Arc::new(pairs)).normalize(&text);

    println!("{}", format_report(&doc, args.json)?);
    Ok(())
}

fn format_report(doc: &NormalizedDocument, json: bool) -> Result<String> {
    if json {
        let report = SegmentReport {
            text: &doc.text,
            keys: doc.keys.iter().map(|key| key.as_str()).collect(),
        };
        return serde_json::to_string_pretty(&report)
            .map_err(|e| MojiError::Other(format!("JSON serialization failed: {}", e)));
    }

    let mut out = doc.text.replace(PLACEHOLDER, "\\u{FFF5}");
    for (i, key) in doc.keys.iter().enumerate() {
        out.push_str(&format!("\n{:>3}  {}", i + 1, key));
    }
    Ok(out)
}
