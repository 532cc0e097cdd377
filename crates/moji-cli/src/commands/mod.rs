//! Subcommand implementations

pub mod info;
pub mod render;
pub mod segment;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use moji_core::error::Result;

/// Text from, in priority order: positional argument, `--text`,
/// `--text-file`, stdin. Escapes are decoded only in command-line text.
pub fn get_input_text(
    positional: Option<&str>,
    text_arg: Option<&str>,
    text_file: Option<&Path>,
) -> Result<String> {
    if let Some(text) = positional.or(text_arg) {
        return Ok(decode_unicode_escapes(text));
    }

    if let Some(path) = text_file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
}

/// Decode `\uXXXX` and `\u{X...}` escapes; anything malformed stays as typed
pub fn decode_unicode_escapes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("\\u") {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 2..];

        let (hex, consumed) = match after.strip_prefix('{') {
            Some(braced) => match braced.find('}') {
                Some(close) => (&braced[..close], close + 2),
                None => ("", 0),
            },
            None => match after.get(..4) {
                Some(four) => (four, 4),
                None => ("", 0),
            },
        };

        let decoded = u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
        match decoded {
            Some(ch) if consumed > 0 => {
                result.push(ch);
                rest = &after[consumed..];
            },
            _ => {
                result.push_str("\\u");
                rest = after;
            },
        }
    }

    result.push_str(rest);
    result
}
