//! Text normalization before rasterization
//!
//! Order: escape decoding, line ending normalization, NFC composition,
//! control character stripping, length cap, optional vertical explode.

use unicode_normalization::UnicodeNormalization;

use crate::constants::MAX_INPUT_CHARS;
use crate::error::{BannerError, Result};
use crate::text::default_segmenter;

/// Decode literal `\n` and `\\` escapes
///
/// Unknown escapes stay as typed, backslash included. A trailing lone
/// backslash is kept.
pub fn decode_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Convert `\r\n` and lone `\r` to `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// NFC-compose and strip control characters other than `\n`
pub fn sanitize(text: &str) -> String {
    text.nfc()
        .filter(|ch| *ch == '\n' || !ch.is_control())
        .collect()
}

/// Put every character on its own line; original lines are separated by a
/// blank line
pub fn explode_vertical(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            line.chars()
                .map(String::from)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Keep the first `max` display characters; line breaks are kept but not
/// counted
pub fn cap_length(text: &str, max: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut count = 0;
    for grapheme in default_segmenter().split(text) {
        if grapheme != "\n" {
            if count == max {
                break;
            }
            count += 1;
        }
        out.push_str(grapheme);
    }
    out
}

/// Run the whole normalization chain on raw user text
pub fn prepare_text(raw: &str, vertical: bool) -> Result<String> {
    if raw.is_empty() {
        return Err(BannerError::EmptyInput);
    }

    let text = sanitize(&normalize_line_endings(&decode_escapes(raw)));
    if text.is_empty() {
        return Err(BannerError::EmptyInput);
    }

    let text = cap_length(&text, MAX_INPUT_CHARS);

    Ok(if vertical {
        explode_vertical(&text)
    } else {
        text
    })
}
