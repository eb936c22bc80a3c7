//! Glyph pattern lookup with fallback
//!
//! Lookup order: exact character, uppercase form, `?`, space, then an empty
//! pattern. Callers always get a row set back, never `None`.

use super::PixelFont;

const EMPTY_PATTERN: &[String] = &[];

/// Resolve the pattern rows used to draw `ch` in `font`
pub fn resolve_pattern(ch: char, font: &PixelFont) -> &[String] {
    if let Some(rows) = font.glyph(ch) {
        return rows;
    }

    let mut upper = ch.to_uppercase();
    if let (Some(u), None) = (upper.next(), upper.next()) {
        if let Some(rows) = font.glyph(u) {
            return rows;
        }
    }

    font.glyph('?')
        .or_else(|| font.glyph(' '))
        .unwrap_or(EMPTY_PATTERN)
}
