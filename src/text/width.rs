//! Display width of clusters and emoji tokens
//!
//! Every cluster is either 1 or 2 cells wide. Custom alias tokens
//! (`:party-parrot:`) stand for an image the chat client draws, so they
//! count as one wide cell.

use unicode_width::UnicodeWidthChar;

use super::segment::{default_segmenter, GraphemeSegmenter};
use crate::constants::{
    is_regional_indicator, EMOJI_VARIATION_SELECTOR, FULLWIDTH_SPACE, MAX_ALIAS_LEN,
};

/// Determines if a character is an emoji or pictograph
pub fn is_pictographic(c: char) -> bool {
    let cp = c as u32;
    matches!(cp,
        // Miscellaneous Symbols and Pictographs
        0x1F300..=0x1F5FF |
        // Emoticons
        0x1F600..=0x1F64F |
        // Transport and Map Symbols
        0x1F680..=0x1F6FF |
        // Geometric Shapes Extended (🟩 🟥 ...)
        0x1F7E0..=0x1F7EB |
        // Supplemental Symbols and Pictographs
        0x1F900..=0x1F9FF |
        // Symbols and Pictographs Extended-A
        0x1FA00..=0x1FA6F |
        // Symbols and Pictographs Extended-B
        0x1FA70..=0x1FAFF |
        // Dingbats
        0x2700..=0x27BF |
        // Miscellaneous Symbols
        0x2600..=0x26FF |
        // Regional Indicator Symbols
        0x1F1E0..=0x1F1FF |
        // Various common emoji
        0x203C | 0x2049 | 0x2122 | 0x2139 |
        0x2194..=0x2199 |
        0x21A9..=0x21AA |
        0x231A..=0x231B |
        0x2328 | 0x23CF |
        0x23E9..=0x23F3 |
        0x23F8..=0x23FA |
        0x24C2 |
        0x25AA..=0x25AB |
        0x25B6 | 0x25C0 |
        0x25FB..=0x25FE |
        0x2934..=0x2935 |
        0x2B05..=0x2B07 |
        0x2B1B..=0x2B1C |
        0x2B50 | 0x2B55 |
        0x3030 | 0x303D | 0x3297 | 0x3299
    )
}

/// True if any code point of the cluster forces a wide cell
fn is_wide_grapheme(grapheme: &str) -> bool {
    grapheme.chars().any(|c| {
        is_pictographic(c)
            || c == EMOJI_VARIATION_SELECTOR
            || is_regional_indicator(c as u32)
            || c.width() == Some(2)
    })
}

/// Checks if a token has the shape of a custom emoji alias
///
/// Accepts `name` or `:name:` where `name` is alphanumeric, `_` or `-`.
/// A lone colon on one side is rejected. A bare single character is never
/// an alias, and neither is anything containing a wide or pictographic
/// character.
pub fn is_custom_alias(token: &str) -> bool {
    let (inner, wrapped) = match token.strip_prefix(':').and_then(|t| t.strip_suffix(':')) {
        Some(inner) => (inner, true),
        None if token.starts_with(':') || token.ends_with(':') => return false,
        None => (token, false),
    };

    let length = inner.chars().count();
    if length == 0 || length > MAX_ALIAS_LEN {
        return false;
    }
    if !wrapped && length < 2 {
        return false;
    }
    inner
        .chars()
        .all(|c| (c.is_alphanumeric() || c == '_' || c == '-') && !c.is_whitespace())
        && !is_wide_grapheme(inner)
}

/// Width of one grapheme cluster (1 or 2)
pub fn grapheme_width(grapheme: &str) -> usize {
    if is_wide_grapheme(grapheme) {
        return 2;
    }
    if grapheme.starts_with(FULLWIDTH_SPACE) {
        return 2;
    }
    1
}

/// Display width of a token using the given segmenter
pub fn display_width_with(text: &str, segmenter: &dyn GraphemeSegmenter) -> usize {
    if is_custom_alias(text) {
        return 2;
    }
    segmenter.split(text).into_iter().map(grapheme_width).sum()
}

/// Display width of a token using the best available segmenter
pub fn display_width(text: &str) -> usize {
    display_width_with(text, default_segmenter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::segment::CodepointSegmenter;

    #[test]
    fn test_is_pictographic() {
        assert!(is_pictographic('😀'));
        assert!(is_pictographic('🎉'));
        assert!(is_pictographic('❤'));
        assert!(is_pictographic('🟩'));
        assert!(!is_pictographic('A'));
        assert!(!is_pictographic('あ'));
    }

    #[test]
    fn test_custom_alias_shapes() {
        assert!(is_custom_alias(":party-parrot:"));
        assert!(is_custom_alias("party_parrot"));
        assert!(is_custom_alias(":x:"));
        assert!(!is_custom_alias("x"));
        assert!(!is_custom_alias("::"));
        assert!(!is_custom_alias(":two words:"));
        assert!(!is_custom_alias(":🔥:"));
        assert!(!is_custom_alias("日本"));
    }

    #[test]
    fn test_custom_alias_needs_both_colons() {
        assert!(!is_custom_alias(":party"));
        assert!(!is_custom_alias("party:"));
        assert!(!is_custom_alias(":"));
    }

    #[test]
    fn test_custom_alias_length_in_chars() {
        let max = "é".repeat(MAX_ALIAS_LEN);
        assert!(max.len() > MAX_ALIAS_LEN);
        assert!(is_custom_alias(&format!(":{}:", max)));
        assert!(!is_custom_alias(&format!(":{}é:", max)));
    }

    #[test]
    fn test_grapheme_width() {
        assert_eq!(grapheme_width("A"), 1);
        assert_eq!(grapheme_width("あ"), 2);
        assert_eq!(grapheme_width("🔥"), 2);
        assert_eq!(grapheme_width("\u{3000}"), 2);
        // text-default symbol forced to emoji presentation
        assert_eq!(grapheme_width("☺\u{FE0F}"), 2);
        assert_eq!(grapheme_width("🇯🇵"), 2);
    }

    #[test]
    fn test_display_width_tokens() {
        assert_eq!(display_width("🔥"), 2);
        assert_eq!(display_width(":blob-dance:"), 2);
        assert_eq!(display_width("."), 1);
        assert_eq!(display_width(""), 0);
    }

    #[cfg(feature = "segmentation")]
    #[test]
    fn test_display_width_zwj_cluster() {
        assert_eq!(display_width("👨\u{200D}👩\u{200D}👧"), 2);
        assert_eq!(display_width("👍🏽"), 2);
    }

    #[test]
    fn test_codepoint_fallback_overestimates() {
        // the skin tone modifier becomes its own cluster
        assert_eq!(display_width_with("👍🏽", &CodepointSegmenter), 4);
    }

    #[test]
    fn test_width_is_pure() {
        let token = "🌈";
        assert_eq!(display_width(token), display_width(token));
    }
}
