//! Grapheme segmentation
//!
//! Splits text into user-perceived characters. With the `segmentation`
//! feature the split follows UAX #29 extended grapheme clusters; without it
//! every code point is its own cluster. The fallback is an approximation:
//! ZWJ sequences, skin tone modifiers, flags and combining marks are
//! measured piece by piece and come out too wide.

#[cfg(feature = "segmentation")]
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into visual clusters
pub trait GraphemeSegmenter {
    /// Split `text` into clusters, in order, covering the whole input
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// UAX #29 extended grapheme clusters
#[cfg(feature = "segmentation")]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

#[cfg(feature = "segmentation")]
impl GraphemeSegmenter for UnicodeSegmenter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.graphemes(true).collect()
    }
}

/// One cluster per code point
#[cfg_attr(feature = "segmentation", allow(dead_code))]
#[derive(Debug, Clone, Copy, Default)]
pub struct CodepointSegmenter;

impl GraphemeSegmenter for CodepointSegmenter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.char_indices()
            .map(|(i, ch)| &text[i..i + ch.len_utf8()])
            .collect()
    }
}

/// Best segmenter available in this build
pub fn default_segmenter() -> &'static dyn GraphemeSegmenter {
    #[cfg(feature = "segmentation")]
    {
        &UnicodeSegmenter
    }
    #[cfg(not(feature = "segmentation"))]
    {
        &CodepointSegmenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint_split() {
        let parts = CodepointSegmenter.split("aあ🎉");
        assert_eq!(parts, vec!["a", "あ", "🎉"]);
    }

    #[test]
    fn test_codepoint_split_breaks_zwj_sequence() {
        // family emoji: man ZWJ woman
        let parts = CodepointSegmenter.split("👨\u{200D}👩");
        assert_eq!(parts.len(), 3);
    }

    #[cfg(feature = "segmentation")]
    #[test]
    fn test_unicode_split_keeps_clusters() {
        assert_eq!(UnicodeSegmenter.split("👨\u{200D}👩").len(), 1);
        assert_eq!(UnicodeSegmenter.split("👍🏽x").len(), 2);
        assert_eq!(UnicodeSegmenter.split("🇯🇵").len(), 1);
    }

    #[test]
    fn test_empty_text() {
        assert!(CodepointSegmenter.split("").is_empty());
        assert!(default_segmenter().split("").is_empty());
    }
}
