//! Text to bitmap
//!
//! Handles:
//! - Input normalization (escapes, line endings, sanitizing, vertical mode)
//! - Rasterizing each line with a pixel font
//! - Composing lines into one trimmed bitmap

pub mod bitmap;
pub mod compose;
pub mod input;
pub mod rasterize;

pub use bitmap::Bitmap;
pub use compose::compose;
pub use input::prepare_text;
pub use rasterize::rasterize_line;

use crate::error::Result;
use crate::font::PixelFont;

/// Normalize `raw` and rasterize it into a single bitmap
pub fn build_bitmap(raw: &str, font: &PixelFont, vertical: bool) -> Result<Bitmap> {
    let text = prepare_text(raw, vertical)?;
    let lines: Vec<Bitmap> = text
        .split('\n')
        .map(|line| rasterize_line(line, font))
        .collect();
    Ok(compose(&lines, font.line_spacing()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BannerError;
    use crate::font::FontRegistry;

    fn standard() -> PixelFont {
        FontRegistry::builtin().get_font("standard").unwrap().clone()
    }

    #[test]
    fn test_hi_dimensions() {
        let font = standard();
        let b = build_bitmap("HI", &font, false).unwrap();
        // H(3) + spacing(1) + I(3)
        assert_eq!(b.width(), 7);
        assert_eq!(b.height(), 5);
    }

    #[test]
    fn test_escaped_newline_makes_two_lines() {
        let font = standard();
        let escaped = build_bitmap(r"A\nB", &font, false).unwrap();
        let real = build_bitmap("A\nB", &font, false).unwrap();
        assert_eq!(escaped, real);
        assert_eq!(escaped.height(), 5 + 1 + 5);
    }

    #[test]
    fn test_escaped_backslash_is_one_glyph() {
        let font = standard();
        let escaped = build_bitmap(r"A\\B", &font, false).unwrap();
        let expected = compose(&[rasterize_line(r"A\B", &font)], 1);
        assert_eq!(escaped, expected);
        assert_eq!(escaped.height(), 5);
        // A(3) + 1 + \(3) + 1 + B(3)
        assert_eq!(escaped.width(), 11);
    }

    #[test]
    fn test_vertical_matches_manual_stack() {
        let font = standard();
        let vertical = build_bitmap("AB", &font, true).unwrap();
        let stacked = build_bitmap("A\nB", &font, false).unwrap();
        assert_eq!(vertical, stacked);
    }

    #[test]
    fn test_crlf_equals_lf() {
        let font = standard();
        assert_eq!(
            build_bitmap("A\r\nB", &font, false).unwrap(),
            build_bitmap("A\nB", &font, false).unwrap()
        );
    }

    #[test]
    fn test_row_length_invariant() {
        let font = standard();
        let b = build_bitmap("WIDE\nI\n\nMM", &font, false).unwrap();
        assert!(b.rows().iter().all(|row| row.len() == b.width()));
    }

    #[test]
    fn test_empty_input_error() {
        let font = standard();
        assert_eq!(build_bitmap("", &font, false), Err(BannerError::EmptyInput));
    }

    #[test]
    fn test_blank_text_is_empty_bitmap() {
        let font = standard();
        assert_eq!(build_bitmap("   ", &font, false), Ok(Bitmap::empty()));
        assert_eq!(build_bitmap("\n", &font, false), Ok(Bitmap::empty()));
    }

    #[test]
    fn test_long_input_is_capped() {
        let font = standard();
        let long = "A".repeat(150);
        let capped = "A".repeat(100);
        assert_eq!(
            build_bitmap(&long, &font, false).unwrap(),
            build_bitmap(&capped, &font, false).unwrap()
        );
    }
}
