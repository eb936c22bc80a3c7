//! One line of text to a bitmap

use super::Bitmap;
use crate::constants::GLYPH_MARKER;
use crate::font::{resolve_pattern, PixelFont};

/// Rasterize a single line (no line breaks) into `font.height()` rows
///
/// Each character takes as many columns as its widest pattern row, followed
/// by `letter_spacing` background columns unless it is the last one. An
/// empty line still yields `height` rows, zero columns wide.
pub fn rasterize_line(line: &str, font: &PixelFont) -> Bitmap {
    let height = font.height();
    let mut rows: Vec<Vec<bool>> = vec![Vec::new(); height];
    let count = line.chars().count();

    for (index, ch) in line.chars().enumerate() {
        let pattern = resolve_pattern(ch, font);
        let glyph_width = pattern
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);

        for (r, row) in rows.iter_mut().enumerate() {
            let mut pixels = pattern
                .get(r)
                .map(|p| p.chars().map(|c| c == GLYPH_MARKER).collect::<Vec<_>>())
                .unwrap_or_default();
            pixels.resize(glyph_width, false);
            row.extend(pixels);

            if index + 1 < count {
                row.extend(std::iter::repeat(false).take(font.letter_spacing()));
            }
        }
    }

    let width = rows.first().map_or(0, Vec::len);
    Bitmap::from_uniform(rows, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontRegistry;

    fn font() -> PixelFont {
        PixelFont::new("t", 3, 1, 1)
            .unwrap()
            .with_glyph('A', vec!["##".into(), "# ".into()])
            .unwrap()
            .with_glyph('B', vec!["#".into(), "#".into(), "#".into()])
            .unwrap()
            .with_glyph('?', vec!["###".into()])
            .unwrap()
    }

    fn render(b: &Bitmap) -> Vec<String> {
        b.rows()
            .iter()
            .map(|r| r.iter().map(|c| if *c { '#' } else { '.' }).collect())
            .collect()
    }

    #[test]
    fn test_single_glyph_pads_missing_rows() {
        let b = rasterize_line("A", &font());
        assert_eq!(render(&b), vec!["##", "#.", ".."]);
    }

    #[test]
    fn test_letter_spacing_between_only() {
        let b = rasterize_line("AB", &font());
        assert_eq!(render(&b), vec!["##.#", "#..#", "...#"]);
    }

    #[test]
    fn test_unknown_char_uses_fallback() {
        let b = rasterize_line("Z", &font());
        assert_eq!(render(&b), vec!["###", "...", "..."]);
    }

    #[test]
    fn test_empty_line_keeps_height() {
        let b = rasterize_line("", &font());
        assert_eq!(b.height(), 3);
        assert_eq!(b.width(), 0);
        assert!(!b.is_empty());
    }

    #[test]
    fn test_rows_share_width() {
        let registry = FontRegistry::builtin();
        for name in registry.list_font_names() {
            let font = registry.get_font(name).unwrap();
            let b = rasterize_line("Hello, World! 123 ~ß", font);
            assert!(b.rows().iter().all(|row| row.len() == b.width()));
            assert_eq!(b.height(), font.height());
        }
    }
}
