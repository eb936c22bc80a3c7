//! Uniform cell sizing

use crate::constants::MIN_CELL_WIDTH;
use crate::text::display_width;

/// Cell width for a set of foreground glyphs (at least 2)
pub fn cell_width<'a>(foreground: impl IntoIterator<Item = &'a str>) -> usize {
    foreground
        .into_iter()
        .map(display_width)
        .fold(MIN_CELL_WIDTH, usize::max)
}

/// Pad `glyph` with spaces to exactly `width` columns
///
/// A glyph wider than the cell is replaced by blanks so the grid stays
/// aligned.
pub fn fit_cell(glyph: &str, width: usize) -> String {
    let glyph_width = display_width(glyph);
    if glyph_width > width {
        return " ".repeat(width);
    }
    let mut cell = String::with_capacity(glyph.len() + width - glyph_width);
    cell.push_str(glyph);
    cell.extend(std::iter::repeat(' ').take(width - glyph_width));
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_width_minimum() {
        assert_eq!(cell_width(["x"]), 2);
        assert_eq!(cell_width(["🔥", "✨"]), 2);
        assert_eq!(cell_width(Vec::<&str>::new()), 2);
    }

    #[test]
    fn test_cell_width_widest_wins() {
        assert_eq!(cell_width(["🔥", "🔥🔥"]), 4);
    }

    #[test]
    fn test_fit_pads_narrow_glyph() {
        assert_eq!(fit_cell(".", 2), ". ");
        assert_eq!(fit_cell("🔥", 4), "🔥  ");
        assert_eq!(fit_cell("", 2), "  ");
    }

    #[test]
    fn test_fit_blanks_overflow() {
        assert_eq!(fit_cell("🔥🔥", 2), "  ");
    }

    #[test]
    fn test_fit_exact() {
        assert_eq!(fit_cell("🔥", 2), "🔥");
    }
}
