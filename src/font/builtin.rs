//! Fonts compiled into the binary
//!
//! - `standard`: 5 rows, A-Z, 0-9 and common punctuation
//! - `mini`: 3 rows, A-Z, 0-9 and a few marks

use std::collections::HashMap;

use super::PixelFont;

type GlyphTable = &'static [(char, &'static [&'static str])];

#[rustfmt::skip]
const STANDARD: GlyphTable = &[
    ('A', &[" # ", "# #", "###", "# #", "# #"]),
    ('B', &["## ", "# #", "## ", "# #", "## "]),
    ('C', &[" ##", "#  ", "#  ", "#  ", " ##"]),
    ('D', &["## ", "# #", "# #", "# #", "## "]),
    ('E', &["###", "#  ", "## ", "#  ", "###"]),
    ('F', &["###", "#  ", "## ", "#  ", "#  "]),
    ('G', &[" ##", "#  ", "# #", "# #", " ##"]),
    ('H', &["# #", "# #", "###", "# #", "# #"]),
    ('I', &["###", " # ", " # ", " # ", "###"]),
    ('J', &["  #", "  #", "  #", "# #", " # "]),
    ('K', &["# #", "# #", "## ", "# #", "# #"]),
    ('L', &["#  ", "#  ", "#  ", "#  ", "###"]),
    ('M', &["#   #", "## ##", "# # #", "#   #", "#   #"]),
    ('N', &["#  #", "## #", "# ##", "#  #", "#  #"]),
    ('O', &[" # ", "# #", "# #", "# #", " # "]),
    ('P', &["## ", "# #", "## ", "#  ", "#  "]),
    ('Q', &[" # ", "# #", "# #", " ##", "  #"]),
    ('R', &["## ", "# #", "## ", "# #", "# #"]),
    ('S', &[" ##", "#  ", " # ", "  #", "## "]),
    ('T', &["###", " # ", " # ", " # ", " # "]),
    ('U', &["# #", "# #", "# #", "# #", "###"]),
    ('V', &["# #", "# #", "# #", "# #", " # "]),
    ('W', &["#   #", "#   #", "# # #", "## ##", "#   #"]),
    ('X', &["# #", "# #", " # ", "# #", "# #"]),
    ('Y', &["# #", "# #", " # ", " # ", " # "]),
    ('Z', &["###", "  #", " # ", "#  ", "###"]),
    ('0', &["###", "# #", "# #", "# #", "###"]),
    ('1', &[" # ", "## ", " # ", " # ", "###"]),
    ('2', &["## ", "  #", " # ", "#  ", "###"]),
    ('3', &["## ", "  #", " # ", "  #", "## "]),
    ('4', &["# #", "# #", "###", "  #", "  #"]),
    ('5', &["###", "#  ", "## ", "  #", "## "]),
    ('6', &[" ##", "#  ", "###", "# #", "###"]),
    ('7', &["###", "  #", " # ", " # ", " # "]),
    ('8', &["###", "# #", "###", "# #", "###"]),
    ('9', &["###", "# #", "###", "  #", "## "]),
    (' ', &["  ", "  ", "  ", "  ", "  "]),
    ('!', &["#", "#", "#", " ", "#"]),
    ('?', &["## ", "  #", " # ", "   ", " # "]),
    ('.', &[" ", " ", " ", " ", "#"]),
    (',', &["  ", "  ", "  ", " #", "# "]),
    (':', &[" ", "#", " ", "#", " "]),
    (';', &["  ", " #", "  ", " #", "# "]),
    ('\'', &["#", "#", " ", " ", " "]),
    ('"', &["# #", "# #", "   ", "   ", "   "]),
    ('-', &["   ", "   ", "###", "   ", "   "]),
    ('_', &["   ", "   ", "   ", "   ", "###"]),
    ('+', &["   ", " # ", "###", " # ", "   "]),
    ('=', &["   ", "###", "   ", "###", "   "]),
    ('*', &["# #", " # ", "# #", "   ", "   "]),
    ('/', &["  #", "  #", " # ", "#  ", "#  "]),
    ('\\', &["#  ", "#  ", " # ", "  #", "  #"]),
    ('|', &["#", "#", "#", "#", "#"]),
    ('(', &[" #", "# ", "# ", "# ", " #"]),
    (')', &["# ", " #", " #", " #", "# "]),
    ('[', &["##", "# ", "# ", "# ", "##"]),
    (']', &["##", " #", " #", " #", "##"]),
    ('<', &["  #", " # ", "#  ", " # ", "  #"]),
    ('>', &["#  ", " # ", "  #", " # ", "#  "]),
    ('^', &[" # ", "# #", "   ", "   ", "   "]),
    ('~', &["   ", " ##", "## ", "   ", "   "]),
    ('#', &["# #", "###", "# #", "###", "# #"]),
    ('&', &[" # ", "# #", " # ", "# #", " ##"]),
    ('@', &[" ## ", "#  #", "# ##", "#   ", " ## "]),
    ('%', &["# #", "  #", " # ", "#  ", "# #"]),
    ('$', &[" ##", "## ", " # ", " ##", "## "]),
];

#[rustfmt::skip]
const MINI: GlyphTable = &[
    ('A', &["###", "###", "# #"]),
    ('B', &["## ", "###", "###"]),
    ('C', &["###", "#  ", "###"]),
    ('D', &["## ", "# #", "## "]),
    ('E', &["###", "## ", "###"]),
    ('F', &["###", "## ", "#  "]),
    ('G', &["## ", "# #", "###"]),
    ('H', &["# #", "###", "# #"]),
    ('I', &["###", " # ", "###"]),
    ('J', &["  #", "# #", "###"]),
    ('K', &["# #", "## ", "# #"]),
    ('L', &["#  ", "#  ", "###"]),
    ('M', &["## ##", "# # #", "#   #"]),
    ('N', &["## ", "# #", "# #"]),
    ('O', &["###", "# #", "###"]),
    ('P', &["###", "###", "#  "]),
    ('Q', &["###", "###", "  #"]),
    ('R', &["## ", "## ", "# #"]),
    ('S', &[" ##", " # ", "## "]),
    ('T', &["###", " # ", " # "]),
    ('U', &["# #", "# #", "###"]),
    ('V', &["# #", "# #", " # "]),
    ('W', &["#   #", "# # #", " # # "]),
    ('X', &["# #", " # ", "# #"]),
    ('Y', &["# #", " # ", " # "]),
    ('Z', &["## ", " # ", " ##"]),
    ('0', &["## ", "# #", " ##"]),
    ('1', &["## ", " # ", "###"]),
    ('2', &["## ", " # ", " ##"]),
    ('3', &["###", " ##", "###"]),
    ('4', &["# #", "###", "  #"]),
    ('5', &[" ##", " # ", "## "]),
    ('6', &["#  ", "###", "###"]),
    ('7', &["###", "  #", "  #"]),
    ('8', &["## ", "###", " ##"]),
    ('9', &["###", "###", "  #"]),
    (' ', &["  ", "  ", "  "]),
    ('!', &["#", "#", " "]),
    ('?', &["###", "  #", " # "]),
    ('.', &[" ", " ", "#"]),
    (':', &["#", " ", "#"]),
    ('-', &["   ", "###", "   "]),
    ('/', &["  #", " # ", "#  "]),
    ('\\', &["#  ", " # ", "  #"]),
];

fn from_table(name: &str, height: usize, table: GlyphTable) -> PixelFont {
    let glyphs: HashMap<char, Vec<String>> = table
        .iter()
        .map(|(ch, rows)| (*ch, rows.iter().map(|row| row.to_string()).collect()))
        .collect();
    PixelFont {
        name: name.to_string(),
        height,
        letter_spacing: 1,
        line_spacing: 1,
        glyphs,
    }
}

/// All built-in fonts
pub fn fonts() -> Vec<PixelFont> {
    vec![
        from_table("standard", 5, STANDARD),
        from_table("mini", 3, MINI),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_fit_font_height() {
        for font in fonts() {
            for ch in font.glyphs.keys() {
                let rows = font.glyph(*ch).unwrap();
                assert!(
                    rows.len() <= font.height(),
                    "{} '{}' is too tall",
                    font.name(),
                    ch
                );
            }
        }
    }

    #[test]
    fn test_fallback_glyphs_present() {
        for font in fonts() {
            assert!(font.glyph('?').is_some(), "{} lacks '?'", font.name());
            assert!(font.glyph(' ').is_some(), "{} lacks ' '", font.name());
            assert!(font.glyph('\\').is_some(), "{} lacks '\\'", font.name());
        }
    }

    #[test]
    fn test_full_alphabet() {
        for font in fonts() {
            for ch in ('A'..='Z').chain('0'..='9') {
                assert!(font.glyph(ch).is_some(), "{} lacks '{}'", font.name(), ch);
            }
        }
    }
}
