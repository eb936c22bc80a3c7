//! TOML font files
//!
//! ```toml
//! name = "tiny"          # optional, defaults to the file stem
//! height = 3
//! letter_spacing = 1     # optional
//! line_spacing = 1       # optional
//!
//! [glyphs]
//! "A" = [" # ", "###", "# #"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::{FontError, PixelFont};

#[derive(Debug, Deserialize)]
struct FontFile {
    name: Option<String>,
    height: usize,
    #[serde(default = "default_spacing")]
    letter_spacing: usize,
    #[serde(default = "default_spacing")]
    line_spacing: usize,
    #[serde(default)]
    glyphs: BTreeMap<String, Vec<String>>,
}

fn default_spacing() -> usize {
    1
}

/// Parse font source; `path` names the font when the file has no `name`
pub fn parse_font(source: &str, path: &Path) -> Result<PixelFont, FontError> {
    let file: FontFile = toml::from_str(source).map_err(|source| FontError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let name = file.name.unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let mut font = PixelFont::new(name, file.height, file.letter_spacing, file.line_spacing)?;
    for (key, rows) in file.glyphs {
        let mut chars = key.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => return Err(FontError::InvalidGlyphKey(key)),
        };
        font = font.with_glyph(ch, rows)?;
    }
    Ok(font)
}

/// Read and parse one font file
pub fn load_font_file(path: &Path) -> Result<PixelFont, FontError> {
    let source = std::fs::read_to_string(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_font(&source, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_font_defaults() {
        let src = r##"
height = 2
[glyphs]
"A" = ["#", "#"]
"b" = [" #"]
"##;
        let font = parse_font(src, Path::new("fonts/tall.toml")).unwrap();
        assert_eq!(font.name(), "tall");
        assert_eq!(font.height(), 2);
        assert_eq!(font.letter_spacing(), 1);
        assert_eq!(font.line_spacing(), 1);
        assert_eq!(font.glyph_count(), 2);
        assert_eq!(font.glyph('b').unwrap(), &[" #".to_string()]);
    }

    #[test]
    fn test_parse_font_explicit_name() {
        let src = "name = \"Wide\"\nheight = 1\nletter_spacing = 3\nline_spacing = 0\n";
        let font = parse_font(src, Path::new("x.toml")).unwrap();
        assert_eq!(font.name(), "Wide");
        assert_eq!(font.letter_spacing(), 3);
        assert_eq!(font.line_spacing(), 0);
    }

    #[test]
    fn test_parse_font_rejects_multi_char_key() {
        let src = "height = 1\n[glyphs]\nAB = [\"#\"]\n";
        assert!(matches!(
            parse_font(src, Path::new("x.toml")),
            Err(FontError::InvalidGlyphKey(k)) if k == "AB"
        ));
    }

    #[test]
    fn test_parse_font_rejects_tall_glyph() {
        let src = "height = 1\n[glyphs]\nA = [\"#\", \"#\"]\n";
        assert!(matches!(
            parse_font(src, Path::new("x.toml")),
            Err(FontError::GlyphTooTall { .. })
        ));
    }

    #[test]
    fn test_parse_font_syntax_error() {
        assert!(matches!(
            parse_font("height = ", Path::new("x.toml")),
            Err(FontError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_font_file(Path::new("/nonexistent/font.toml")),
            Err(FontError::Read { .. })
        ));
    }
}
