//! Pixel fonts and font registry
//!
//! Handles:
//! - Fixed-height pattern fonts (built-in and TOML font files)
//! - Font lookup by name
//! - Glyph pattern resolution with fallback glyphs

pub mod builtin;
pub mod error;
pub mod loader;
pub mod resolve;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use log::{debug, info, warn};

pub use error::FontError;
pub use resolve::resolve_pattern;

/// Fixed-height bitmap font
///
/// Each glyph is a list of pattern rows; `#` marks a foreground pixel, any
/// other character is background. Rows missing at the bottom of a glyph are
/// background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFont {
    name: String,
    height: usize,
    letter_spacing: usize,
    line_spacing: usize,
    glyphs: HashMap<char, Vec<String>>,
}

impl PixelFont {
    /// Create a font without glyphs
    pub fn new(
        name: impl Into<String>,
        height: usize,
        letter_spacing: usize,
        line_spacing: usize,
    ) -> Result<Self, FontError> {
        if height == 0 {
            return Err(FontError::ZeroHeight);
        }
        Ok(Self {
            name: name.into(),
            height,
            letter_spacing,
            line_spacing,
            glyphs: HashMap::new(),
        })
    }

    /// Add or replace the pattern for one character
    pub fn with_glyph(mut self, ch: char, rows: Vec<String>) -> Result<Self, FontError> {
        if rows.len() > self.height {
            return Err(FontError::GlyphTooTall {
                ch,
                rows: rows.len(),
                height: self.height,
            });
        }
        self.glyphs.insert(ch, rows);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rows every rasterized line has
    pub fn height(&self) -> usize {
        self.height
    }

    /// Background columns between two characters
    pub fn letter_spacing(&self) -> usize {
        self.letter_spacing
    }

    /// Background rows between two lines
    pub fn line_spacing(&self) -> usize {
        self.line_spacing
    }

    /// Pattern for exactly this character (no fallback)
    pub fn glyph(&self, ch: char) -> Option<&[String]> {
        self.glyphs.get(&ch).map(Vec::as_slice)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

/// Read-only set of named fonts
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    fonts: BTreeMap<String, PixelFont>,
}

impl FontRegistry {
    /// Registry with the fonts compiled into the binary
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for font in builtin::fonts() {
            registry.insert(font);
        }
        registry
    }

    /// Add a font, replacing any font of the same name
    pub fn insert(&mut self, font: PixelFont) {
        let key = font.name().to_lowercase();
        if self.fonts.insert(key, font).is_some() {
            debug!("FontRegistry: replaced existing font");
        }
    }

    /// Load every `*.toml` font in `dir`
    ///
    /// A missing directory is not an error. Broken font files are skipped
    /// with a warning. Returns the number of fonts added.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, FontError> {
        if !dir.is_dir() {
            debug!("Font directory not found: {}", dir.display());
            return Ok(0);
        }

        let entries = std::fs::read_dir(dir).map_err(|source| FontError::Read {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<_> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match loader::load_font_file(&path) {
                Ok(font) => {
                    info!(
                        "Loaded font '{}' ({} glyphs) from {}",
                        font.name(),
                        font.glyph_count(),
                        path.display()
                    );
                    self.insert(font);
                    loaded += 1;
                }
                Err(e) => {
                    warn!("Skipping font file {}: {}", path.display(), e);
                }
            }
        }
        Ok(loaded)
    }

    /// Look up a font by name (case-insensitive)
    pub fn get_font(&self, name: &str) -> Result<&PixelFont, FontError> {
        self.fonts
            .get(&name.to_lowercase())
            .ok_or_else(|| FontError::UnknownFont(name.to_string()))
    }

    /// Sorted font names
    pub fn list_font_names(&self) -> Vec<&str> {
        self.fonts.values().map(PixelFont::name).collect()
    }
}
