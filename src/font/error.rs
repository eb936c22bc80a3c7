use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Unknown font '{0}'")]
    UnknownFont(String),

    #[error("Font height must be at least 1")]
    ZeroHeight,

    #[error("Invalid glyph key '{0}' (expected exactly one character)")]
    InvalidGlyphKey(String),

    #[error("Glyph '{ch}' has {rows} rows, font height is {height}")]
    GlyphTooTall {
        ch: char,
        rows: usize,
        height: usize,
    },

    #[error("Failed to read font file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse font file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
