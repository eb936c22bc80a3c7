//! Error types for the banner pipeline
//!
//! Every failure is fail-fast: no partial banner is ever returned.

use thiserror::Error;

/// Errors raised while turning text into a banner
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BannerError {
    /// Text missing, or nothing left after decoding/sanitizing
    #[error("Input text is empty")]
    EmptyInput,

    /// No foreground emoji to fill with
    #[error("At least one emoji is required")]
    NoCandidates,

    /// Options that cannot be combined
    #[error("Conflicting options: {0}")]
    ConfigurationConflict(String),

    /// Rows of a bitmap do not share one length
    #[error("Bitmap row {row} has {found} columns, expected {expected}")]
    JaggedBitmap {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result alias for the banner pipeline
pub type Result<T> = std::result::Result<T, BannerError>;
