//! Text measurement
//!
//! Handles:
//! - Grapheme cluster segmentation (Unicode-aware or code point fallback)
//! - Display width of clusters and emoji tokens (1 or 2 cells)

pub mod segment;
pub mod width;

pub use segment::default_segmenter;
pub use width::display_width;
