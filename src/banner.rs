//! Text to banner in one call
//!
//! ```text
//! raw text ──► prepare_text ──► rasterize_line (per line) ──► compose
//!                                                               │
//!                               FillConfig ──► render ◄─────────┘
//!                                                │
//!                                           BannerResult
//! ```

use crate::error::Result;
use crate::font::PixelFont;
use crate::raster::build_bitmap;
use crate::render::{render, BannerResult, FillConfig};

/// Render `text` with `font` and `fill`
///
/// Pure: the same inputs always give byte-identical output.
pub fn generate_banner(
    text: &str,
    font: &PixelFont,
    vertical: bool,
    fill: &FillConfig,
) -> Result<BannerResult> {
    fill.validate()?;
    let bitmap = build_bitmap(text, font, vertical)?;
    render(&bitmap, fill)
}
