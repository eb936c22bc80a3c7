//! Global constants for emoji-banner
//!
//! Consolidates input limits, rendering defaults and Unicode range constants
//! to eliminate magic numbers throughout the codebase.

// ============================================================================
// Input Limits
// ============================================================================

/// Maximum number of display characters (grapheme clusters, line breaks excluded)
pub const MAX_INPUT_CHARS: usize = 100;

/// Maximum length of a custom emoji alias token (without colons)
pub const MAX_ALIAS_LEN: usize = 64;

// ============================================================================
// Rendering Defaults
// ============================================================================

/// Default seed for the fill generator (fixed for reproducible output)
pub const DEFAULT_SEED: u32 = 42;

/// Minimum display width of one banner cell
pub const MIN_CELL_WIDTH: usize = 2;

/// Character marking a foreground pixel in font patterns
pub const GLYPH_MARKER: char = '#';

/// Background emoji used when neither the user nor the theme picks one
pub const DEFAULT_BACKGROUND: &str = "⬜";

/// Number of theme intensity levels (level 0 is the background)
pub const THEME_LEVELS: usize = 5;

/// Font used when none is configured
pub const DEFAULT_FONT: &str = "standard";

// ============================================================================
// Unicode Code Points
// ============================================================================

/// Ideographic (full-width) space
pub const FULLWIDTH_SPACE: char = '\u{3000}';

/// Variation Selector-16 (emoji presentation)
pub const EMOJI_VARIATION_SELECTOR: char = '\u{FE0F}';

/// Regional indicator symbols range (flag halves)
pub const REGIONAL_INDICATOR_START: u32 = 0x1F1E6;
pub const REGIONAL_INDICATOR_END: u32 = 0x1F1FF;

// ============================================================================
// Helper Functions for Unicode Range Checks
// ============================================================================

/// Check if a code point is a regional indicator symbol
#[inline]
pub const fn is_regional_indicator(cp: u32) -> bool {
    cp >= REGIONAL_INDICATOR_START && cp <= REGIONAL_INDICATOR_END
}
