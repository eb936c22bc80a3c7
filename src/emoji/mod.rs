//! Emoji lookups
//!
//! Handles:
//! - `:short_code:` to emoji resolution
//! - Parsing user emoji lists
//! - Themes and their palettes

mod aliases;
pub mod theme;

use smol_str::SmolStr;

use crate::constants::DEFAULT_BACKGROUND;

pub use theme::Theme;

/// Resolve a `:name:` short code; anything else is returned unchanged
///
/// Unknown short codes are kept as typed so chat clients can render
/// workspace custom emoji.
pub fn resolve_emoji_alias(token: &str) -> SmolStr {
    let name = token
        .strip_prefix(':')
        .and_then(|t| t.strip_suffix(':'))
        .unwrap_or("");
    match aliases::ALIASES.binary_search_by(|(alias, _)| (*alias).cmp(name)) {
        Ok(index) if !name.is_empty() => SmolStr::new(aliases::ALIASES[index].1),
        _ => SmolStr::new(token),
    }
}

/// Split a user emoji list on commas/whitespace and resolve each token
pub fn parse_emoji_list(list: &str) -> Vec<SmolStr> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(resolve_emoji_alias)
        .collect()
}

/// Background used when nothing else picks one
pub fn default_background() -> SmolStr {
    SmolStr::new(DEFAULT_BACKGROUND)
}
