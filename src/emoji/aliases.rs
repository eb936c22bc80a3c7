//! Common emoji short codes
//!
//! Sorted by name for binary search.

#[rustfmt::skip]
pub(super) const ALIASES: &[(&str, &str)] = &[
    ("+1", "👍"),
    ("100", "💯"),
    ("apple", "🍎"),
    ("balloon", "🎈"),
    ("bee", "🐝"),
    ("black_large_square", "⬛"),
    ("blue_heart", "💙"),
    ("blue_square", "🟦"),
    ("boom", "💥"),
    ("brown_square", "🟫"),
    ("cactus", "🌵"),
    ("cake", "🍰"),
    ("cat", "🐱"),
    ("cherry_blossom", "🌸"),
    ("clap", "👏"),
    ("cloud", "☁\u{FE0F}"),
    ("cookie", "🍪"),
    ("crown", "👑"),
    ("dog", "🐶"),
    ("doughnut", "🍩"),
    ("eyes", "👀"),
    ("fire", "🔥"),
    ("four_leaf_clover", "🍀"),
    ("gem", "💎"),
    ("ghost", "👻"),
    ("green_heart", "💚"),
    ("green_square", "🟩"),
    ("heart", "❤\u{FE0F}"),
    ("herb", "🌿"),
    ("jack_o_lantern", "🎃"),
    ("large_blue_circle", "🔵"),
    ("large_green_circle", "🟢"),
    ("leaves", "🍃"),
    ("moon", "🌙"),
    ("orange_heart", "🧡"),
    ("orange_square", "🟧"),
    ("party_popper", "🎉"),
    ("pizza", "🍕"),
    ("purple_heart", "💜"),
    ("purple_square", "🟪"),
    ("rainbow", "🌈"),
    ("red_circle", "🔴"),
    ("red_square", "🟥"),
    ("rocket", "🚀"),
    ("rose", "🌹"),
    ("seedling", "🌱"),
    ("skull", "💀"),
    ("smile", "😄"),
    ("snowflake", "❄\u{FE0F}"),
    ("sparkles", "✨"),
    ("star", "⭐"),
    ("sun", "☀\u{FE0F}"),
    ("sunflower", "🌻"),
    ("tada", "🎉"),
    ("thumbsup", "👍"),
    ("tulip", "🌷"),
    ("unicorn", "🦄"),
    ("white_large_square", "⬜"),
    ("white_square", "⬜"),
    ("yellow_heart", "💛"),
    ("yellow_square", "🟨"),
    ("zap", "⚡"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted() {
        assert!(ALIASES.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
