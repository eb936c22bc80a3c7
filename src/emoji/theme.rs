//! Named themes
//!
//! A theme either leaves candidate selection to the user (`default`) or
//! brings a fixed 5-level palette and intensity-based selection
//! (`github`). Level 0 is the background.

use thiserror::Error;

use crate::constants::THEME_LEVELS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown theme '{0}' (available: default, github)")]
    Unknown(String),
}

const GITHUB_PALETTE: [&str; THEME_LEVELS] = ["⬜", "🌱", "🌿", "🟩", "🌳"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Github,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Default, Theme::Github];

    pub fn from_name(name: &str) -> Result<Self, ThemeError> {
        let normalized = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == normalized)
            .ok_or_else(|| ThemeError::Unknown(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Github => "github",
        }
    }

    /// Fixed palette, `None` when the user's emoji are used
    pub fn palette(&self) -> Option<&'static [&'static str; THEME_LEVELS]> {
        match self {
            Theme::Default => None,
            Theme::Github => Some(&GITHUB_PALETTE),
        }
    }

    /// Background the theme prefers, if any
    pub fn background(&self) -> Option<&'static str> {
        self.palette().map(|palette| palette[0])
    }
}
