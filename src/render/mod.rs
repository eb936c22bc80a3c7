//! Bitmap + fill decision to text lines
//!
//! Every cell is padded to one display width, anchored to the widest
//! foreground emoji, so rows line up no matter which glyphs land where.

pub mod cell;

use smol_str::SmolStr;

use crate::constants::THEME_LEVELS;
use crate::emoji::{default_background, resolve_emoji_alias, Theme};
use crate::error::{BannerError, Result};
use crate::fill::{select_emoji, theme_intensity, Candidates, CellPos, FillMode, SeededRandom};
use crate::raster::Bitmap;
use crate::text::display_width;

pub use cell::{cell_width, fit_cell};

/// Background choice for empty cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Background {
    /// Theme background, else the generic default
    #[default]
    Auto,
    /// This emoji
    Emoji(SmolStr),
    /// Blank cells
    Transparent,
}

impl Background {
    /// Parse a user value: empty means `Auto`, `none` means `Transparent`
    pub fn from_user(value: &str) -> Self {
        match value.trim() {
            "" => Background::Auto,
            v if v.eq_ignore_ascii_case("none") => Background::Transparent,
            v => Background::Emoji(resolve_emoji_alias(v)),
        }
    }
}

/// How to fill a bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillConfig {
    /// Foreground emoji, in order (ignored when the theme has a palette)
    pub candidates: Vec<SmolStr>,
    pub background: Background,
    /// Frame the banner with this emoji
    pub border: Option<SmolStr>,
    pub mode: FillMode,
    pub theme: Theme,
    pub seed: u32,
}

impl FillConfig {
    /// Fail on option combinations that can never render
    pub fn validate(&self) -> Result<()> {
        if self.border.is_some() && self.background == Background::Transparent {
            return Err(BannerError::ConfigurationConflict(
                "a border needs a background emoji".to_string(),
            ));
        }
        if self.theme.palette().is_none() && self.candidates.is_empty() {
            return Err(BannerError::NoCandidates);
        }
        Ok(())
    }
}

/// Rendered banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerResult {
    /// Lines joined with `\n`
    pub text: String,
    pub lines: Vec<String>,
    /// Background emoji drawn, `None` when cells are blank
    pub background: Option<SmolStr>,
    /// Bitmap columns (border excluded)
    pub width: usize,
    /// Bitmap rows (border excluded)
    pub height: usize,
    /// Display width of one cell
    pub cell_width: usize,
    pub bitmap: Bitmap,
}

/// Where foreground emoji come from, fixed once per render
enum CellSource {
    Palette([SmolStr; THEME_LEVELS]),
    User {
        candidates: Candidates,
        mode: FillMode,
    },
}

impl CellSource {
    fn resolve(config: &FillConfig) -> Result<Self> {
        match config.theme.palette() {
            Some(palette) => Ok(CellSource::Palette((*palette).map(SmolStr::new))),
            None => Ok(CellSource::User {
                candidates: Candidates::new(config.candidates.clone())?,
                mode: config.mode,
            }),
        }
    }

    fn foreground(&self) -> Vec<&str> {
        match self {
            CellSource::Palette(levels) => levels[1..].iter().map(SmolStr::as_str).collect(),
            CellSource::User { candidates, .. } => candidates.iter().map(SmolStr::as_str).collect(),
        }
    }

    fn pick(&self, pos: CellPos, rng: &mut SeededRandom) -> &SmolStr {
        match self {
            CellSource::Palette(levels) => &levels[theme_intensity(pos.row, pos.col, rng)],
            CellSource::User { candidates, mode } => select_emoji(candidates, pos, *mode, rng),
        }
    }
}

/// Turn a bitmap into aligned emoji lines
pub fn render(bitmap: &Bitmap, config: &FillConfig) -> Result<BannerResult> {
    config.validate()?;
    let source = CellSource::resolve(config)?;

    let background = match &config.background {
        Background::Emoji(emoji) => Some(emoji.clone()),
        Background::Auto => Some(
            config
                .theme
                .background()
                .map(SmolStr::new)
                .unwrap_or_else(default_background),
        ),
        Background::Transparent => None,
    };

    let width = cell_width(source.foreground());
    // too wide for a cell: drawn as blanks
    let background = background.filter(|bg| display_width(bg) <= width);
    let background_cell = fit_cell(background.as_deref().unwrap_or(""), width);
    let border_cell = config.border.as_deref().map(|b| fit_cell(b, width));

    let total_rows = bitmap.height();
    let total_cols = bitmap.width();
    let mut rng = SeededRandom::new(config.seed);

    let mut lines: Vec<String> = Vec::with_capacity(total_rows + 2);
    let border_line = border_cell
        .as_ref()
        .map(|cell| cell.repeat(total_cols + 2));

    if let Some(line) = &border_line {
        lines.push(line.clone());
    }

    for (row, cells) in bitmap.rows().iter().enumerate() {
        let mut line = String::new();
        if let Some(cell) = &border_cell {
            line.push_str(cell);
        }
        for (col, &on) in cells.iter().enumerate() {
            if on {
                let pos = CellPos {
                    row,
                    col,
                    total_rows,
                    total_cols,
                };
                line.push_str(&fit_cell(source.pick(pos, &mut rng), width));
            } else {
                line.push_str(&background_cell);
            }
        }
        if let Some(cell) = &border_cell {
            line.push_str(cell);
        }
        lines.push(line);
    }

    if let Some(line) = border_line {
        lines.push(line);
    }

    Ok(BannerResult {
        text: lines.join("\n"),
        lines,
        background,
        width: total_cols,
        height: total_rows,
        cell_width: width,
        bitmap: bitmap.clone(),
    })
}
