//! Command-line interface
//!
//! Parses arguments and merges them over the config file values.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use crate::config::{BannerConfig, Config};
use crate::emoji::{parse_emoji_list, resolve_emoji_alias, Theme};
use crate::error::BannerError;
use crate::fill::FillMode;
use crate::output::OutputFormat;
use crate::render::{Background, FillConfig};

/// emoji-banner - render text as a banner of emoji
#[derive(Parser, Debug)]
#[command(name = "emoji-banner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text to render (a literal \n starts a new line)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short = 'F', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Font name (see --list-fonts)
    #[arg(short, long, value_name = "NAME")]
    pub font: Option<String>,

    /// Foreground emoji, comma separated (:short_code: allowed)
    #[arg(short, long, value_name = "LIST")]
    pub emoji: Option<String>,

    /// Background emoji ("none" for blank cells)
    #[arg(short, long, value_name = "EMOJI")]
    pub background: Option<String>,

    /// Frame the banner with this emoji
    #[arg(long, value_name = "EMOJI")]
    pub border: Option<String>,

    /// Fill mode: random, row, column, row-gradient, column-gradient
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Theme: default, github
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Seed for random fills
    #[arg(short, long, value_name = "N")]
    pub seed: Option<u32>,

    /// Stack characters vertically
    #[arg(short, long)]
    pub vertical: bool,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Copy the output to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// List available fonts and exit
    #[arg(long)]
    pub list_fonts: bool,

    /// Write a default config file and exit
    #[arg(long)]
    pub init_config: bool,

    /// Overwrite an existing config file without asking
    #[arg(long, requires = "init_config")]
    pub force: bool,
}

/// Settings for one run after merging flags over config
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub font: String,
    pub vertical: bool,
    pub format: OutputFormat,
    pub fill: FillConfig,
}

impl Cli {
    /// Raw banner text from the argument or `--file`
    pub fn read_text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read text file: {}", path.display()))?;
            return Ok(content.trim_end_matches(['\r', '\n']).to_string());
        }
        Err(BannerError::EmptyInput).context("Pass TEXT or --file PATH")
    }

    /// Merge flags over the `[banner]` config section
    pub fn run_options(&self, banner: &BannerConfig) -> Result<RunOptions> {
        let mode = match self.mode.as_deref() {
            Some(name) => FillMode::parse(name).unwrap_or_else(|| {
                warn!("Unknown fill mode '{}', using the first emoji", name);
                FillMode::First
            }),
            None => banner.mode,
        };

        let theme_name = self.theme.as_deref().unwrap_or(&banner.theme);
        let theme = Theme::from_name(theme_name)?;

        let candidates = match self.emoji.as_deref() {
            Some(list) => parse_emoji_list(list),
            None => banner.resolved_emoji(),
        };

        let background = Background::from_user(
            self.background.as_deref().unwrap_or(&banner.background),
        );

        let border = match self.border.as_deref().map(str::trim) {
            Some("") => None,
            Some(border) => Some(resolve_emoji_alias(border)),
            None => banner.resolved_border(),
        };

        Ok(RunOptions {
            font: self.font.clone().unwrap_or_else(|| banner.font.clone()),
            vertical: self.vertical || banner.vertical,
            format: self.format.unwrap_or(banner.format),
            fill: FillConfig {
                candidates,
                background,
                border,
                mode,
                theme,
                seed: self.seed.unwrap_or(banner.seed),
            },
        })
    }
}

/// `--init-config`: write defaults, asking before overwriting
pub fn init_config(force: bool) -> Result<()> {
    if let Some(config_path) = crate::config::default_config_path() {
        if config_path.exists() && !force {
            println!("Config file already exists: {}", config_path.display());
            print!("Overwrite? [y/N]: ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            let input = input.trim().to_lowercase();

            if input != "y" && input != "yes" {
                println!("Aborted.");
                return Ok(());
            }
        }
    }

    let path = Config::write_default_config()?;
    println!("Config file generated:");
    println!("  Path: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smol_str::SmolStr;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("emoji-banner").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "HI", "-e", ":star:,🌈", "-m", "row", "-t", "github", "-s", "7", "--border", "🟦",
            "--format", "slack", "-v",
        ]);
        let opts = cli.run_options(&BannerConfig::default()).unwrap();
        assert_eq!(opts.fill.candidates, vec![SmolStr::new("⭐"), SmolStr::new("🌈")]);
        assert_eq!(opts.fill.mode, FillMode::Row);
        assert_eq!(opts.fill.theme, Theme::Github);
        assert_eq!(opts.fill.seed, 7);
        assert_eq!(opts.fill.border, Some(SmolStr::new("🟦")));
        assert_eq!(opts.format, OutputFormat::Slack);
        assert!(opts.vertical);
    }

    #[test]
    fn test_config_used_without_flags() {
        let cli = parse(&["HI"]);
        let opts = cli.run_options(&BannerConfig::default()).unwrap();
        assert_eq!(opts.font, "standard");
        assert_eq!(opts.fill.candidates, vec![SmolStr::new("🔥")]);
        assert_eq!(opts.fill.background, Background::Auto);
        assert_eq!(opts.fill.border, None);
        assert_eq!(opts.format, OutputFormat::Text);
    }

    #[test]
    fn test_unknown_mode_is_lenient() {
        let cli = parse(&["HI", "--mode", "spiral"]);
        let opts = cli.run_options(&BannerConfig::default()).unwrap();
        assert_eq!(opts.fill.mode, FillMode::First);
    }

    #[test]
    fn test_unknown_theme_is_error() {
        let cli = parse(&["HI", "--theme", "neon"]);
        assert!(cli.run_options(&BannerConfig::default()).is_err());
    }

    #[test]
    fn test_missing_text_is_empty_input() {
        let err = parse(&[]).read_text().unwrap_err();
        assert_eq!(err.downcast_ref::<BannerError>(), Some(&BannerError::EmptyInput));
    }

    #[test]
    fn test_text_and_file_conflict() {
        let args = ["emoji-banner", "HI", "--file", "x.txt"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_read_text_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.txt");
        std::fs::write(&path, "HELLO\nWORLD\n").unwrap();
        let cli = parse(&["--file", path.to_str().unwrap()]);
        assert_eq!(cli.read_text().unwrap(), "HELLO\nWORLD");
    }

    #[test]
    fn test_force_requires_init_config() {
        assert!(Cli::try_parse_from(["emoji-banner", "--force"]).is_err());
    }
}
