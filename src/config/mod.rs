//! Configuration file management
//!
//! Loads TOML configuration files and provides banner defaults.
//! Default config path: ~/.config/emoji-banner/config.toml

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_FONT, DEFAULT_SEED};
use crate::emoji::resolve_emoji_alias;
use crate::fill::FillMode;
use crate::output::OutputFormat;

/// Environment variable overriding the config path
const CONFIG_ENV: &str = "EMOJI_BANNER_CONFIG";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Banner defaults
    pub banner: BannerConfig,
    /// Path settings
    pub paths: PathConfig,
}

/// Banner defaults (overridden by command line flags)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Font name ("standard", "mini" or a font from fonts_dir)
    pub font: String,
    /// Fill mode: "random" | "row" | "column" | "row-gradient" | "column-gradient"
    /// Unknown names fall back to the first emoji
    pub mode: FillMode,
    /// Foreground emoji (single string or array; `:short_code:` allowed)
    #[serde(deserialize_with = "deserialize_emoji_list")]
    pub emoji: Vec<String>,
    /// Background emoji (empty = theme/default, "none" = blank)
    pub background: String,
    /// Border emoji (empty = no border)
    pub border: String,
    /// Theme: "default" | "github"
    pub theme: String,
    /// Seed for random fills
    pub seed: u32,
    /// Stack characters vertically
    pub vertical: bool,
    /// Output format: "text" | "slack"
    pub format: OutputFormat,
}

/// Path settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Directory with extra TOML fonts (~ expanded)
    pub fonts_dir: String,
}

/// Emoji list deserializer: accepts string or array
fn deserialize_emoji_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct EmojiListVisitor;

    impl<'de> Visitor<'de> for EmojiListVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or array of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut items = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                items.push(item);
            }
            Ok(items)
        }
    }

    deserializer.deserialize_any(EmojiListVisitor)
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            mode: FillMode::Random,
            emoji: vec![":fire:".to_string()],
            background: String::new(),
            border: String::new(),
            theme: "default".to_string(),
            seed: DEFAULT_SEED,
            vertical: false,
            format: OutputFormat::Text,
        }
    }
}

impl BannerConfig {
    /// Configured emoji, each entry split and resolved
    pub fn resolved_emoji(&self) -> Vec<SmolStr> {
        self.emoji
            .iter()
            .flat_map(|entry| crate::emoji::parse_emoji_list(entry))
            .collect()
    }

    /// Configured border, `None` when empty
    pub fn resolved_border(&self) -> Option<SmolStr> {
        let border = self.border.trim();
        (!border.is_empty()).then(|| resolve_emoji_alias(border))
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            fonts_dir: "~/.config/emoji-banner/fonts".to_string(),
        }
    }
}

impl PathConfig {
    /// fonts_dir with a leading `~` expanded
    pub fn fonts_dir(&self) -> PathBuf {
        expand_home(&self.fonts_dir)
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

impl Config {
    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        // 1. EMOJI_BANNER_CONFIG environment variable
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let p = Path::new(&path);
            if p.exists() {
                return Some(p.to_path_buf());
            }
        }

        // 2. User config: ~/.config/emoji-banner/config.toml
        default_config_path().filter(|path| path.exists())
    }

    /// Load configuration with priority:
    /// 1. EMOJI_BANNER_CONFIG environment variable
    /// 2. ~/.config/emoji-banner/config.toml (user config)
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {:#}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Serialize as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write config to `path`, creating parent directories
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = format!(
            "# emoji-banner configuration\n# Command line flags override these values.\n\n{}",
            self.to_toml()?
        );
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Write default config to the user config path
    pub fn write_default_config() -> Result<PathBuf> {
        let path = default_config_path()
            .ok_or_else(|| anyhow::anyhow!("Config directory not found"))?;
        Self::default().write_to(&path)?;
        Ok(path)
    }
}

/// Get default config file path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("emoji-banner").join("config.toml"))
}
