//! emoji-banner - render text as a banner of emoji
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │          CLI + config (TOML)             │
//! ├──────────────────────────────────────────┤
//! │  Text  →  prepare_text  →  rasterize     │
//! │                               ↓          │
//! │            compose (Bitmap)              │
//! │                               ↓          │
//! │  FillConfig  →  render (BannerResult)    │
//! │                               ↓          │
//! │        text / Slack JSON / clipboard     │
//! └──────────────────────────────────────────┘
//! ```

mod banner;
mod cli;
mod config;
mod constants;
mod emoji;
mod error;
mod fill;
mod font;
mod output;
mod raster;
mod render;
mod text;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use crate::font::FontRegistry;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();

    // Config file generation mode
    if cli.init_config {
        return cli::init_config(cli.force);
    }

    // Load config file
    let cfg = config::Config::load();

    // Fonts: built-in, then user font directory
    let mut registry = FontRegistry::builtin();
    let fonts_dir = cfg.paths.fonts_dir();
    match registry.load_dir(&fonts_dir) {
        Ok(0) => debug!("No user fonts in {}", fonts_dir.display()),
        Ok(count) => info!("Loaded {} user font(s) from {}", count, fonts_dir.display()),
        Err(e) => warn!("Failed to scan font directory: {}", e),
    }

    if cli.list_fonts {
        for name in registry.list_font_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let raw = cli.read_text()?;
    let options = cli.run_options(&cfg.banner)?;
    debug!("Run options: {:?}", options);

    let font = registry.get_font(&options.font)?;
    let result = banner::generate_banner(&raw, font, options.vertical, &options.fill)
        .context("Failed to render banner")?;
    if result.bitmap.is_empty() {
        warn!("Nothing to draw: the text has no foreground pixels in '{}'", options.font);
    }
    info!(
        "Rendered {}x{} banner ({} foreground cells, cell width {}, background {})",
        result.width,
        result.height,
        result.bitmap.foreground_count(),
        result.cell_width,
        result.background.as_deref().unwrap_or("blank")
    );

    let rendered = output::format_result(&result, options.format)
        .context("Failed to format output")?;
    println!("{}", rendered);

    if cli.copy {
        match output::clipboard::copy(&rendered) {
            Ok(()) => info!("Copied banner to clipboard"),
            Err(e) => warn!("Clipboard copy failed: {:#}", e),
        }
    }

    Ok(())
}
