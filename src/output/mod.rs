//! Banner output
//!
//! Handles:
//! - Plain text and Slack Block Kit formatting
//! - Optional clipboard copy

pub mod clipboard;
pub mod slack;

use serde::{Deserialize, Serialize};

use crate::render::BannerResult;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lines of emoji
    #[default]
    Text,
    /// Slack Block Kit JSON
    Slack,
}

/// Format a banner for printing
pub fn format_result(result: &BannerResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(result.text.clone()),
        OutputFormat::Slack => slack::to_json(result),
    }
}
