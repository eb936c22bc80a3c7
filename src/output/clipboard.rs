//! System clipboard

use anyhow::Result;

/// Copy `text` to the system clipboard
#[cfg(feature = "clipboard")]
pub fn copy(text: &str) -> Result<()> {
    use anyhow::Context;

    let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write clipboard")?;
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy(_text: &str) -> Result<()> {
    anyhow::bail!("Clipboard support not built in (rebuild with --features clipboard)")
}
