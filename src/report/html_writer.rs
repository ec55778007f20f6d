use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

use crate::extractor::Document;

/// Overwrites any existing file at `path`.
pub fn save_modified_html(document: &Document, path: &Path) -> Result<()> {
    let content = document.serialize();
    if path.exists() {
        debug!("Overwriting existing file: {}", path.display());
    }
    debug!("Writing {} bytes to file: {}", content.len(), path.display());
    fs::write(path, content)
        .with_context(|| format!("Failed to write modified HTML: {}", path.display()))?;
    Ok(())
}
