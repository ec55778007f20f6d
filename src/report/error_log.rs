use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::common::types::MalformedLink;

/// One `<href>\t<reason>` line per malformed link.
pub fn write_error_log(path: &Path, malformed: &[MalformedLink]) -> Result<()> {
    let content: String = malformed
        .iter()
        .map(|link| format!("{}\t{}\n", link.href, link.reason))
        .collect();
    fs::write(path, content)
        .with_context(|| format!("Failed to write error log: {}", path.display()))?;
    info!(
        "Logged {} malformed URL(s) to {}",
        malformed.len(),
        path.display()
    );
    Ok(())
}
