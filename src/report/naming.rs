use anyhow::{anyhow, Result};
use log::debug;
use std::path::Path;

use crate::common::constants::{CSV_EXT, MODIFIED_SUFFIX};

fn base_name(input: &Path) -> Result<String> {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .ok_or_else(|| anyhow!("Input path '{}' has no file name", input.display()))
}

/// `<base>-<YYYY-MM-DD-HH-MM-SS>.csv`
pub fn report_file_name(input: &Path, timestamp: &str) -> Result<String> {
    let name = format!("{}-{}.{}", base_name(input)?, timestamp, CSV_EXT);
    debug!("Report file name: {}", name);
    Ok(name)
}

/// `<base>-modified<ext>`, keeping the input's extension (if any)
pub fn modified_file_name(input: &Path) -> Result<String> {
    let extension = input
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let name = format!("{}{}{}", base_name(input)?, MODIFIED_SUFFIX, extension);
    debug!("Modified document file name: {}", name);
    Ok(name)
}
