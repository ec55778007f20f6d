use anyhow::{anyhow, Context, Result};
use indicatif::ProgressStyle;
use log::debug;
use scraper::Selector;

use crate::common::constants::{ANCHOR_SELECTOR, PROGRESS_BAR_CHARS, PROGRESS_BAR_TEMPLATE};

/// Components every run needs, built before any input is read.
#[derive(Clone)]
pub struct Toolkit {
    pub anchor_selector: Selector,
    pub progress_style: ProgressStyle,
}

/// Fails with a diagnostic naming the component that could not start.
pub fn check() -> Result<Toolkit> {
    debug!("Checking HTML parser and progress display...");

    let anchor_selector = Selector::parse(ANCHOR_SELECTOR).map_err(|e| {
        anyhow!(
            "HTML parser is unavailable: could not build the '{}' selector ({:?}). \
             Rebuild the tool with the scraper crate available and rerun.",
            ANCHOR_SELECTOR,
            e
        )
    })?;

    let progress_style = ProgressStyle::default_bar()
        .template(PROGRESS_BAR_TEMPLATE)
        .context(
            "Progress display is unavailable: the progress bar template was rejected. \
             Rebuild the tool with the indicatif crate available and rerun.",
        )?
        .progress_chars(PROGRESS_BAR_CHARS);

    debug!("Startup checks passed");
    Ok(Toolkit {
        anchor_selector,
        progress_style,
    })
}
