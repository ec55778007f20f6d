use anyhow::{Context, Result};
use log::debug;

use crate::common::types::LinkRecord;
use crate::link_utils::{check_well_formed, is_eligible, merge_utm, split_url, QueryParams};
use crate::settings::UtmSettings;

/// Decides, per href, whether UTM parameters are present and what the
/// tagged URL should be. Has no side effects on the document.
pub struct Classifier<'a> {
    settings: &'a UtmSettings,
}

impl<'a> Classifier<'a> {
    pub fn new(settings: &'a UtmSettings) -> Self {
        Self { settings }
    }

    /// Ineligible hrefs come back unclassified; malformed ones are errors.
    pub fn classify(&self, href: &str) -> Result<LinkRecord> {
        if !is_eligible(href) {
            debug!("Not a taggable web link: {}", href);
            return Ok(LinkRecord::ineligible(href));
        }

        check_well_formed(href).with_context(|| format!("Malformed URL '{}'", href))?;

        let query_parameters = QueryParams::parse(split_url(href).query.unwrap_or(""));
        let has_utm = query_parameters.has_utm();

        let rewritten_href = if has_utm {
            debug!("Already tagged: {}", href);
            None
        } else {
            let merged = merge_utm(href, self.settings);
            debug!("Tagging {} -> {}", href, merged);
            Some(merged)
        };

        Ok(LinkRecord {
            original_href: href.to_string(),
            is_eligible: true,
            has_utm,
            rewritten_href,
            query_parameters,
        })
    }
}
