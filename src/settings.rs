use anyhow::{anyhow, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::common::constants::{
    DEFAULT_UTM_CAMPAIGN, DEFAULT_UTM_MEDIUM, DEFAULT_UTM_SOURCE, UTM_CAMPAIGN_KEY,
    UTM_MEDIUM_KEY, UTM_SOURCE_KEY,
};

fn default_source() -> String {
    DEFAULT_UTM_SOURCE.to_string()
}

fn default_medium() -> String {
    DEFAULT_UTM_MEDIUM.to_string()
}

fn default_campaign() -> String {
    DEFAULT_UTM_CAMPAIGN.to_string()
}

/// The UTM values injected into untagged links. Built once at startup.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UtmSettings {
    #[serde(rename = "utm_source", default = "default_source")]
    pub source: String,
    #[serde(rename = "utm_medium", default = "default_medium")]
    pub medium: String,
    #[serde(rename = "utm_campaign", default = "default_campaign")]
    pub campaign: String,
}

impl Default for UtmSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            medium: default_medium(),
            campaign: default_campaign(),
        }
    }
}

impl UtmSettings {
    pub fn new(source: &str, medium: &str, campaign: &str) -> Self {
        Self {
            source: source.to_string(),
            medium: medium.to_string(),
            campaign: campaign.to_string(),
        }
    }

    pub fn load(settings_file: &str) -> Result<Self> {
        let path = Path::new(settings_file);
        if !path.exists() {
            return Err(anyhow!(
                "Settings file not found at '{}'. Exiting...",
                settings_file
            ));
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", settings_file))?;

        let settings: UtmSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", settings_file))?;
        settings.validate()?;

        info!("Settings loaded from '{}'.", settings_file);
        Ok(settings)
    }

    /// Like `load`, but a missing file means the built-in values.
    pub fn load_or_default(settings_file: &str) -> Result<Self> {
        if !Path::new(settings_file).exists() {
            info!(
                "No settings file at '{}'. Using built-in UTM values.",
                settings_file
            );
            return Ok(Self::default());
        }
        Self::load(settings_file)
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in self.pairs() {
            if value.trim().is_empty() {
                return Err(anyhow!("Setting '{}' must not be empty", key));
            }
        }
        Ok(())
    }

    /// Key/value pairs in the order they are appended to URLs
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            (UTM_SOURCE_KEY, self.source.as_str()),
            (UTM_MEDIUM_KEY, self.medium.as_str()),
            (UTM_CAMPAIGN_KEY, self.campaign.as_str()),
        ]
    }
}
