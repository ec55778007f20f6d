use anyhow::{anyhow, Result};
use url::Url;

/// Reject hrefs the URL parser cannot make sense of, or that carry no host.
pub fn check_well_formed(href: &str) -> Result<()> {
    let parsed = Url::parse(href).map_err(|e| anyhow!("unparsable URL: {}", e))?;
    if !parsed.has_host() {
        return Err(anyhow!("URL has no host"));
    }
    Ok(())
}
