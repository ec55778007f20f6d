use crate::common::constants::{RESOURCE_EXTENSIONS, WEB_SCHEMES};

pub fn is_web_link(href: &str) -> bool {
    WEB_SCHEMES.iter().any(|scheme| href.starts_with(scheme))
}

/// Suffix match on the whole href, so `icon.png?v=2` is not a resource.
pub fn is_resource(href: &str) -> bool {
    RESOURCE_EXTENSIONS.iter().any(|ext| href.ends_with(ext))
}

pub fn is_eligible(href: &str) -> bool {
    is_web_link(href) && !is_resource(href)
}
