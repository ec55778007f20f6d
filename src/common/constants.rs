/// Default campaign values used when no settings file overrides them
pub const DEFAULT_UTM_SOURCE: &str = "almost-timely-newsletter";
pub const DEFAULT_UTM_MEDIUM: &str = "email";
pub const DEFAULT_UTM_CAMPAIGN: &str = "almost-timely-newsletter-2024-02-11";

/// Optional settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Query keys starting with this prefix count as UTM tracking parameters
pub const UTM_PREFIX: &str = "utm_";

/// Keys appended to untagged links, in this order
pub const UTM_SOURCE_KEY: &str = "utm_source";
pub const UTM_MEDIUM_KEY: &str = "utm_medium";
pub const UTM_CAMPAIGN_KEY: &str = "utm_campaign";

/// Scheme prefixes a link must start with to be processed
pub const WEB_SCHEMES: &[&str] = &["http:", "https:"];

/// Static resources are matched by suffix on the whole href, query included
pub const RESOURCE_EXTENSIONS: &[&str] = &[".jpg", ".png", ".gif", ".css", ".js"];

pub const ANCHOR_SELECTOR: &str = "a[href]";

/// Report layout
pub const CSV_HEADER: [&str; 3] = ["Input URL", "UTM Codes", "Query Parameters"];
pub const CSV_EXT: &str = "csv";
pub const MODIFIED_SUFFIX: &str = "-modified";
pub const ERRORS_FILE: &str = "errors.txt";

/// Timestamp embedded in report file names
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Progress bar template
pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}";

/// Progress bar characters
pub const PROGRESS_BAR_CHARS: &str = "#>-";
