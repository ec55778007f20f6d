use url::form_urlencoded;

use crate::settings::UtmSettings;

/// An href cut at the first `#`, then at the first `?` before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    /// Scheme, authority and path, untouched
    pub base: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl UrlParts<'_> {
    pub fn with_query(&self, query: &str) -> String {
        let mut url = String::with_capacity(self.base.len() + query.len() + 1);
        url.push_str(self.base);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        if let Some(fragment) = self.fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}

pub fn split_url(href: &str) -> UrlParts<'_> {
    let (rest, fragment) = match href.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (href, None),
    };
    let (base, query) = match rest.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (rest, None),
    };
    UrlParts {
        base,
        query,
        fragment,
    }
}

/// Re-encode the existing query pairs in order, then append
/// `utm_source`, `utm_medium` and `utm_campaign`. Spaces encode as `+`.
pub fn merge_utm(href: &str, settings: &UtmSettings) -> String {
    let parts = split_url(href);
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in form_urlencoded::parse(parts.query.unwrap_or("").as_bytes()) {
        serializer.append_pair(&key, &value);
    }
    for (key, value) in settings.pairs() {
        serializer.append_pair(key, value);
    }

    parts.with_query(&serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> UtmSettings {
        UtmSettings::new("S", "M", "C")
    }

    #[test]
    fn test_split_url() {
        let parts = split_url("https://x.test/a/b?c=1&d=2#top");
        assert_eq!(parts.base, "https://x.test/a/b");
        assert_eq!(parts.query, Some("c=1&d=2"));
        assert_eq!(parts.fragment, Some("top"));

        let parts = split_url("https://x.test/a#frag?not=query");
        assert_eq!(parts.base, "https://x.test/a");
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, Some("frag?not=query"));
    }

    #[test]
    fn test_merge_appends_in_order() {
        assert_eq!(
            merge_utm("http://x.test/a?b=1", &settings()),
            "http://x.test/a?b=1&utm_source=S&utm_medium=M&utm_campaign=C"
        );
    }

    #[test]
    fn test_merge_without_query() {
        assert_eq!(
            merge_utm("https://X.Test", &settings()),
            "https://X.Test?utm_source=S&utm_medium=M&utm_campaign=C"
        );
        assert_eq!(
            merge_utm("https://x.test/page?", &settings()),
            "https://x.test/page?utm_source=S&utm_medium=M&utm_campaign=C"
        );
    }

    #[test]
    fn test_merge_keeps_fragment_and_repeated_keys() {
        assert_eq!(
            merge_utm("https://x.test/p?tag=a&page=2&tag=b#comments", &settings()),
            "https://x.test/p?tag=a&page=2&tag=b&utm_source=S&utm_medium=M&utm_campaign=C#comments"
        );
    }

    #[test]
    fn test_merge_reencodes_spaces_as_plus() {
        let settings = UtmSettings::new("news letter", "e/mail", "spring&sale");
        assert_eq!(
            merge_utm("https://x.test/?q=a%20b", &settings),
            "https://x.test/?q=a+b&utm_source=news+letter&utm_medium=e%2Fmail&utm_campaign=spring%26sale"
        );
    }
}
