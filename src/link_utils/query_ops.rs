use url::form_urlencoded;

use crate::common::constants::UTM_PREFIX;

/// Decoded query parameters, keyed in order of first appearance.
///
/// A repeated key keeps one entry and collects its values in parse order.
/// Pairs with an empty value (`a=` or a bare `a`) are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    pub fn parse(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            params.push(key.into_owned(), value.into_owned());
        }
        params
    }

    fn push(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// True when any key starts with `utm_`, whichever one it is.
    pub fn has_utm(&self) -> bool {
        self.keys().any(|key| key.starts_with(UTM_PREFIX))
    }

    /// Report form: `key=v1,v2&key2=v3`
    pub fn flatten(&self) -> String {
        self.entries
            .iter()
            .map(|(key, values)| format!("{}={}", key, values.join(",")))
            .collect::<Vec<_>>()
            .join("&")
    }
}
