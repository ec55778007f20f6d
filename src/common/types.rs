use crate::link_utils::QueryParams;

/// Outcome of classifying one anchor href
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub original_href: String,
    pub is_eligible: bool,
    pub has_utm: bool,
    /// Set only when UTM parameters were added
    pub rewritten_href: Option<String>,
    /// Parameters of the original href, before any merge
    pub query_parameters: QueryParams,
}

impl LinkRecord {
    pub fn ineligible(href: &str) -> Self {
        Self {
            original_href: href.to_string(),
            is_eligible: false,
            has_utm: false,
            rewritten_href: None,
            query_parameters: QueryParams::default(),
        }
    }

    /// "Yes"/"No" as written in the report's UTM column
    pub fn utm_flag(&self) -> &'static str {
        if self.has_utm {
            "Yes"
        } else {
            "No"
        }
    }

}

/// An eligible href the URL parser rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLink {
    pub href: String,
    pub reason: String,
}

/// Processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub candidates: usize,
    pub eligible: usize,
    pub tagged: usize,
    pub rewritten: usize,
    pub malformed: usize,
}

impl ProcessingStats {
    pub fn skipped(&self) -> usize {
        self.candidates - self.eligible
    }

    pub fn tagged_rate(&self) -> f64 {
        if self.eligible == 0 {
            0.0
        } else {
            self.tagged as f64 / self.eligible as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link_utils::QueryParams;

    #[test]
    fn test_ineligible_record() {
        let record = LinkRecord::ineligible("mailto:someone@example.com");
        assert!(!record.is_eligible);
        assert!(!record.has_utm);
        assert!(record.rewritten_href.is_none());
        assert_eq!(record.query_parameters, QueryParams::default());
        assert_eq!(record.utm_flag(), "No");
    }

    #[test]
    fn test_stats_rates() {
        let stats = ProcessingStats {
            candidates: 10,
            eligible: 4,
            tagged: 1,
            rewritten: 3,
            malformed: 0,
        };
        assert_eq!(stats.skipped(), 6);
        assert_eq!(stats.tagged_rate(), 25.0);
        assert_eq!(ProcessingStats::default().tagged_rate(), 0.0);
    }
}
