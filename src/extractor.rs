use ego_tree::NodeId;
use log::{debug, warn};
use scraper::{Html, Node, Selector};

use crate::link_utils::is_eligible;

/// An `<a href>` found in the document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub node: NodeId,
    pub href: String,
}

/// A new `href` value for one anchor node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub node: NodeId,
    pub href: String,
}

/// Parsed HTML owned for the length of one run.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            debug!("HTML parser recovered from {} error(s)", html.errors.len());
        }
        Self { html }
    }

    /// Every anchor carrying an href, eligible or not.
    pub fn candidates<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = Anchor> + 'a {
        self.html.select(selector).filter_map(|element| {
            element.value().attr("href").map(|href| Anchor {
                node: element.id(),
                href: href.to_string(),
            })
        })
    }

    /// Absolute web links that are not static resources. `on_candidate`
    /// sees every anchor, eligible or not, before filtering.
    pub fn eligible_links<'a, F>(
        &'a self,
        selector: &'a Selector,
        mut on_candidate: F,
    ) -> impl Iterator<Item = Anchor> + 'a
    where
        F: FnMut(&Anchor) + 'a,
    {
        self.candidates(selector)
            .inspect(move |anchor| on_candidate(anchor))
            .filter(|anchor| is_eligible(&anchor.href))
    }

    /// Returns how many hrefs were actually replaced.
    pub fn apply_rewrites(&mut self, rewrites: &[Rewrite]) -> usize {
        let mut applied = 0;
        for rewrite in rewrites {
            let Some(mut node) = self.html.tree.get_mut(rewrite.node) else {
                warn!("Anchor node {:?} no longer exists", rewrite.node);
                continue;
            };
            let Node::Element(element) = node.value() else {
                warn!("Node {:?} is not an element", rewrite.node);
                continue;
            };

            let mut replaced = false;
            for (name, value) in element.attrs.iter_mut() {
                if &*name.local == "href" {
                    *value = rewrite.href.as_str().into();
                    replaced = true;
                    break;
                }
            }

            if replaced {
                applied += 1;
            } else {
                warn!("Anchor node {:?} has no href attribute", rewrite.node);
            }
        }
        applied
    }

    pub fn serialize(&self) -> String {
        self.html.html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> Selector {
        Selector::parse("a[href]").unwrap()
    }

    const PAGE: &str = r#"<html><head><link href="https://x.test/site.css"></head><body>
<a href="https://x.test/one">One</a>
<a name="anchor-only">No href</a>
<a href="mailto:someone@example.com">Mail</a>
<a href="https://x.test/banner.gif">Banner</a>
<p><a href="http://x.test/two?b=1">Two</a></p>
</body></html>"#;

    #[test]
    fn test_candidates_in_document_order() {
        let selector = selector();
        let document = Document::parse(PAGE);
        let hrefs: Vec<String> = document.candidates(&selector).map(|a| a.href).collect();
        assert_eq!(
            hrefs,
            vec![
                "https://x.test/one",
                "mailto:someone@example.com",
                "https://x.test/banner.gif",
                "http://x.test/two?b=1",
            ]
        );
    }

    #[test]
    fn test_eligible_links_filtered() {
        let selector = selector();
        let document = Document::parse(PAGE);
        let mut seen = 0;
        let hrefs: Vec<String> = document
            .eligible_links(&selector, |_| seen += 1)
            .map(|a| a.href)
            .collect();
        assert_eq!(hrefs, vec!["https://x.test/one", "http://x.test/two?b=1"]);
        assert_eq!(seen, 4);
    }

    #[test]
    fn test_apply_rewrites_changes_only_targeted_hrefs() {
        let selector = selector();
        let mut document = Document::parse(PAGE);
        let target = document
            .eligible_links(&selector, |_| {})
            .find(|a| a.href == "https://x.test/one")
            .unwrap();

        let applied = document.apply_rewrites(&[Rewrite {
            node: target.node,
            href: "https://x.test/one?utm_source=S".to_string(),
        }]);
        assert_eq!(applied, 1);

        let html = document.serialize();
        assert!(html.contains(r#"<a href="https://x.test/one?utm_source=S">One</a>"#));
        assert!(html.contains(r#"<a href="http://x.test/two?b=1">Two</a>"#));
        assert!(html.contains(r#"<a href="mailto:someone@example.com">Mail</a>"#));
        assert!(html.contains(r#"<a name="anchor-only">No href</a>"#));
    }

    #[test]
    fn test_serialize_escapes_ampersands() {
        let selector = selector();
        let mut document = Document::parse(r#"<a href="https://x.test/">x</a>"#);
        let anchor = document.candidates(&selector).next().unwrap();
        document.apply_rewrites(&[Rewrite {
            node: anchor.node,
            href: "https://x.test/?a=1&b=2".to_string(),
        }]);
        assert!(document
            .serialize()
            .contains(r#"href="https://x.test/?a=1&amp;b=2""#));
    }

    #[test]
    fn test_entity_encoded_href_is_decoded() {
        let selector = selector();
        let document = Document::parse(r#"<a href="https://x.test/?a=1&amp;b=2">x</a>"#);
        let anchor = document.candidates(&selector).next().unwrap();
        assert_eq!(anchor.href, "https://x.test/?a=1&b=2");
    }
}
