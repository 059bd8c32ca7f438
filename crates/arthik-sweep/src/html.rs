//! HTML adapter for the text sweep.
//!
//! Adapts a parsed HTML document to the [`TextSurface`] contract: text nodes
//! outside non-content elements plus `placeholder` attributes of input-like
//! elements. Rewrites happen in place on the parsed tree.

use ego_tree::{NodeId, NodeRef};
use scraper::{Html, Node};

use crate::surface::{RegionId, TextRegion, TextSurface};

/// Element names whose text content is never user-facing copy.
const SKIPPED_ELEMENTS: [&str; 5] = ["script", "style", "noscript", "template", "head"];

/// Element names carrying translatable `placeholder` attributes.
const PLACEHOLDER_ELEMENTS: [&str; 2] = ["input", "textarea"];

/// Where a region's text lives within its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    TextNode,
    Placeholder,
}

#[derive(Debug)]
struct HtmlRegion {
    node: NodeId,
    slot: Slot,
    text: String,
}

/// A parsed HTML document exposed as a sweep surface.
pub struct HtmlSurface {
    document: Html,
    regions: Vec<HtmlRegion>,
}

impl HtmlSurface {
    /// Parse a document and collect its text-bearing regions.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut regions = Vec::new();
        for node in document.tree.nodes() {
            match node.value() {
                Node::Text(text) => {
                    if text.trim().is_empty() || within_skipped_element(node) {
                        continue;
                    }
                    regions.push(HtmlRegion {
                        node: node.id(),
                        slot: Slot::TextNode,
                        text: text.to_string(),
                    });
                }
                Node::Element(element)
                    if PLACEHOLDER_ELEMENTS.contains(&element.name()) =>
                {
                    if let Some(placeholder) = element.attr("placeholder") {
                        regions.push(HtmlRegion {
                            node: node.id(),
                            slot: Slot::Placeholder,
                            text: placeholder.to_string(),
                        });
                    }
                }
                _ => {}
            }
        }
        Self { document, regions }
    }

    /// Serialize the (possibly rewritten) document.
    #[must_use]
    pub fn html(&self) -> String {
        self.document.root_element().html()
    }
}

impl TextSurface for HtmlSurface {
    fn scan(&self) -> Vec<TextRegion> {
        self.regions
            .iter()
            .enumerate()
            .map(|(index, region)| TextRegion {
                id: RegionId::new(index),
                text: region.text.clone(),
            })
            .collect()
    }

    fn apply(&mut self, id: RegionId, translated: &str) {
        let Some(region) = self.regions.get(id.index()) else {
            return;
        };
        let Some(mut node) = self.document.tree.get_mut(region.node) else {
            return;
        };
        match (region.slot, node.value()) {
            (Slot::TextNode, Node::Text(text)) => {
                text.text = translated.into();
            }
            (Slot::Placeholder, Node::Element(element)) => {
                let name = element
                    .attrs
                    .iter()
                    .find(|(name, _)| name.local.as_ref() == "placeholder")
                    .map(|(name, _)| name.clone());
                if let Some(name) = name {
                    element.attrs.insert(name, translated.into());
                }
            }
            _ => {}
        }
    }
}

/// Whether a text node sits inside an element whose content is not copy.
fn within_skipped_element(node: NodeRef<'_, Node>) -> bool {
    node.ancestors().any(|ancestor| {
        ancestor
            .value()
            .as_element()
            .is_some_and(|element| SKIPPED_ELEMENTS.contains(&element.name()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
<html>
<head><title>Arthik</title><style>body { color: red; }</style></head>
<body>
  <h1>Total Balance</h1>
  <p>₹1,234.56</p>
  <button>Add Expense</button>
  <button>Add Expense</button>
  <input type="text" placeholder="Search expenses" />
  <script>console.log("Add Expense");</script>
</body>
</html>"#;

    #[test]
    fn scan_collects_text_and_placeholders_but_skips_scripts() {
        let surface = HtmlSurface::parse(PAGE);
        let texts: Vec<String> = surface
            .scan()
            .into_iter()
            .map(|region| region.text.trim().to_string())
            .collect();
        assert!(texts.contains(&"Total Balance".to_string()));
        assert!(texts.contains(&"Search expenses".to_string()));
        assert_eq!(
            texts
                .iter()
                .filter(|text| text.as_str() == "Add Expense")
                .count(),
            2
        );
        assert!(!texts.iter().any(|text| text.contains("console.log")));
        assert!(!texts.contains(&"Arthik".to_string()));
    }

    #[test]
    fn apply_rewrites_text_nodes_in_place() {
        let mut surface = HtmlSurface::parse(PAGE);
        let regions = surface.scan();
        let target = regions
            .iter()
            .find(|region| region.text.trim() == "Total Balance")
            .expect("region present");
        surface.apply(target.id, "कुल शेष");

        let html = surface.html();
        assert!(html.contains("कुल शेष"));
        assert!(!html.contains("Total Balance"));
    }

    #[test]
    fn apply_rewrites_placeholder_attributes() {
        let mut surface = HtmlSurface::parse(PAGE);
        let regions = surface.scan();
        let target = regions
            .iter()
            .find(|region| region.text.trim() == "Search expenses")
            .expect("placeholder present");
        surface.apply(target.id, "खर्च खोजें");

        let html = surface.html();
        assert!(html.contains(r#"placeholder="खर्च खोजें""#));
    }

    #[test]
    fn unknown_region_ids_are_ignored() {
        let mut surface = HtmlSurface::parse("<p>Hi there</p>");
        surface.apply(RegionId::new(99), "ignored");
        assert!(surface.html().contains("Hi there"));
    }
}
