//! Boilerplate removal over a mutable kuchiki document.
//!
//! Rules come from [`NoiseSpec`] and are applied in a fixed order:
//! 1. one traversal emptying elements by tag name, else by `id`
//! 2. detaching `div` elements that carry a noisy marker
//! 3. detaching `span` elements that carry a noisy marker
//!
//! Emptied elements stay in the tree so sibling structure is preserved for the
//! lookups that follow. Detached elements are gone together with their subtree.

use kuchiki::iter::NodeIterator;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use crate::config::NoiseSpec;

/// Counts of rule hits, reported at debug level
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NoiseStats {
    pub emptied: usize,
    pub removed: usize,
}

/// Apply every removal rule to `document` exactly once.
pub(crate) fn strip_noise(document: &NodeRef, spec: &NoiseSpec) -> NoiseStats {
    let mut stats = NoiseStats::default();

    // Must collect before iteration because emptying detaches descendants
    let elements: Vec<NodeDataRef<ElementData>> = document.descendants().elements().collect();
    for element in elements {
        let emptied_by_tag = spec.empties_tag(&element.name.local);
        let emptied_by_id = !emptied_by_tag
            && element_id(&element).is_some_and(|id| spec.empties_id(&id));
        if emptied_by_tag || emptied_by_id {
            empty_contents(element.as_node());
            stats.emptied += 1;
        }
    }

    for marker in &spec.removed_div_markers {
        stats.removed += remove_marked(document, "div", marker);
    }
    for marker in &spec.removed_span_markers {
        stats.removed += remove_marked(document, "span", marker);
    }

    stats
}

/// Find the first element whose `id` equals `id`, in document order.
pub(crate) fn find_by_id(document: &NodeRef, id: &str) -> Option<NodeDataRef<ElementData>> {
    document
        .descendants()
        .elements()
        .find(|element| element_id(element).as_deref() == Some(id))
}

/// All `tag` elements carrying `marker` as a class token or as their `id`.
pub(crate) fn find_marked(
    document: &NodeRef,
    tag: &str,
    marker: &str,
) -> Vec<NodeDataRef<ElementData>> {
    document
        .descendants()
        .elements()
        .filter(|element| &*element.name.local == tag && has_marker(element, marker))
        .collect()
}

/// Drop every child of `node`, leaving it as an empty element.
pub(crate) fn empty_contents(node: &NodeRef) {
    while let Some(child) = node.first_child() {
        child.detach();
    }
}

/// Detach `node` and its subtree from the document.
pub(crate) fn remove_subtree(node: &NodeRef) {
    node.detach();
}

fn remove_marked(document: &NodeRef, tag: &str, marker: &str) -> usize {
    let matches = find_marked(document, tag, marker);
    for element in &matches {
        remove_subtree(element.as_node());
    }
    matches.len()
}

fn element_id(element: &ElementData) -> Option<String> {
    element.attributes.borrow().get("id").map(String::from)
}

fn has_marker(element: &ElementData, marker: &str) -> bool {
    let attrs = element.attributes.borrow();
    attrs.get("id") == Some(marker)
        || attrs
            .get("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchiki::traits::TendrilSink;

    fn parse(html: &str) -> NodeRef {
        kuchiki::parse_html().one(html)
    }

    #[test]
    fn test_emptied_tag_keeps_node() {
        let doc = parse(r#"<div id="x"><ul><li>menu</li></ul><p>text</p></div>"#);
        let stats = strip_noise(&doc, &NoiseSpec::default());

        assert!(stats.emptied >= 1);
        assert!(doc.select_first("ul").is_ok());
        assert!(!doc.text_contents().contains("menu"));
        assert!(doc.text_contents().contains("text"));
    }

    #[test]
    fn test_emptied_id_is_tag_independent() {
        let doc = parse(r#"<p id="siteSub">From Wikipedia</p><section id="catlinks">Cats</section><p>kept</p>"#);
        strip_noise(&doc, &NoiseSpec::default());

        let text = doc.text_contents();
        assert!(!text.contains("From Wikipedia"));
        assert!(!text.contains("Cats"));
        assert!(text.contains("kept"));
    }

    #[test]
    fn test_div_marker_matches_class_or_id() {
        let doc = parse(
            r#"<div class="hatnote noprint">by class</div><div id="noprint">by id</div><p class="noprint">not a div</p>"#,
        );
        let stats = strip_noise(&doc, &NoiseSpec::default());

        assert_eq!(stats.removed, 2);
        let text = doc.text_contents();
        assert!(!text.contains("by class"));
        assert!(!text.contains("by id"));
        assert!(text.contains("not a div"));
    }

    #[test]
    fn test_span_marker_removes_subtree() {
        let doc = parse(r#"<h2><span class="mw-headline"><b>History</b></span></h2><p>body</p>"#);
        strip_noise(&doc, &NoiseSpec::default());

        assert!(doc.select_first("span").is_err());
        assert!(!doc.text_contents().contains("History"));
    }

    #[test]
    fn test_marker_must_be_whole_class_token() {
        let doc = parse(r#"<div class="noprintable">stays</div>"#);
        let stats = strip_noise(&doc, &NoiseSpec::default());

        assert_eq!(stats.removed, 0);
        assert!(doc.text_contents().contains("stays"));
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let doc = parse(r#"<div id="bodyContent">first</div><div id="bodyContent">second</div>"#);
        let region = find_by_id(&doc, "bodyContent").expect("region present");
        assert_eq!(region.text_contents(), "first");
        assert!(find_by_id(&doc, "missing").is_none());
    }
}
