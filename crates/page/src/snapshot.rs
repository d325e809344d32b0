//! Element trees captured from a live browser.
//!
//! A snapshot is one JSON object per element:
//!
//! ```json
//! { "tag": "div", "attributes": [["id", "main"]], "text": "Hi",
//!   "style": { "display": "flex", "backgroundColor": "rgb(255, 255, 255)" },
//!   "children": [], "selected": true }
//! ```
//!
//! Style keys may be kebab or camel case. `text` is the element's
//! `textContent`; without it the children's text is concatenated.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use css::{SelectorTree, query_selector};
use log::{debug, info, warn};
use schema::{ElementTree, SelectionSource, StyleProvider, kebab_case};
use serde::Deserialize;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// One captured element as it appears in the JSON file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SnapshotNode {
    pub tag: String,
    /// `svg` or a namespace URI; anything else is HTML.
    pub namespace: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub style: HashMap<String, String>,
    pub children: Vec<SnapshotNode>,
    pub selected: bool,
}

#[derive(Debug)]
struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    /// Kebab-case keys.
    style: HashMap<String, String>,
    parent: Option<usize>,
    children: Vec<usize>,
    vector: bool,
}

/// A flattened snapshot. Handles are indices in document order; the root is 0.
#[derive(Debug)]
pub struct Snapshot {
    elements: Vec<Element>,
    selected: Option<usize>,
}

fn normalize_style_key(key: &str) -> String {
    if key.starts_with("--") {
        key.to_owned()
    } else {
        kebab_case(key.trim())
    }
}

fn is_svg_namespace(namespace: Option<&str>) -> bool {
    namespace.is_some_and(|value| value.eq_ignore_ascii_case("svg") || value == SVG_NAMESPACE)
}

impl Snapshot {
    pub const ROOT: usize = 0;

    /// Flatten a captured tree.
    ///
    /// # Errors
    /// When the root element has no tag.
    pub fn from_root(root: SnapshotNode) -> Result<Self> {
        if root.tag.trim().is_empty() {
            bail!("snapshot root element has no tag");
        }
        let mut snapshot = Self {
            elements: Vec::new(),
            selected: None,
        };
        snapshot.push(root, None, false);
        debug!("snapshot with {} elements", snapshot.elements.len());
        Ok(snapshot)
    }

    /// Parse a snapshot from JSON text.
    ///
    /// # Errors
    /// When the text is not a snapshot object.
    pub fn from_json(json: &str) -> Result<Self> {
        let root: SnapshotNode = serde_json::from_str(json).context("invalid snapshot JSON")?;
        Self::from_root(root)
    }

    /// Load a snapshot file.
    ///
    /// # Errors
    /// When the file cannot be read or is not a snapshot.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot from {}", path.display()))?;
        info!("loaded {} ({} bytes)", path.display(), json.len());
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn push(&mut self, node: SnapshotNode, parent: Option<usize>, inside_vector: bool) -> usize {
        let index = self.elements.len();
        let vector = inside_vector
            || is_svg_namespace(node.namespace.as_deref())
            || node.tag.eq_ignore_ascii_case("svg");
        if node.selected {
            if self.selected.is_some() {
                warn!("more than one selected element in snapshot, keeping the first");
            } else {
                self.selected = Some(index);
            }
        }
        self.elements.push(Element {
            tag: node.tag,
            attributes: node.attributes,
            text: node.text,
            style: node
                .style
                .into_iter()
                .map(|(key, value)| (normalize_style_key(&key), value))
                .collect(),
            parent,
            children: Vec::new(),
            vector,
        });
        for child in node.children {
            let child_index = self.push(child, Some(index), vector);
            if let Some(element) = self.elements.get_mut(index) {
                element.children.push(child_index);
            }
        }
        index
    }

    fn element(&self, handle: usize) -> Option<&Element> {
        self.elements.get(handle)
    }
}

impl SelectorTree for Snapshot {
    type Element = usize;

    fn parent(&self, element: usize) -> Option<usize> {
        self.element(element)?.parent
    }

    fn local_name(&self, element: usize) -> &str {
        self.element(element).map_or("", |found| found.tag.as_str())
    }

    fn attribute_value(&self, element: usize, name: &str) -> Option<&str> {
        ElementTree::attribute(self, element, name)
    }

    fn elements_in_order(&self) -> Vec<usize> {
        (0..self.elements.len()).collect()
    }
}

impl ElementTree for Snapshot {
    type Handle = usize;

    fn resolve(&self, selector: &str) -> Option<usize> {
        query_selector(self, selector)
    }

    fn tag_name(&self, element: usize) -> &str {
        self.local_name(element)
    }

    fn children(&self, element: usize) -> Vec<usize> {
        self.element(element)
            .map(|found| found.children.clone())
            .unwrap_or_default()
    }

    fn attributes(&self, element: usize) -> Vec<(&str, &str)> {
        self.element(element)
            .map(|found| {
                found
                    .attributes
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn text_content(&self, element: usize) -> String {
        let Some(found) = self.element(element) else {
            return String::new();
        };
        match &found.text {
            Some(text) => text.clone(),
            None => found
                .children
                .iter()
                .map(|&child| self.text_content(child))
                .collect(),
        }
    }

    fn is_vector_graphics(&self, element: usize) -> bool {
        self.element(element).is_some_and(|found| found.vector)
    }
}

impl StyleProvider for Snapshot {
    type Handle = usize;

    fn resolved_value(&self, element: usize, property: &str) -> String {
        self.element(element)
            .and_then(|found| found.style.get(property))
            .cloned()
            .unwrap_or_default()
    }
}

impl SelectionSource for Snapshot {
    type Handle = usize;

    fn selected(&self) -> Option<usize> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPTURE: &str = r#"{
        "tag": "div",
        "attributes": [["id", "root"], ["class", "card wide"]],
        "style": { "display": "flex", "flexDirection": "column", "--gap": "4px" },
        "children": [
            { "tag": "span", "text": "Hello", "selected": true },
            { "tag": "svg", "namespace": "http://www.w3.org/2000/svg",
              "children": [{ "tag": "path", "attributes": [["d", "M0 0"]] }] },
            { "tag": "p", "text": "Bye", "selected": true }
        ]
    }"#;

    #[test]
    fn capture_flattens_in_document_order() {
        let snapshot = Snapshot::from_json(CAPTURE).unwrap();
        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot.children(Snapshot::ROOT), vec![1, 2, 4]);
        assert_eq!(snapshot.parent(3), Some(2));
        assert_eq!(snapshot.id(Snapshot::ROOT), Some("root"));
        assert_eq!(snapshot.class_list(Snapshot::ROOT), vec!["card", "wide"]);
        assert_eq!(snapshot.text_content(Snapshot::ROOT), "HelloBye");
    }

    #[test]
    fn style_keys_are_kebab_cased() {
        let snapshot = Snapshot::from_json(CAPTURE).unwrap();
        assert_eq!(snapshot.resolved_value(Snapshot::ROOT, "flex-direction"), "column");
        assert_eq!(snapshot.resolved_value(Snapshot::ROOT, "--gap"), "4px");
        assert_eq!(snapshot.resolved_value(Snapshot::ROOT, "color"), "");
        assert_eq!(snapshot.resolved_value(99, "display"), "");
    }

    #[test]
    fn vector_graphics_cover_the_whole_svg_subtree() {
        let snapshot = Snapshot::from_json(CAPTURE).unwrap();
        assert!(!snapshot.is_vector_graphics(1));
        assert!(snapshot.is_vector_graphics(2));
        assert!(snapshot.is_vector_graphics(3));
    }

    #[test]
    fn first_selected_element_wins() {
        let snapshot = Snapshot::from_json(CAPTURE).unwrap();
        assert_eq!(snapshot.selected(), Some(1));
    }

    #[test]
    fn selectors_resolve_against_the_capture() {
        let snapshot = Snapshot::from_json(CAPTURE).unwrap();
        assert_eq!(snapshot.resolve("#root > svg path"), Some(3));
        assert_eq!(snapshot.resolve(".card p"), Some(4));
        assert_eq!(snapshot.resolve("section"), None);
    }

    #[test]
    fn rootless_or_malformed_captures_are_rejected() {
        assert!(Snapshot::from_json(r#"{ "children": [] }"#).is_err());
        assert!(Snapshot::from_json("[1, 2]").is_err());
    }
}
