//! A parsed HTML page with computed styles.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use css::{ComputedStyles, query_selector};
use html::{DOM, Namespace, NodeId};
use log::{debug, info};
use schema::{ElementTree, SelectionSource, StyleProvider};

/// A document and the styles computed for it when it was loaded.
#[derive(Debug)]
pub struct Page {
    dom: DOM,
    styles: ComputedStyles,
    inspected: Option<NodeId>,
}

impl Page {
    pub fn from_html(html: &str) -> Self {
        let dom = DOM::parse(html);
        let styles = ComputedStyles::compute(&dom);
        debug!("page with {} styled elements", styles.len());
        Self {
            dom,
            styles,
            inspected: None,
        }
    }

    /// Load an HTML file.
    ///
    /// # Errors
    /// When the file cannot be read as UTF-8 text.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let html = fs::read_to_string(path)
            .with_context(|| format!("failed to read HTML from {}", path.display()))?;
        info!("loaded {} ({} bytes)", path.display(), html.len());
        Ok(Self::from_html(&html))
    }

    pub fn dom(&self) -> &DOM {
        &self.dom
    }

    pub fn styles(&self) -> &ComputedStyles {
        &self.styles
    }

    /// Mark `element` as the inspected element, or clear the mark.
    pub fn inspect(&mut self, element: Option<NodeId>) {
        self.inspected = element;
    }
}

impl ElementTree for Page {
    type Handle = NodeId;

    fn resolve(&self, selector: &str) -> Option<NodeId> {
        query_selector(&self.dom, selector)
    }

    fn tag_name(&self, element: NodeId) -> &str {
        self.dom.tag_name(element).unwrap_or_default()
    }

    fn id(&self, element: NodeId) -> Option<&str> {
        self.dom.id(element)
    }

    fn class_list(&self, element: NodeId) -> Vec<&str> {
        self.dom.class_list(element)
    }

    fn children(&self, element: NodeId) -> Vec<NodeId> {
        self.dom.element_children(element)
    }

    fn attributes(&self, element: NodeId) -> Vec<(&str, &str)> {
        self.dom
            .attributes(element)
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }

    fn attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.dom.attribute(element, name)
    }

    fn text_content(&self, element: NodeId) -> String {
        self.dom.text_content(element)
    }

    fn is_vector_graphics(&self, element: NodeId) -> bool {
        self.dom.namespace(element) == Some(Namespace::Svg)
    }
}

impl StyleProvider for Page {
    type Handle = NodeId;

    fn resolved_value(&self, element: NodeId, property: &str) -> String {
        self.styles.resolved_value(element, property)
    }
}

impl SelectionSource for Page {
    type Handle = NodeId;

    fn selected(&self) -> Option<NodeId> {
        self.inspected
    }
}
