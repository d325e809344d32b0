//! In-memory element tree and style provider for driving the converter in tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::collections::HashMap;

use schema::{ElementTree, SelectionSource, StyleProvider, defaults};

/// Declarative element used to build a [`FakeDocument`].
#[derive(Clone, Debug, Default)]
pub struct El {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    style: HashMap<String, String>,
    children: Vec<El>,
}

impl El {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.style.insert(property.to_owned(), value.to_owned());
        self
    }

    pub fn child(mut self, child: El) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    style: HashMap<String, String>,
    children: Vec<usize>,
    vector: bool,
}

/// Flattened tree; handles are indices, the root is 0.
#[derive(Debug, Default)]
pub struct FakeDocument {
    nodes: Vec<Node>,
    selected: Option<usize>,
}

impl FakeDocument {
    pub fn new(root: El) -> Self {
        let mut document = Self::default();
        document.push(root, false);
        document
    }

    pub const ROOT: usize = 0;

    fn push(&mut self, element: El, inside_vector: bool) -> usize {
        let vector = inside_vector || element.tag.eq_ignore_ascii_case("svg");
        let index = self.nodes.len();
        self.nodes.push(Node {
            tag: element.tag,
            attributes: element.attributes,
            text: element.text,
            style: element.style,
            children: Vec::new(),
            vector,
        });
        for child in element.children {
            let child_index = self.push(child, vector);
            self.nodes[index].children.push(child_index);
        }
        index
    }

    pub fn select(&mut self, element: Option<usize>) {
        self.selected = element;
    }

    /// Handle of the first element with `id`.
    pub fn by_id(&self, id: &str) -> usize {
        self.resolve(&format!("#{id}")).unwrap()
    }
}

impl ElementTree for FakeDocument {
    type Handle = usize;

    fn resolve(&self, selector: &str) -> Option<usize> {
        let matches = |node: &Node| match selector.strip_prefix('#') {
            Some(id) => node
                .attributes
                .iter()
                .any(|(name, value)| name == "id" && value == id),
            None => node.tag == selector,
        };
        self.nodes.iter().position(matches)
    }

    fn tag_name(&self, element: usize) -> &str {
        &self.nodes[element].tag
    }

    fn children(&self, element: usize) -> Vec<usize> {
        self.nodes[element].children.clone()
    }

    fn attributes(&self, element: usize) -> Vec<(&str, &str)> {
        self.nodes[element]
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }

    fn text_content(&self, element: usize) -> String {
        let node = &self.nodes[element];
        let mut text = node.text.clone();
        for &child in &node.children {
            text.push_str(&self.text_content(child));
        }
        text
    }

    fn is_vector_graphics(&self, element: usize) -> bool {
        self.nodes[element].vector
    }
}

impl StyleProvider for FakeDocument {
    type Handle = usize;

    /// Explicit test style first, then what a browser reports for an unstyled block.
    fn resolved_value(&self, element: usize, property: &str) -> String {
        if let Some(value) = self.nodes[element].style.get(property) {
            return value.clone();
        }
        match property {
            "flex" => "0 1 auto".to_owned(),
            _ => defaults::default_value(property)
                .unwrap_or_default()
                .to_owned(),
        }
    }
}

impl SelectionSource for FakeDocument {
    type Handle = usize;

    fn selected(&self) -> Option<usize> {
        self.selected
    }
}
