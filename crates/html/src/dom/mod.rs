mod printing;

use indextree::{Arena, Node, NodeId};
use smallvec::SmallVec;

/// Namespace an element was created in by the tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Namespace {
    #[default]
    Html,
    Svg,
    MathMl,
    Other,
}

impl Namespace {
    pub(crate) fn from_uri(uri: &str) -> Self {
        match uri {
            "http://www.w3.org/1999/xhtml" => Self::Html,
            "http://www.w3.org/2000/svg" => Self::Svg,
            "http://www.w3.org/1998/Math/MathML" => Self::MathMl,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Document,
    Element {
        tag: String,
        namespace: Namespace,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DOMNode {
    pub kind: NodeKind,
    /// Source order, names as the parser reported them.
    pub attrs: SmallVec<[(String, String); 4]>,
}

pub struct DOM {
    dom: Arena<DOMNode>,
    root: NodeId,
}

impl Default for DOM {
    fn default() -> Self {
        let mut dom = Arena::new();
        Self {
            root: dom.new_node(DOMNode::default()),
            dom,
        }
    }
}

impl DOM {
    /// The document node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn append(&mut self, parent: NodeId, node: DOMNode) -> NodeId {
        let id = self.dom.new_node(node);
        parent.append(id, &mut self.dom);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&DOMNode> {
        self.dom.get(id).map(Node::get)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(
            self.node(id),
            Some(DOMNode {
                kind: NodeKind::Element { .. },
                ..
            })
        )
    }

    /// Local tag name; `None` for documents and text.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Document | NodeKind::Text { .. } => None,
        }
    }

    pub fn namespace(&self, id: NodeId) -> Option<Namespace> {
        match &self.node(id)?.kind {
            NodeKind::Element { namespace, .. } => Some(*namespace),
            NodeKind::Document | NodeKind::Text { .. } => None,
        }
    }

    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        self.node(id)
            .map(|node| node.attrs.as_slice())
            .unwrap_or_default()
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attributes(id)
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.attribute(node, "id")
    }

    pub fn class_list(&self, id: NodeId) -> Vec<&str> {
        self.attribute(id, "class")
            .map(|classes| classes.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    /// All children, text included.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.dom)
    }

    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .filter(|&child| self.is_element(child))
            .collect()
    }

    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.dom
            .get(id)?
            .parent()
            .filter(|&parent| self.is_element(parent))
    }

    /// Every text descendant concatenated in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in id.descendants(&self.dom) {
            if let Some(DOMNode {
                kind: NodeKind::Text { text },
                ..
            }) = self.node(node)
            {
                out.push_str(text);
            }
        }
        out
    }

    /// The `<html>` element.
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(self.root).find(|&child| self.is_element(child))
    }

    pub fn body(&self) -> Option<NodeId> {
        let html = self.document_element()?;
        self.children(html)
            .find(|&child| self.tag_name(child) == Some("body"))
    }

    /// Every element in document order.
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.root
            .descendants(&self.dom)
            .filter(|&node| self.is_element(node))
    }

    /// Elements with the given local name, in document order.
    pub fn elements_by_tag<'dom>(&'dom self, tag: &'dom str) -> impl Iterator<Item = NodeId> + 'dom {
        self.elements()
            .filter(move |&node| self.tag_name(node) == Some(tag))
    }
}
