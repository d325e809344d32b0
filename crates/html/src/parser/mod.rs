//! Tree construction through html5ever, converted into the arena.

use html5ever::tendril::TendrilSink as _;
use html5ever::{ParseOpts, parse_document};
use indextree::NodeId;
use log::{debug, trace};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use smallvec::SmallVec;

use crate::dom::{DOM, DOMNode, Namespace, NodeKind};

impl DOM {
    /// Parse a complete document. HTML parsing never fails; malformed input
    /// is repaired the way browsers repair it.
    pub fn parse(html: &str) -> Self {
        let sink = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        let mut dom = Self::default();
        let root = dom.root();
        for child in &*sink.document.children.borrow() {
            convert_node(&mut dom, child, root);
        }
        debug!(
            "parsed {} bytes of HTML into {} elements",
            html.len(),
            dom.elements().count()
        );
        dom
    }
}

fn convert_node(dom: &mut DOM, handle: &Handle, parent: NodeId) {
    match &handle.data {
        NodeData::Document => {
            for child in &*handle.children.borrow() {
                convert_node(dom, child, parent);
            }
        }
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            dom.append(
                parent,
                DOMNode {
                    kind: NodeKind::Text { text },
                    attrs: SmallVec::new(),
                },
            );
        }
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let attrs = attrs
                .borrow()
                .iter()
                .map(|attr| {
                    let local = attr.name.local.to_string();
                    let qualified = match &attr.name.prefix {
                        Some(prefix) => format!("{prefix}:{local}"),
                        None => local,
                    };
                    (qualified, attr.value.to_string())
                })
                .collect();
            let node = dom.append(
                parent,
                DOMNode {
                    kind: NodeKind::Element {
                        tag: name.local.to_string(),
                        namespace: Namespace::from_uri(&name.ns),
                    },
                    attrs,
                },
            );
            // Template contents live in a separate fragment; inline them so they stay queryable.
            if let Some(contents) = template_contents.borrow().as_ref() {
                convert_node(dom, contents, node);
            }
            for child in &*handle.children.borrow() {
                convert_node(dom, child, node);
            }
        }
        NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => {
            trace!("skipping non-element node");
        }
    }
}
