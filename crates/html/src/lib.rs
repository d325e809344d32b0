//! HTML documents parsed into an arena of nodes.
//!
//! [`DOM::parse`] runs the full HTML5 tree construction algorithm and keeps
//! documents, elements and text. Everything else the parser produces is dropped.

#![forbid(unsafe_code)]

pub mod dom;
pub mod parser;

pub use dom::{DOM, DOMNode, Namespace, NodeKind};
pub use indextree::NodeId;
