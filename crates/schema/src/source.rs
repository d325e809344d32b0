//! Capabilities the converter needs from its host.
//!
//! The converter never owns the element tree or the style engine. It reads
//! both through these traits, re-reading on demand, so any host that can
//! answer the questions below (a parsed HTML page, a captured snapshot, a
//! live engine) can be converted.

use core::fmt::Debug;

/// Read access to an element tree.
pub trait ElementTree {
    /// Cheap copyable reference to one element.
    type Handle: Copy + Eq + Debug;

    /// Resolve a selector to the first matching element, if any.
    fn resolve(&self, selector: &str) -> Option<Self::Handle>;

    /// Tag name as the tree reports it. The converter compares it case-insensitively.
    fn tag_name(&self, element: Self::Handle) -> &str;

    /// Value of the `id` attribute, if present.
    fn id(&self, element: Self::Handle) -> Option<&str> {
        self.attribute(element, "id")
    }

    /// Class tokens in source order.
    fn class_list(&self, element: Self::Handle) -> Vec<&str> {
        self.attribute(element, "class")
            .map(|classes| classes.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    /// Element children in document order. Text and comment nodes are not included.
    fn children(&self, element: Self::Handle) -> Vec<Self::Handle>;

    /// Attribute name/value pairs in source order.
    fn attributes(&self, element: Self::Handle) -> Vec<(&str, &str)>;

    /// Single attribute lookup.
    fn attribute(&self, element: Self::Handle, name: &str) -> Option<&str> {
        self.attributes(element)
            .into_iter()
            .find(|(attr_name, _)| *attr_name == name)
            .map(|(_, value)| value)
    }

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self, element: Self::Handle) -> String;

    /// True for the vector-graphics root and every element inside it.
    fn is_vector_graphics(&self, element: Self::Handle) -> bool;
}

/// Resolved (cascaded, shorthand-expanded, unit-resolved) style values.
pub trait StyleProvider {
    /// Must match the [`ElementTree::Handle`] it is paired with.
    type Handle: Copy;

    /// Resolved value of `property` (kebab-case). Unknown properties yield an empty string.
    fn resolved_value(&self, element: Self::Handle, property: &str) -> String;
}

/// Host-side notion of the "currently inspected" element.
pub trait SelectionSource {
    type Handle: Copy;

    fn selected(&self) -> Option<Self::Handle>;
}
