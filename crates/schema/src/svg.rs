//! Vector-graphics subtrees, copied attribute for attribute.
//!
//! Unlike the style extractor nothing is filtered here: every attribute of
//! every descendant is carried over so the shape renders the same.

use indexmap::IndexMap;
use serde::Serialize;

use crate::source::ElementTree;
use crate::text::camel_case;

/// Key under which nested elements are attached.
const ELEMENTS_KEY: &str = "elements";

/// A value inside an [`SvgElement`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SvgValue {
    Text(String),
    /// Paint server reference such as `fill="url(#grad1)"`.
    Url { url: String },
    Elements(Vec<SvgElement>),
}

/// `{type, name, ...attributes, elements?}` for one vector primitive.
///
/// Keys keep insertion order and a later key with the same name overwrites the
/// earlier value in place, so an attribute called `name` replaces the tag name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SvgElement(IndexMap<String, SvgValue>);

impl SvgElement {
    fn new(tag: &str) -> Self {
        let mut fields = IndexMap::new();
        fields.insert("type".to_owned(), SvgValue::Text(tag.to_owned()));
        fields.insert("name".to_owned(), SvgValue::Text(tag.to_owned()));
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&SvgValue> {
        self.0.get(key)
    }

    /// Text value of `key`, if it is plain text.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            SvgValue::Text(text) => Some(text),
            SvgValue::Url { .. } | SvgValue::Elements(_) => None,
        }
    }

    /// Nested elements, empty when there are none.
    pub fn elements(&self) -> &[Self] {
        match self.0.get(ELEMENTS_KEY) {
            Some(SvgValue::Elements(children)) => children,
            _ => &[],
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Convert every element child of `parent`, recursively.
pub fn parse_svg_children<T: ElementTree>(tree: &T, parent: T::Handle) -> Vec<SvgElement> {
    tree.children(parent)
        .into_iter()
        .map(|child| parse_svg_element(tree, child))
        .collect()
}

fn parse_svg_element<T: ElementTree>(tree: &T, element: T::Handle) -> SvgElement {
    let mut out = SvgElement::new(&tree.tag_name(element).to_ascii_lowercase());
    for (name, raw) in tree.attributes(element) {
        let value = raw.trim();
        let converted = if name == "fill" && value.starts_with("url") {
            SvgValue::Url {
                url: value.to_owned(),
            }
        } else {
            SvgValue::Text(value.to_owned())
        };
        out.0.insert(camel_case(name), converted);
    }
    let nested = parse_svg_children(tree, element);
    if !nested.is_empty() {
        out.0.insert(ELEMENTS_KEY.to_owned(), SvgValue::Elements(nested));
    }
    out
}
