//! Reduce an element's resolved style to the properties worth emitting.

use indexmap::IndexMap;
use log::trace;

use crate::color::rgb_to_hex;
use crate::defaults::{BLACK, DEFAULT_VALUES, SVG_PRESENTATION_ATTRIBUTES, TRANSPARENT};
use crate::dimension::is_reasonable_dimension;
use crate::source::{ElementTree, StyleProvider};
use crate::text::camel_case;

/// Camel-cased property name to value, in default-table order.
pub type StyleMap = IndexMap<String, String>;

/// Properties whose values are rewritten from `rgb()` to hex.
const COLOR_PROPERTIES: [&str; 3] = ["background-color", "color", "border-color"];

/// Build the semantic style map for `element`.
///
/// Each tracked property is read from `styles`, trimmed and dropped when it
/// carries no information (empty, default, `initial`, `normal`, zero, an
/// implausible width/height, transparent or black colors). Vector-graphics
/// elements additionally contribute their presentation attributes.
///
/// Returns `None` rather than an empty map.
pub fn extract_style<T, S>(tree: &T, styles: &S, element: T::Handle) -> Option<StyleMap>
where
    T: ElementTree,
    S: StyleProvider<Handle = T::Handle>,
{
    let mut style = StyleMap::new();
    for &(property, default) in DEFAULT_VALUES {
        let resolved = styles.resolved_value(element, property);
        if let Some(value) = filter_resolved(property, default, resolved.trim()) {
            trace!("{element:?}: {property} = {value}");
            style.insert(camel_case(property), value);
        }
    }
    if tree.is_vector_graphics(element) {
        merge_presentation_attributes(tree, element, &mut style);
    }
    (!style.is_empty()).then_some(style)
}

/// Decide whether one resolved value is kept and in which form.
fn filter_resolved(property: &str, default: &str, value: &str) -> Option<String> {
    if matches!(property, "min-width" | "min-height") && value == "auto" {
        return None;
    }
    // Any transform is meaningful, whatever the defaults say.
    if property == "transform" && value != "none" && !value.is_empty() {
        return Some(value.to_owned());
    }
    let uninformative = value.is_empty()
        || value == default
        || matches!(value, "initial" | "normal" | "0px" | "0")
        || (matches!(property, "max-height" | "max-width") && value == "none");
    if uninformative {
        return None;
    }
    let invisible = match property {
        "background-color" | "color" => value == TRANSPARENT,
        "border" => value == "none",
        "border-color" => value == BLACK,
        _ => false,
    };
    if invisible {
        return None;
    }
    if COLOR_PROPERTIES.contains(&property) {
        return Some(rgb_to_hex(value));
    }
    if matches!(property, "width" | "height") && !is_reasonable_dimension(value) {
        return None;
    }
    Some(value.to_owned())
}

/// Copy presentation attributes (`fill`, `stroke`, ...) off a vector element.
///
/// `none` and `currentColor` are normally skipped, except `fill="none"` and
/// `stroke="currentColor"` which change rendering and are kept verbatim.
fn merge_presentation_attributes<T: ElementTree>(tree: &T, element: T::Handle, style: &mut StyleMap) {
    for (name, raw) in tree.attributes(element) {
        let value = raw.trim();
        let listed = SVG_PRESENTATION_ATTRIBUTES.contains(&name);
        if listed && !value.is_empty() && value != "none" && value != "currentColor" {
            if matches!(name, "width" | "height") && !is_reasonable_dimension(value) {
                continue;
            }
            style.insert(camel_case(name), value.to_owned());
        } else if name == "fill" && value == "none" {
            style.insert("fill".to_owned(), "none".to_owned());
        } else if name == "stroke" && value == "currentColor" {
            style.insert("stroke".to_owned(), "currentColor".to_owned());
        }
    }
}
