//! Tracked style properties and the values a browser reports when nothing is set.
//!
//! Order matters: the extracted style map lists properties in table order.

/// Property name (kebab-case) paired with its canonical default.
pub const DEFAULT_VALUES: &[(&str, &str)] = &[
    ("background-color", "rgba(0, 0, 0, 0)"),
    ("color", "rgb(0, 0, 0)"),
    ("font-size", "16px"),
    ("font-weight", "400"),
    ("text-align", "start"),
    ("padding", "0px"),
    ("margin", "0px"),
    ("border", "0px none rgb(0, 0, 0)"),
    ("border-color", "rgb(0, 0, 0)"),
    ("border-width", "0px"),
    ("border-style", "none"),
    ("border-radius", "0px"),
    ("width", "auto"),
    ("height", "auto"),
    ("display", "block"),
    ("flex-direction", "row"),
    ("justify-content", "normal"),
    ("align-items", "normal"),
    ("gap", "normal"),
    ("flex-grow", "0"),
    ("flex-shrink", "1"),
    ("flex-basis", "auto"),
    ("flex-wrap", "nowrap"),
    ("align-content", "normal"),
    ("float", "none"),
    ("max-height", "none"),
    ("min-height", "0px"),
    ("max-width", "none"),
    ("min-width", "0px"),
    ("overflow", "visible"),
    ("transform", "none"),
];

/// Presentation attributes read straight off vector-graphics elements.
pub const SVG_PRESENTATION_ATTRIBUTES: &[&str] = &[
    "fill",
    "stroke",
    "stroke-width",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-dasharray",
    "stroke-dashoffset",
    "opacity",
    "fill-opacity",
    "stroke-opacity",
    "vector-effect",
    "paint-order",
];

/// Fully transparent, as resolved colors serialise it.
pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

/// Opaque black, the initial `border-color` when no color is inherited.
pub const BLACK: &str = "rgb(0, 0, 0)";

/// Default for `property`, if it is tracked.
pub fn default_value(property: &str) -> Option<&'static str> {
    DEFAULT_VALUES
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, value)| *value)
}

/// Tracked property names in table order.
pub fn tracked_properties() -> impl Iterator<Item = &'static str> {
    DEFAULT_VALUES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tracked_property_has_a_default() {
        for property in tracked_properties() {
            assert!(default_value(property).is_some(), "{property}");
        }
        assert_eq!(default_value("flex-shrink"), Some("1"));
        assert_eq!(default_value("letter-spacing"), None);
    }
}
