//! Cascade, inheritance and computed values for a parsed document.
//!
//! [`ComputedStyles::compute`] runs the user-agent and author sheets through
//! the cascade for every element, then converts the winning declarations to
//! computed values. No layout is performed: percentages and `auto` are
//! reported as they were specified.

mod cascade;
mod properties;
mod shorthands;
pub mod ua_stylesheet;
mod values;

use std::collections::HashMap;

use html::{DOM, NodeId};
use log::debug;

pub use cascade::{Origin, Rule, StyleComputer};

use properties::{LONGHANDS, Longhand, ValueKind};
use values::{
    Context, MEDIUM_FONT_SIZE, compute_border_width, compute_color, compute_font_size,
    compute_font_weight, compute_length, compute_line_height, compute_number, compute_paint,
    format_px, length_px,
};

/// Computed longhand values of one element, each serialised as a browser
/// reports it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    values: HashMap<&'static str, String>,
}

impl ComputedStyle {
    /// Every property at its initial value, as for an element without a parent.
    pub fn initial() -> Self {
        compute_style(&HashMap::new(), None, MEDIUM_FONT_SIZE)
    }

    pub fn longhand(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Resolved value of any supported property, shorthands included.
    /// Unsupported properties read as `""`.
    pub fn get(&self, property: &str) -> String {
        let property = property.trim().to_ascii_lowercase();
        if let Some(value) = self.longhand(&property) {
            return value.to_owned();
        }
        shorthands::serialize(&property, self).unwrap_or_default()
    }

    fn font_size_px(&self) -> f64 {
        self.longhand("font-size")
            .and_then(|value| length_px(value, MEDIUM_FONT_SIZE, MEDIUM_FONT_SIZE))
            .unwrap_or(MEDIUM_FONT_SIZE)
    }
}

/// Where one longhand's value comes from before computing.
enum Source<'value> {
    /// The parent's computed value, taken as is.
    Parent(&'value str),
    /// A value still to be computed.
    Specified(&'value str),
}

fn source<'value>(
    longhand: &'static Longhand,
    specified: &'value HashMap<String, String>,
    parent: Option<&'value ComputedStyle>,
) -> Source<'value> {
    let inherit = || match parent.and_then(|style| style.longhand(longhand.name)) {
        Some(value) => Source::Parent(value),
        None => Source::Specified(longhand.initial),
    };
    match specified.get(longhand.name).map(|value| value.trim()) {
        Some(keyword) if keyword.eq_ignore_ascii_case("inherit") => inherit(),
        Some(keyword) if keyword.eq_ignore_ascii_case("initial") => {
            Source::Specified(longhand.initial)
        }
        Some(keyword)
            if keyword.eq_ignore_ascii_case("unset") || keyword.eq_ignore_ascii_case("revert") =>
        {
            if longhand.inherited {
                inherit()
            } else {
                Source::Specified(longhand.initial)
            }
        }
        Some(value) => Source::Specified(value),
        None if longhand.inherited => inherit(),
        None => Source::Specified(longhand.initial),
    }
}

/// Flex and grid containers turn their in-flow children into blocks.
fn blockify(display: &str) -> Option<&'static str> {
    match display {
        "inline" | "inline-block" | "list-item" | "table-cell" | "table-row" => Some("block"),
        "inline-flex" => Some("flex"),
        "inline-grid" => Some("grid"),
        "inline-table" => Some("table"),
        _ => None,
    }
}

const BORDER_SIDES: [(&str, &str); 4] = [
    ("border-top-style", "border-top-width"),
    ("border-right-style", "border-right-width"),
    ("border-bottom-style", "border-bottom-width"),
    ("border-left-style", "border-left-width"),
];

/// Turn cascaded longhands into computed values.
///
/// `specified` maps longhand names to the winning declared values. Font size
/// and color are computed first since other values resolve against them.
pub(crate) fn compute_style(
    specified: &HashMap<String, String>,
    parent: Option<&ComputedStyle>,
    root_font_size: f64,
) -> ComputedStyle {
    let parent_font_size = parent.map_or(MEDIUM_FONT_SIZE, ComputedStyle::font_size_px);
    let parent_color = parent
        .and_then(|style| style.longhand("color"))
        .unwrap_or("rgb(0, 0, 0)")
        .to_owned();
    let parent_weight = parent
        .and_then(|style| style.longhand("font-weight"))
        .unwrap_or("400");

    let source_of =
        |name: &str| properties::longhand(name).map(|longhand| source(longhand, specified, parent));
    let font_size = match source_of("font-size") {
        Some(Source::Specified(text)) => {
            compute_font_size(text, parent_font_size, root_font_size)
        }
        Some(Source::Parent(_)) | None => parent_font_size,
    };
    let color = match source_of("color") {
        Some(Source::Specified(text)) => compute_color(text, &parent_color),
        Some(Source::Parent(_)) | None => parent_color.clone(),
    };
    let context = Context {
        font_size,
        root_font_size,
        current_color: &color,
    };

    let mut values: HashMap<&'static str, String> = LONGHANDS
        .iter()
        .map(|longhand| {
            let computed = match longhand.name {
                "font-size" => format_px(font_size),
                "color" => color.clone(),
                _ => match source(longhand, specified, parent) {
                    Source::Parent(value) => value.to_owned(),
                    Source::Specified(text) => {
                        compute_value(longhand, text, &context, parent_weight)
                    }
                },
            };
            (longhand.name, computed)
        })
        .collect();

    for (style_name, width_name) in BORDER_SIDES {
        if matches!(
            values.get(style_name).map(String::as_str),
            Some("none" | "hidden")
        ) {
            values.insert(width_name, format_px(0.0));
        }
    }

    let in_flex_or_grid = matches!(
        parent.and_then(|style| style.longhand("display")),
        Some("flex" | "inline-flex" | "grid" | "inline-grid")
    );
    if in_flex_or_grid
        && let Some(display) = values.get("display").and_then(|display| blockify(display))
    {
        debug!("blockifying flex or grid item to `{display}`");
        values.insert("display", display.to_owned());
    }

    ComputedStyle { values }
}

fn compute_value(longhand: &Longhand, value: &str, context: &Context<'_>, parent_weight: &str) -> String {
    match longhand.kind {
        ValueKind::Keyword => value.to_ascii_lowercase(),
        ValueKind::Length => compute_length(value, context),
        ValueKind::BorderWidth => compute_border_width(value, context),
        ValueKind::Color => compute_color(value, context.current_color),
        ValueKind::Paint => compute_paint(value, context.current_color),
        ValueKind::FontSize => format_px(context.font_size),
        ValueKind::FontWeight => compute_font_weight(value, parent_weight),
        ValueKind::LineHeight => compute_line_height(value, context),
        ValueKind::Number => compute_number(value),
        ValueKind::Verbatim => value.to_owned(),
    }
}

/// Computed styles for every element of one document.
#[derive(Debug, Default)]
pub struct ComputedStyles {
    by_node: HashMap<NodeId, ComputedStyle>,
}

impl ComputedStyles {
    /// Cascade the user-agent sheet and every `<style>` element of `dom`.
    pub fn compute(dom: &DOM) -> Self {
        StyleComputer::for_document(dom).compute(dom)
    }

    pub(crate) fn from_map(by_node: HashMap<NodeId, ComputedStyle>) -> Self {
        Self { by_node }
    }

    pub fn get(&self, node: NodeId) -> Option<&ComputedStyle> {
        self.by_node.get(&node)
    }

    /// Resolved value of `property` on `node`; `""` for unknown nodes and properties.
    pub fn resolved_value(&self, node: NodeId, property: &str) -> String {
        self.get(node)
            .map(|style| style.get(property))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node.is_empty()
    }
}
