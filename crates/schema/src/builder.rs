//! Depth-first assembly of the schema tree.

use log::{debug, error};

use crate::classify::{Classification, classify, generate_name};
use crate::defaults::default_value;
use crate::dimension::is_reasonable_dimension;
use crate::error::ConvertError;
use crate::node::{ContainerProps, IconProps, LabelProps, Meta, Props, SchemaNode, SvgProps};
use crate::options::ConvertOptions;
use crate::position::infer_position;
use crate::source::{ElementTree, SelectionSource, StyleProvider};
use crate::style::{StyleMap, extract_style};
use crate::svg::parse_svg_children;
use crate::text::camel_case;

/// Style keys that containers expose as layout props instead.
const PROMOTED_STYLE_KEYS: [&str; 6] = [
    "display",
    "flexDirection",
    "flexWrap",
    "justifyContent",
    "alignContent",
    "alignItems",
];

/// Icon style is limited to these, in this order.
const ICON_STYLE_KEYS: [&str; 3] = ["width", "height", "color"];

const FALLBACK_ICON_COLOR: &str = "#000000";
const FALLBACK_LABEL_TEXT: &str = "Label";

/// Where a conversion starts.
#[derive(Clone, Copy, Debug)]
pub enum Target<'sel, H> {
    /// Resolved through [`ElementTree::resolve`].
    Selector(&'sel str),
    Handle(H),
}

/// Converts elements of one tree, reading style from one provider.
///
/// Holds no state between calls; every conversion re-reads the tree and styles.
pub struct Converter<'page, T, S> {
    tree: &'page T,
    styles: &'page S,
    options: ConvertOptions,
}

impl<'page, T, S> Converter<'page, T, S>
where
    T: ElementTree,
    S: StyleProvider<Handle = T::Handle>,
{
    pub fn new(tree: &'page T, styles: &'page S) -> Self {
        Self::with_options(tree, styles, ConvertOptions::default())
    }

    pub fn with_options(tree: &'page T, styles: &'page S, options: ConvertOptions) -> Self {
        Self {
            tree,
            styles,
            options,
        }
    }

    /// Convert the element `target` designates.
    ///
    /// Yields a single-element vector, or an empty one when the element itself
    /// is ignored.
    ///
    /// # Errors
    /// [`ConvertError::InvalidInput`] for a blank selector and
    /// [`ConvertError::NotFound`] when nothing matches. Both are also logged.
    pub fn convert(&self, target: Target<'_, T::Handle>) -> Result<Vec<SchemaNode>, ConvertError> {
        let element = match target {
            Target::Selector(selector) => self.resolve(selector)?,
            Target::Handle(element) => element,
        };
        Ok(self.build(element).into_iter().collect())
    }

    /// Convert whatever element the host currently has selected.
    ///
    /// # Errors
    /// [`ConvertError::NoSelection`] when nothing is selected.
    pub fn convert_selected<Sel>(&self, selection: &Sel) -> Result<Vec<SchemaNode>, ConvertError>
    where
        Sel: SelectionSource<Handle = T::Handle>,
    {
        let element = selection
            .selected()
            .ok_or_else(|| report(ConvertError::NoSelection))?;
        self.convert(Target::Handle(element))
    }

    fn resolve(&self, selector: &str) -> Result<T::Handle, ConvertError> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Err(report(ConvertError::InvalidInput));
        }
        self.tree
            .resolve(selector)
            .ok_or_else(|| report(ConvertError::NotFound(selector.to_owned())))
    }

    /// Classify `element` and run the matching builder. `None` for ignored elements.
    pub fn build(&self, element: T::Handle) -> Option<SchemaNode> {
        let classification = classify(self.tree, self.styles, element);
        debug!(
            "<{}> {element:?} classified as {classification:?}",
            self.tree.tag_name(element)
        );
        match classification {
            Classification::Ignore => None,
            Classification::Icon => Some(self.icon_node(element)),
            Classification::Svg => Some(self.svg_node(element)),
            Classification::Label => Some(self.label_node(element)),
            Classification::Container => Some(self.container_node(element)),
        }
    }

    fn node(&self, element: T::Handle, props: Props) -> SchemaNode {
        SchemaNode::new(
            &self.options.type_prefix,
            props,
            self.meta(element),
            infer_position(self.styles, element),
        )
    }

    fn meta(&self, element: T::Handle) -> Meta {
        Meta {
            name: generate_name(self.tree, element),
            dom_id: self
                .tree
                .id(element)
                .filter(|id| !id.is_empty())
                .map(str::to_owned),
        }
    }

    fn style(&self, element: T::Handle) -> Option<StyleMap> {
        extract_style(self.tree, self.styles, element)
    }

    fn icon_node(&self, element: T::Handle) -> SchemaNode {
        let style = self.style(element).unwrap_or_default();
        let mut icon_style = StyleMap::new();
        for key in ICON_STYLE_KEYS {
            if let Some(value) = style.get(key)
                && (key == "color" || is_reasonable_dimension(value))
            {
                icon_style.insert(key.to_owned(), value.clone());
            }
        }
        let color = icon_style
            .get("color")
            .cloned()
            .unwrap_or_else(|| FALLBACK_ICON_COLOR.to_owned());
        let props = Props::Icon(IconProps {
            path: self.options.icon_path.clone(),
            color,
            style: icon_style,
        });
        self.node(element, props)
    }

    fn label_node(&self, element: T::Handle) -> SchemaNode {
        let content = self.tree.text_content(element);
        let text = if content.is_empty() {
            FALLBACK_LABEL_TEXT.to_owned()
        } else {
            content.trim().to_owned()
        };
        let props = Props::Label(LabelProps {
            text,
            style: self.style(element),
        });
        self.node(element, props)
    }

    fn svg_node(&self, element: T::Handle) -> SchemaNode {
        let attribute = |name: &str| {
            self.tree
                .attribute(element, name)
                .filter(|value| !value.is_empty())
        };
        let size = |name: &str| {
            attribute(name)
                .filter(|value| !value.ends_with('%') && is_reasonable_dimension(value))
                .map(str::to_owned)
        };
        let props = Props::Svg(SvgProps {
            elements: parse_svg_children(self.tree, element),
            view_box: attribute("viewBox").map(str::to_owned),
            width: size("width"),
            height: size("height"),
            style: self.style(element),
        });
        self.node(element, props)
    }

    fn container_node(&self, element: T::Handle) -> SchemaNode {
        let read = |property: &str| self.styles.resolved_value(element, property).trim().to_owned();

        let display = read("display");
        let flex_direction = read("flex-direction");
        // A plain block stacks its children, which is a column in flex terms.
        let direction = if display == "block" && flex_direction == "row" {
            Some("column".to_owned())
        } else {
            (!flex_direction.is_empty() && flex_direction != "row").then_some(flex_direction)
        };

        let mut style = self.style(element).unwrap_or_default();
        for key in PROMOTED_STYLE_KEYS {
            style.shift_remove(key);
        }

        let props = Props::Container(ContainerProps {
            direction,
            align_items: layout_value(read("align-items"), "align-items", &["normal", "stretch"])
                .map(|value| camel_case(&value)),
            wrap: layout_value(read("flex-wrap"), "flex-wrap", &["nowrap"]),
            justify: layout_value(
                read("justify-content"),
                "justify-content",
                &["normal", "flex-start"],
            ),
            align_content: layout_value(
                read("align-content"),
                "align-content",
                &["normal", "stretch"],
            ),
            style: (!style.is_empty()).then_some(style),
        });

        let mut node = self.node(element, props);
        let children: Vec<SchemaNode> = self
            .tree
            .children(element)
            .into_iter()
            .filter_map(|child| {
                let built = self.build(child);
                if built.is_none() {
                    debug!("dropping ignored child {child:?}");
                }
                built
            })
            .collect();
        node.children = (!children.is_empty()).then_some(children);
        node
    }
}

/// Keep a layout value unless it is empty, neutral for flex, or the table default.
fn layout_value(value: String, property: &str, neutral: &[&str]) -> Option<String> {
    let informative = !value.is_empty()
        && !neutral.contains(&value.as_str())
        && default_value(property) != Some(value.as_str());
    informative.then_some(value)
}

/// Emit an input error on the diagnostic channel and hand it back.
fn report(error: ConvertError) -> ConvertError {
    error!("{error}");
    error
}
