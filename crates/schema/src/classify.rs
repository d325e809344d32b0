//! Decide what an element becomes, and what it is called.

use crate::source::{ElementTree, StyleProvider};

/// Terminal category of an element. Each element is classified exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Hidden, empty block; produces nothing.
    Ignore,
    Icon,
    Svg,
    Label,
    /// Anything else; its children are converted recursively.
    Container,
}

/// Tags that always become a label.
const TEXT_TAGS: [&str; 9] = ["a", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6"];

const ICON_MARKER: &str = "icon";

/// Classify `element`. Rules are tried in priority order and the first match wins:
/// ignore, icon, svg, label, container.
///
/// Icon is checked before svg on purpose: an `<svg class="btn-icon">` is an icon.
pub fn classify<T, S>(tree: &T, styles: &S, element: T::Handle) -> Classification
where
    T: ElementTree,
    S: StyleProvider<Handle = T::Handle>,
{
    let tag = tree.tag_name(element).to_ascii_lowercase();
    if should_ignore(tree, styles, element, &tag) {
        return Classification::Ignore;
    }
    if is_icon(tree, element) {
        return Classification::Icon;
    }
    if tag == "svg" {
        return Classification::Svg;
    }
    if TEXT_TAGS.contains(&tag.as_str()) || is_text_only(tree, element) {
        return Classification::Label;
    }
    Classification::Container
}

fn should_ignore<T, S>(tree: &T, styles: &S, element: T::Handle, tag: &str) -> bool
where
    T: ElementTree,
    S: StyleProvider<Handle = T::Handle>,
{
    tag == "div"
        && styles.resolved_value(element, "display").trim() == "none"
        && tree.children(element).is_empty()
        && tree.text_content(element).trim().is_empty()
}

fn is_icon<T: ElementTree>(tree: &T, element: T::Handle) -> bool {
    tree.id(element).is_some_and(|id| id.contains(ICON_MARKER))
        || tree
            .class_list(element)
            .iter()
            .any(|class| class.contains(ICON_MARKER))
}

fn is_text_only<T: ElementTree>(tree: &T, element: T::Handle) -> bool {
    tree.children(element).is_empty() && !tree.text_content(element).trim().is_empty()
}

/// Human-readable component name: id, else first class, else a name derived from the tag.
pub fn generate_name<T: ElementTree>(tree: &T, element: T::Handle) -> String {
    if let Some(id) = tree.id(element).filter(|id| !id.is_empty()) {
        return id.to_owned();
    }
    if let Some(class) = tree.class_list(element).first() {
        return (*class).to_owned();
    }
    name_for_tag(&tree.tag_name(element).to_ascii_lowercase())
}

fn name_for_tag(tag: &str) -> String {
    match tag {
        "div" => "FlexContainer".to_owned(),
        "span" => "Text".to_owned(),
        "p" => "Paragraph".to_owned(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => format!("Heading{}", &tag[1..]),
        "img" => "Image".to_owned(),
        "button" => "Button".to_owned(),
        "a" => "Link".to_owned(),
        "svg" => "SvgGraphic".to_owned(),
        _ => capitalize(tag),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
