//! CSS cascade resolution.
//!
//! Decides which declaration wins for each longhand of an element, by origin
//! and importance, then inline style, then specificity, then source order.

use std::collections::HashMap;

use html::{DOM, NodeId};
use log::{debug, trace};

use crate::selectors::{Selector, SelectorTree, Specificity, parse_selector_list};
use crate::syntax::{Declaration, Stylesheet, parse_style_attribute, parse_stylesheet};

use super::{ComputedStyle, ComputedStyles, compute_style, shorthands, ua_stylesheet};
use super::values::MEDIUM_FONT_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    UserAgent,
    Author,
}

/// One style rule with its selector list parsed up front.
#[derive(Clone, Debug)]
pub struct Rule {
    pub origin: Origin,
    pub source_order: u32,
    /// Selectors understood from the prelude; unsupported ones are dropped.
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(origin: Origin, source_order: u32, prelude: &str, declarations: Vec<Declaration>) -> Self {
        let selectors = parse_selector_list(prelude);
        if selectors.is_empty() {
            debug!("no usable selector in `{prelude}`");
        }
        Self {
            origin,
            source_order,
            selectors,
            declarations,
        }
    }

    /// Highest specificity among the selectors matching `element`.
    fn matching_specificity<T: SelectorTree>(&self, tree: &T, element: T::Element) -> Option<Specificity> {
        self.selectors
            .iter()
            .filter(|selector| selector.matches(tree, element))
            .map(Selector::specificity)
            .max()
    }
}

/// A declaration tracked during cascading with what decides conflicts.
#[derive(Clone, Debug)]
struct CascadedDecl {
    value: String,
    important: bool,
    origin: Origin,
    specificity: Specificity,
    source_order: u32,
    inline: bool,
}

/// Importance and origin layer: UA normal, author normal, author
/// important, UA important.
const fn layer(decl: &CascadedDecl) -> u8 {
    match (decl.origin, decl.important) {
        (Origin::UserAgent, false) => 0,
        (Origin::Author, false) => 1,
        (Origin::Author, true) => 2,
        (Origin::UserAgent, true) => 3,
    }
}

/// Return true if `candidate` wins over `previous`.
fn wins_over(candidate: &CascadedDecl, previous: &CascadedDecl) -> bool {
    let key = |decl: &CascadedDecl| (layer(decl), decl.inline, decl.specificity, decl.source_order);
    key(candidate) >= key(previous)
}

/// Insert every longhand of a declaration that wins over the current holder.
fn cascade_put(props: &mut HashMap<String, CascadedDecl>, declaration: &Declaration, entry: &CascadedDecl) {
    for (name, value) in shorthands::expand(&declaration.name, &declaration.value) {
        let longhand = CascadedDecl {
            value,
            ..entry.clone()
        };
        let should_insert = props
            .get(&name)
            .is_none_or(|previous| wins_over(&longhand, previous));
        if should_insert {
            props.insert(name, longhand);
        }
    }
}

/// Holds the rules applied to a document and runs the cascade over it.
#[derive(Clone, Debug)]
pub struct StyleComputer {
    rules: Vec<Rule>,
}

impl Default for StyleComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleComputer {
    /// Only the user-agent stylesheet.
    pub fn new() -> Self {
        Self {
            rules: ua_stylesheet::create_ua_rules(),
        }
    }

    /// Append an author stylesheet after every rule already present.
    pub fn add_stylesheet(&mut self, sheet: &Stylesheet) {
        let base_order = self
            .rules
            .last()
            .map_or(0, |rule| rule.source_order.saturating_add(1));
        for (rule, order) in sheet.rules.iter().zip(base_order..) {
            self.rules.push(Rule::new(
                Origin::Author,
                order,
                &rule.prelude,
                rule.declarations.clone(),
            ));
        }
    }

    /// UA rules plus every `<style>` element of `dom`, in document order.
    pub fn for_document(dom: &DOM) -> Self {
        let mut computer = Self::new();
        for style in dom.elements_by_tag("style") {
            let sheet = parse_stylesheet(&dom.text_content(style));
            debug!("<style> element with {} rules", sheet.rules.len());
            computer.add_stylesheet(&sheet);
        }
        computer
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Winning value per longhand for `element`, with `inline` as its style attribute.
    pub fn cascade<T: SelectorTree>(
        &self,
        tree: &T,
        element: T::Element,
        inline: &[Declaration],
    ) -> HashMap<String, String> {
        let mut props: HashMap<String, CascadedDecl> = HashMap::new();
        for rule in &self.rules {
            let Some(specificity) = rule.matching_specificity(tree, element) else {
                continue;
            };
            for declaration in &rule.declarations {
                let entry = CascadedDecl {
                    value: String::new(),
                    important: declaration.important,
                    origin: rule.origin,
                    specificity,
                    source_order: rule.source_order,
                    inline: false,
                };
                cascade_put(&mut props, declaration, &entry);
            }
        }
        for (declaration, order) in inline.iter().zip(0_u32..) {
            let entry = CascadedDecl {
                value: String::new(),
                important: declaration.important,
                origin: Origin::Author,
                specificity: Specificity::default(),
                source_order: order,
                inline: true,
            };
            cascade_put(&mut props, declaration, &entry);
        }
        props
            .into_iter()
            .map(|(name, decl)| (name, decl.value))
            .collect()
    }

    /// Cascade and compute every element of `dom`, parents before children.
    pub fn compute(&self, dom: &DOM) -> ComputedStyles {
        let root = dom.document_element();
        let mut root_font_size = MEDIUM_FONT_SIZE;
        let mut by_node: HashMap<NodeId, ComputedStyle> = HashMap::new();
        for element in dom.elements() {
            let inline = dom
                .attribute(element, "style")
                .map(parse_style_attribute)
                .unwrap_or_default();
            let specified = self.cascade(dom, element, &inline);
            let parent = dom
                .parent_element(element)
                .and_then(|parent| by_node.get(&parent));
            let style = compute_style(&specified, parent, root_font_size);
            if Some(element) == root {
                root_font_size = style.font_size_px();
            }
            trace!("computed {} longhands for {element:?}", specified.len());
            by_node.insert(element, style);
        }
        debug!("computed styles for {} elements", by_node.len());
        ComputedStyles::from_map(by_node)
    }
}
