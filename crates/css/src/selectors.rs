//! Selector parsing, specificity and matching.
//!
//! Supported: type, `#id`, `.class`, `[attr]`, `[attr=value]`, `*`, the
//! descendant and child combinators, and comma-separated lists. A selector
//! using anything else (pseudo-classes, sibling combinators) is dropped from
//! its list and never matches.

use core::iter::Peekable;
use core::mem::take;
use core::str::Chars;

use html::{DOM, NodeId};

/// The element-side view a selector is matched against.
pub trait SelectorTree {
    type Element: Copy;

    fn parent(&self, element: Self::Element) -> Option<Self::Element>;

    fn local_name(&self, element: Self::Element) -> &str;

    fn attribute_value(&self, element: Self::Element, name: &str) -> Option<&str>;

    /// Every element in document order.
    fn elements_in_order(&self) -> Vec<Self::Element>;
}

impl SelectorTree for DOM {
    type Element = NodeId;

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        self.parent_element(element)
    }

    fn local_name(&self, element: NodeId) -> &str {
        self.tag_name(element).unwrap_or_default()
    }

    fn attribute_value(&self, element: NodeId, name: &str) -> Option<&str> {
        self.attribute(element, name)
    }

    fn elements_in_order(&self) -> Vec<NodeId> {
        self.elements().collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
}

/// One compound selector such as `div.card#main[role=list]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compound {
    /// Lowercased.
    tag: Option<String>,
    element_id: Option<String>,
    classes: Vec<String>,
    /// `(name, None)` tests presence, `(name, Some(value))` equality.
    attributes: Vec<(String, Option<String>)>,
    universal: bool,
}

impl Compound {
    fn has_content(&self) -> bool {
        self.universal
            || self.tag.is_some()
            || self.element_id.is_some()
            || !self.classes.is_empty()
            || !self.attributes.is_empty()
    }

    fn matches<T: SelectorTree>(&self, tree: &T, element: T::Element) -> bool {
        if let Some(tag) = &self.tag
            && !tree.local_name(element).eq_ignore_ascii_case(tag)
        {
            return false;
        }
        if let Some(element_id) = &self.element_id
            && tree.attribute_value(element, "id") != Some(element_id.as_str())
        {
            return false;
        }
        if !self.classes.is_empty() {
            let class_attr = tree.attribute_value(element, "class").unwrap_or_default();
            let classes = class_attr.split_ascii_whitespace();
            if !self
                .classes
                .iter()
                .all(|wanted| classes.clone().any(|class| class == wanted))
            {
                return false;
            }
        }
        self.attributes.iter().all(|(name, expected)| {
            match (tree.attribute_value(element, name), expected) {
                (Some(_), None) => true,
                (Some(actual), Some(wanted)) => actual == wanted,
                (None, _) => false,
            }
        })
    }
}

/// Compounds left to right; each but the last carries the combinator to the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<(Compound, Option<Combinator>)>,
}

/// `(ids, classes and attributes, types)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Selector {
    pub fn specificity(&self) -> Specificity {
        let count = |len: usize| u32::try_from(len).unwrap_or(u32::MAX);
        self.parts
            .iter()
            .fold(Specificity::default(), |Specificity(ids, classes, tags), (compound, _)| {
                Specificity(
                    ids.saturating_add(u32::from(compound.element_id.is_some())),
                    classes
                        .saturating_add(count(compound.classes.len()))
                        .saturating_add(count(compound.attributes.len())),
                    tags.saturating_add(u32::from(compound.tag.is_some())),
                )
            })
    }

    pub fn matches<T: SelectorTree>(&self, tree: &T, element: T::Element) -> bool {
        self.parts
            .len()
            .checked_sub(1)
            .is_some_and(|last| self.matches_from(tree, element, last))
    }

    /// Match compound `index` against `element`, then walk up for the ones before it.
    fn matches_from<T: SelectorTree>(&self, tree: &T, element: T::Element, index: usize) -> bool {
        let Some((compound, _)) = self.parts.get(index) else {
            return false;
        };
        if !compound.matches(tree, element) {
            return false;
        }
        let Some(previous) = index.checked_sub(1) else {
            return true;
        };
        let combinator = self
            .parts
            .get(previous)
            .and_then(|(_, combinator)| *combinator)
            .unwrap_or(Combinator::Descendant);
        match combinator {
            Combinator::Child => tree
                .parent(element)
                .is_some_and(|parent| self.matches_from(tree, parent, previous)),
            Combinator::Descendant => {
                let mut ancestor = tree.parent(element);
                while let Some(candidate) = ancestor {
                    if self.matches_from(tree, candidate, previous) {
                        return true;
                    }
                    ancestor = tree.parent(candidate);
                }
                false
            }
        }
    }
}

fn is_ident_char(character: char) -> bool {
    character.is_alphanumeric() || character == '-' || character == '_' || !character.is_ascii()
}

fn consume_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut out = String::new();
    while let Some(&character) = chars.peek() {
        if character == '\\' {
            chars.next();
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
            continue;
        }
        if !is_ident_char(character) {
            break;
        }
        out.push(character);
        chars.next();
    }
    out
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(char::is_ascii_whitespace).is_some() {}
}

/// Quoted or bare attribute value.
fn consume_attribute_value(chars: &mut Peekable<Chars<'_>>) -> String {
    match chars.peek().copied() {
        Some(quote @ ('"' | '\'')) => {
            chars.next();
            let mut value = String::new();
            for character in chars.by_ref() {
                if character == quote {
                    break;
                }
                value.push(character);
            }
            value
        }
        _ => consume_ident(chars),
    }
}

/// Body of `[...]` after the opening bracket. Only `=` is understood.
fn consume_attribute_selector(chars: &mut Peekable<Chars<'_>>) -> Option<(String, Option<String>)> {
    skip_whitespace(chars);
    let name = consume_ident(chars);
    skip_whitespace(chars);
    let value = if chars.next_if_eq(&'=').is_some() {
        skip_whitespace(chars);
        let value = consume_attribute_value(chars);
        skip_whitespace(chars);
        Some(value)
    } else {
        None
    };
    (chars.next() == Some(']') && !name.is_empty()).then_some((name, value))
}

/// Parse one complex selector; `None` when it uses unsupported syntax.
fn parse_selector(text: &str) -> Option<Selector> {
    let mut chars = text.trim().chars().peekable();
    let mut parts: Vec<(Compound, Option<Combinator>)> = Vec::new();
    let mut current = Compound::default();
    let mut pending: Option<Combinator> = None;

    while let Some(&character) = chars.peek() {
        if character.is_ascii_whitespace() || character == '>' {
            chars.next();
            if current.has_content() {
                parts.push((take(&mut current), None));
            }
            if character == '>' {
                if parts.is_empty() {
                    return None;
                }
                pending = Some(Combinator::Child);
            } else if pending.is_none() && !parts.is_empty() {
                pending = Some(Combinator::Descendant);
            }
            continue;
        }
        if !current.has_content()
            && let Some(combinator) = pending.take()
            && let Some((_, link)) = parts.last_mut()
        {
            *link = Some(combinator);
        }
        match character {
            '*' => {
                chars.next();
                current.universal = true;
            }
            '#' => {
                chars.next();
                current.element_id = Some(consume_ident(&mut chars));
            }
            '.' => {
                chars.next();
                current.classes.push(consume_ident(&mut chars));
            }
            '[' => {
                chars.next();
                current.attributes.push(consume_attribute_selector(&mut chars)?);
            }
            _ if is_ident_char(character) && current.tag.is_none() => {
                current.tag = Some(consume_ident(&mut chars).to_ascii_lowercase());
            }
            // Pseudo-classes, sibling combinators, namespaces.
            _ => return None,
        }
    }
    if current.has_content() {
        parts.push((current, None));
    } else if pending == Some(Combinator::Child) || parts.is_empty() {
        return None;
    }
    if let Some((_, link)) = parts.last_mut() {
        *link = None;
    }
    Some(Selector { parts })
}

/// Parse a comma-separated list, keeping only the selectors understood.
pub fn parse_selector_list(input: &str) -> Vec<Selector> {
    input.split(',').filter_map(parse_selector).collect()
}

/// First element in document order matching any selector of `selectors`.
pub fn query_selector<T: SelectorTree>(tree: &T, selectors: &str) -> Option<T::Element> {
    let list = parse_selector_list(selectors);
    if list.is_empty() {
        return None;
    }
    tree.elements_in_order()
        .into_iter()
        .find(|&element| list.iter().any(|selector| selector.matches(tree, element)))
}
