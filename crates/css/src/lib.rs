//! Styles for parsed HTML documents.
//!
//! Author `<style>` sheets and `style` attributes are cascaded over a
//! user-agent stylesheet, inherited down the tree and converted to computed
//! values. Values read back through [`ComputedStyles::resolved_value`] are
//! formatted like `getComputedStyle` output.

#![forbid(unsafe_code)]

pub mod selectors;
pub mod style;
pub mod syntax;

pub use selectors::{SelectorTree, Specificity, parse_selector_list, query_selector};
pub use style::{ComputedStyle, ComputedStyles, Origin, Rule, StyleComputer};
pub use syntax::{Declaration, StyleRule, Stylesheet, parse_style_attribute, parse_stylesheet};
