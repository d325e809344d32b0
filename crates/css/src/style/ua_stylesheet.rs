//! User-agent stylesheet.
//!
//! Browser default styling for HTML elements, close enough to what Chromium
//! reports through `getComputedStyle` for the properties the schema reads.

use crate::syntax::Declaration;

use super::cascade::{Origin, Rule};

/// Block-level HTML elements.
fn block_level_elements() -> Vec<&'static str> {
    vec![
        "html",
        "body",
        "div",
        "p",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "ul",
        "ol",
        "dl",
        "dt",
        "dd",
        "menu",
        "blockquote",
        "pre",
        "form",
        "fieldset",
        "legend",
        "section",
        "article",
        "aside",
        "header",
        "footer",
        "main",
        "nav",
        "address",
        "figure",
        "figcaption",
        "details",
        "summary",
        "dialog",
        "hr",
        "center",
    ]
}

/// Elements that never render.
const HIDDEN_ELEMENTS: [&str; 12] = [
    "head", "meta", "title", "link", "style", "script", "base", "template", "noscript", "datalist",
    "param", "[hidden]",
];

/// Rules beyond `display`, in cascade order.
const ELEMENT_RULES: &[(&str, &[(&str, &str)])] = &[
    ("body", &[("margin", "8px")]),
    ("p, blockquote, figure, dl, pre", &[("margin", "1em 0")]),
    ("blockquote, figure", &[("margin-left", "40px"), ("margin-right", "40px")]),
    ("pre", &[("font-family", "monospace"), ("white-space", "pre")]),
    ("ul, ol, menu", &[("margin", "1em 0"), ("padding-left", "40px")]),
    ("ul ul, ol ul, ul ol, ol ol", &[("margin", "0")]),
    ("li", &[("display", "list-item")]),
    ("dd", &[("margin-left", "40px")]),
    ("h1", &[("font-size", "2em"), ("font-weight", "bold"), ("margin", "0.67em 0")]),
    ("h2", &[("font-size", "1.5em"), ("font-weight", "bold"), ("margin", "0.83em 0")]),
    ("h3", &[("font-size", "1.17em"), ("font-weight", "bold"), ("margin", "1em 0")]),
    ("h4", &[("font-size", "1em"), ("font-weight", "bold"), ("margin", "1.33em 0")]),
    ("h5", &[("font-size", "0.83em"), ("font-weight", "bold"), ("margin", "1.67em 0")]),
    ("h6", &[("font-size", "0.67em"), ("font-weight", "bold"), ("margin", "2.33em 0")]),
    ("b, strong, th", &[("font-weight", "bold")]),
    ("i, em, cite, var, dfn, address", &[("font-style", "italic")]),
    ("small", &[("font-size", "smaller")]),
    ("code, kbd, samp, tt", &[("font-family", "monospace")]),
    ("a", &[("color", "rgb(0, 0, 238)"), ("cursor", "pointer")]),
    ("center, th", &[("text-align", "center")]),
    (
        "hr",
        &[
            ("margin", "8px 0"),
            ("border-style", "inset"),
            ("border-width", "1px"),
            ("color", "gray"),
        ],
    ),
    ("fieldset", &[("margin", "0 2px"), ("padding", "5.6px 12px 10px")]),
    ("table", &[("display", "table"), ("box-sizing", "border-box")]),
    ("caption", &[("display", "table-caption"), ("text-align", "center")]),
    ("thead", &[("display", "table-header-group")]),
    ("tbody", &[("display", "table-row-group")]),
    ("tfoot", &[("display", "table-footer-group")]),
    ("tr", &[("display", "table-row")]),
    ("td, th", &[("display", "table-cell"), ("padding", "1px")]),
    ("img, svg, video, canvas, iframe", &[("display", "inline")]),
    (
        "button",
        &[
            ("display", "inline-block"),
            ("padding", "1px 6px"),
            ("border", "2px outset rgb(118, 118, 118)"),
            ("background-color", "rgb(239, 239, 239)"),
            ("font-size", "13.3333px"),
            ("text-align", "center"),
            ("box-sizing", "border-box"),
        ],
    ),
    (
        "input, select",
        &[
            ("display", "inline-block"),
            ("padding", "1px 2px"),
            ("border", "2px inset rgb(118, 118, 118)"),
            ("font-size", "13.3333px"),
        ],
    ),
    (
        "textarea",
        &[
            ("display", "inline-block"),
            ("padding", "2px"),
            ("border", "1px solid rgb(118, 118, 118)"),
            ("font-size", "13.3333px"),
            ("font-family", "monospace"),
        ],
    ),
    (
        "input[type=checkbox], input[type=radio]",
        &[("padding", "0"), ("border", "0"), ("margin", "3px 3px 3px 4px")],
    ),
    ("label", &[("cursor", "default")]),
];

/// A UA rule with the given selector and declarations.
fn make_ua_rule(selector: &str, order: u32, props: &[(&str, &str)]) -> Rule {
    Rule::new(
        Origin::UserAgent,
        order,
        selector,
        props
            .iter()
            .map(|(name, value)| Declaration {
                name: (*name).to_owned(),
                value: (*value).to_owned(),
                important: false,
            })
            .collect(),
    )
}

/// The user-agent rules, in source order.
pub fn create_ua_rules() -> Vec<Rule> {
    let display_rules = block_level_elements()
        .into_iter()
        .map(|tag| (tag, [("display", "block")].as_slice()))
        .chain(
            HIDDEN_ELEMENTS
                .iter()
                .map(|selector| (*selector, [("display", "none")].as_slice())),
        );
    display_rules
        .chain(ELEMENT_RULES.iter().copied())
        .zip(0_u32..)
        .map(|((selector, props), order)| make_ua_rule(selector, order, props))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_ordered_and_parse() {
        let rules = create_ua_rules();
        assert!(rules.windows(2).all(|pair| pair[0].source_order < pair[1].source_order));
        assert!(rules.iter().all(|rule| !rule.selectors.is_empty()));
        assert!(rules.iter().all(|rule| rule.origin == Origin::UserAgent));
    }
}
