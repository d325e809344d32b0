//! Shorthand expansion before the cascade, and recombination for resolved reads.

use log::warn;

use super::ComputedStyle;
use super::properties::longhand;
use super::values::{is_current_color, looks_like_length, parse_color, split_components};

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];
const CORNERS: [&str; 4] = ["top-left", "top-right", "bottom-right", "bottom-left"];
const BORDER_STYLES: [&str; 10] = [
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];
const FLEX_DIRECTIONS: [&str; 4] = ["row", "row-reverse", "column", "column-reverse"];
const CSS_WIDE_KEYWORDS: [&str; 4] = ["inherit", "initial", "unset", "revert"];

fn sides(pattern: &str) -> Vec<String> {
    SIDES
        .iter()
        .map(|side| pattern.replace("{}", side))
        .collect()
}

/// The longhands a shorthand sets, in serialisation order.
fn members(shorthand: &str) -> Option<Vec<String>> {
    let names = match shorthand {
        "margin" | "padding" => sides(&format!("{shorthand}-{{}}")),
        "inset" => sides("{}"),
        "border-width" => sides("border-{}-width"),
        "border-style" => sides("border-{}-style"),
        "border-color" => sides("border-{}-color"),
        "border-radius" => CORNERS
            .iter()
            .map(|corner| format!("border-{corner}-radius"))
            .collect(),
        "border" => ["width", "style", "color"]
            .iter()
            .flat_map(|part| sides(&format!("border-{{}}-{part}")))
            .collect(),
        "border-top" | "border-right" | "border-bottom" | "border-left" => ["width", "style", "color"]
            .iter()
            .map(|part| format!("{shorthand}-{part}"))
            .collect(),
        "flex" => vec!["flex-grow".to_owned(), "flex-shrink".to_owned(), "flex-basis".to_owned()],
        "flex-flow" => vec!["flex-direction".to_owned(), "flex-wrap".to_owned()],
        "gap" => vec!["row-gap".to_owned(), "column-gap".to_owned()],
        "overflow" => vec!["overflow-x".to_owned(), "overflow-y".to_owned()],
        "background" => vec!["background-color".to_owned()],
        _ => return None,
    };
    Some(names)
}

/// CSS box order: one to four values onto top, right, bottom, left.
fn box_values<'value>(components: &[&'value str]) -> Option<[&'value str; 4]> {
    match *components {
        [all] => Some([all, all, all, all]),
        [vertical, horizontal] => Some([vertical, horizontal, vertical, horizontal]),
        [top, horizontal, bottom] => Some([top, horizontal, bottom, horizontal]),
        [top, right, bottom, left] => Some([top, right, bottom, left]),
        _ => None,
    }
}

/// `<width> || <style> || <color>` with the omitted parts reset.
fn border_parts<'value>(components: &[&'value str]) -> Option<[&'value str; 3]> {
    let mut parts = ["medium", "none", "currentcolor"];
    for &component in components {
        let lowered = component.to_ascii_lowercase();
        if BORDER_STYLES.contains(&lowered.as_str()) {
            parts[1] = component;
        } else if matches!(lowered.as_str(), "thin" | "medium" | "thick") || looks_like_length(component) {
            parts[0] = component;
        } else if is_current_color(component) || parse_color(component).is_some() {
            parts[2] = component;
        } else {
            return None;
        }
    }
    Some(parts)
}

fn is_number(component: &str) -> bool {
    component.parse::<f64>().is_ok()
}

/// `flex` per the flexbox shorthand rules.
fn flex_parts<'value>(components: &[&'value str]) -> Option<[&'value str; 3]> {
    match *components {
        [keyword] if keyword.eq_ignore_ascii_case("none") => Some(["0", "0", "auto"]),
        [keyword] if keyword.eq_ignore_ascii_case("auto") => Some(["1", "1", "auto"]),
        [grow] if is_number(grow) => Some([grow, "1", "0%"]),
        [basis] => Some(["1", "1", basis]),
        [grow, shrink] if is_number(grow) && is_number(shrink) => Some([grow, shrink, "0%"]),
        [grow, basis] if is_number(grow) => Some([grow, "1", basis]),
        [grow, shrink, basis] if is_number(grow) && is_number(shrink) => Some([grow, shrink, basis]),
        _ => None,
    }
}

fn pair(names: &[&str; 2], components: &[&str]) -> Option<Vec<(String, String)>> {
    let (first, second) = match *components {
        [both] => (both, both),
        [first, second] => (first, second),
        _ => return None,
    };
    Some(vec![
        (names[0].to_owned(), first.to_owned()),
        (names[1].to_owned(), second.to_owned()),
    ])
}

fn zip_names(names: Vec<String>, values: &[&str]) -> Vec<(String, String)> {
    names
        .into_iter()
        .zip(values.iter().map(|value| (*value).to_owned()))
        .collect()
}

fn expand_shorthand(name: &str, value: &str, names: Vec<String>) -> Option<Vec<(String, String)>> {
    let components = split_components(value);
    match name {
        "margin" | "padding" | "inset" | "border-width" | "border-style" | "border-color" => {
            Some(zip_names(names, &box_values(&components)?))
        }
        "border-radius" => {
            // Elliptical radii keep only the horizontal part.
            let horizontal = value.split('/').next().unwrap_or_default();
            Some(zip_names(names, &box_values(&split_components(horizontal))?))
        }
        "border" => {
            let [width, style, color] = border_parts(&components)?;
            let values: Vec<&str> = [width, style, color]
                .iter()
                .flat_map(|part| [*part; 4])
                .collect();
            Some(zip_names(names, &values))
        }
        "border-top" | "border-right" | "border-bottom" | "border-left" => {
            Some(zip_names(names, &border_parts(&components)?))
        }
        "flex" => Some(zip_names(names, &flex_parts(&components)?)),
        "flex-flow" => {
            let mut values = ["row", "nowrap"];
            for component in components {
                let slot = usize::from(!FLEX_DIRECTIONS.contains(&component.to_ascii_lowercase().as_str()));
                values[slot] = component;
            }
            Some(zip_names(names, &values))
        }
        "gap" => pair(&["row-gap", "column-gap"], &components),
        "overflow" => pair(&["overflow-x", "overflow-y"], &components),
        "background" => {
            let color = components
                .iter()
                .rev()
                .find(|component| is_current_color(component) || parse_color(component).is_some())
                .copied()
                .unwrap_or("transparent");
            Some(zip_names(names, &[color]))
        }
        _ => None,
    }
}

/// Longhand declarations for one authored declaration.
///
/// Longhands pass through; shorthands are split; a CSS-wide keyword on a
/// shorthand applies to every member. Unknown properties and unparseable
/// shorthand values yield nothing.
pub(crate) fn expand(name: &str, value: &str) -> Vec<(String, String)> {
    if longhand(name).is_some() {
        return vec![(name.to_owned(), value.to_owned())];
    }
    let Some(names) = members(name) else {
        return Vec::new();
    };
    if CSS_WIDE_KEYWORDS.contains(&value.to_ascii_lowercase().as_str()) {
        return names
            .into_iter()
            .map(|member| (member, value.to_owned()))
            .collect();
    }
    expand_shorthand(name, value, names).unwrap_or_else(|| {
        warn!("ignoring unparseable `{name}: {value}`");
        Vec::new()
    })
}

/// Shortest box serialisation: `a`, `a b`, `a b c` or `a b c d`.
fn collapse_box(values: &[&str]) -> String {
    match *values {
        [top, right, bottom, left] if top == right && right == bottom && bottom == left => top.to_owned(),
        [top, right, bottom, left] if top == bottom && right == left => format!("{top} {right}"),
        [top, right, bottom, left] if right == left => format!("{top} {right} {bottom}"),
        _ => values.join(" "),
    }
}

fn collapse_pair(first: &str, second: &str) -> String {
    if first == second {
        first.to_owned()
    } else {
        format!("{first} {second}")
    }
}

/// Resolved value of a shorthand, recombined from computed longhands.
///
/// `None` when `name` is not a shorthand. `border` is empty when the sides differ.
pub(crate) fn serialize(name: &str, style: &ComputedStyle) -> Option<String> {
    let names = members(name)?;
    let values: Vec<&str> = names
        .iter()
        .map(|member| style.longhand(member).unwrap_or_default())
        .collect();
    let serialized = match name {
        "border" => {
            let side = |index: usize| [values[index], values[index + 4], values[index + 8]];
            if (1..4).all(|index| side(index) == side(0)) {
                side(0).join(" ")
            } else {
                String::new()
            }
        }
        "flex" | "flex-flow" | "border-top" | "border-right" | "border-bottom" | "border-left" => values.join(" "),
        "gap" | "overflow" => collapse_pair(values[0], values[1]),
        "background" => format!(
            "{} none repeat scroll 0% 0% / auto padding-box border-box",
            values[0]
        ),
        _ => collapse_box(&values),
    };
    Some(serialized)
}
