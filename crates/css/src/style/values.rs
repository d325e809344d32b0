//! Specified to computed value conversion, serialised the way browsers report it.

use csscolorparser::Color;
use log::warn;

/// Initial `font-size` and the `medium` keyword.
pub(crate) const MEDIUM_FONT_SIZE: f64 = 16.0;

/// What relative values resolve against for one element.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Context<'style> {
    /// The element's own computed font size.
    pub font_size: f64,
    pub root_font_size: f64,
    /// The element's computed `color`, for `currentcolor`.
    pub current_color: &'style str,
}

/// Split on whitespace that is not nested inside parentheses.
pub(crate) fn split_components(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0_usize;
    let mut start = None;
    for (index, character) in value.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if character.is_ascii_whitespace() && depth == 0 {
            if let Some(begin) = start.take() {
                parts.push(&value[begin..index]);
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }
    if let Some(begin) = start {
        parts.push(&value[begin..]);
    }
    parts
}

/// Shortest decimal form with at most four fractional digits.
pub(crate) fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    let text = format!("{rounded:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

pub(crate) fn format_px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// Leading number and the unit after it: `"1.5em"` gives `(1.5, "em")`.
fn split_number(token: &str) -> Option<(f64, &str)> {
    let end = token
        .char_indices()
        .find(|&(index, character)| {
            !(character.is_ascii_digit() || character == '.' || (index == 0 && matches!(character, '+' | '-')))
        })
        .map_or(token.len(), |(index, _)| index);
    let number = token[..end].parse::<f64>().ok()?;
    Some((number, &token[end..]))
}

/// Absolute or font-relative length in px; `None` for percentages,
/// viewport units, keywords and functions.
pub(crate) fn length_px(token: &str, font_size: f64, root_font_size: f64) -> Option<f64> {
    let (number, unit) = split_number(token)?;
    let px = match unit.to_ascii_lowercase().as_str() {
        "px" => number,
        "em" => number * font_size,
        "rem" => number * root_font_size,
        "pt" => number * 4.0 / 3.0,
        "pc" => number * 16.0,
        "in" => number * 96.0,
        "cm" => number * 96.0 / 2.54,
        "mm" => number * 96.0 / 25.4,
        "q" => number * 96.0 / 101.6,
        "" if number == 0.0 => 0.0,
        _ => return None,
    };
    Some(px)
}

pub(crate) fn looks_like_length(token: &str) -> bool {
    token
        .trim_start_matches(['+', '-'])
        .starts_with(|character: char| character.is_ascii_digit() || character == '.')
        || token.to_ascii_lowercase().starts_with("calc(")
}

fn lowercase_keyword(value: &str) -> String {
    if value.chars().all(|character| character.is_ascii_alphabetic() || character == '-') {
        value.to_ascii_lowercase()
    } else {
        value.to_owned()
    }
}

pub(crate) fn compute_length(value: &str, context: &Context<'_>) -> String {
    match length_px(value, context.font_size, context.root_font_size) {
        Some(px) => format_px(px),
        None => lowercase_keyword(value),
    }
}

/// `thin`/`medium`/`thick` or a length.
pub(crate) fn compute_border_width(value: &str, context: &Context<'_>) -> String {
    match value.to_ascii_lowercase().as_str() {
        "thin" => format_px(1.0),
        "medium" => format_px(3.0),
        "thick" => format_px(5.0),
        _ => compute_length(value, context),
    }
}

/// Serialise as `rgb(r, g, b)`, or `rgba(r, g, b, a)` when not opaque.
pub(crate) fn serialize_color(color: &Color) -> String {
    let [red, green, blue, _] = color.to_rgba8();
    let alpha = f64::from(color.a);
    if alpha >= 1.0 {
        format!("rgb({red}, {green}, {blue})")
    } else {
        let alpha = (alpha * 1000.0).round() / 1000.0;
        format!("rgba({red}, {green}, {blue}, {})", format_number(alpha))
    }
}

pub(crate) fn parse_color(value: &str) -> Option<String> {
    value.parse::<Color>().ok().map(|color| serialize_color(&color))
}

pub(crate) fn is_current_color(value: &str) -> bool {
    value.eq_ignore_ascii_case("currentcolor")
}

pub(crate) fn compute_color(value: &str, current_color: &str) -> String {
    if is_current_color(value) {
        return current_color.to_owned();
    }
    parse_color(value).unwrap_or_else(|| {
        warn!("unrecognised color `{value}`");
        value.to_owned()
    })
}

pub(crate) fn compute_paint(value: &str, current_color: &str) -> String {
    if is_current_color(value) {
        return current_color.to_owned();
    }
    parse_color(value).unwrap_or_else(|| lowercase_keyword(value))
}

/// Computed font size in px. Relative values resolve against the parent.
pub(crate) fn compute_font_size(value: &str, parent: f64, root: f64) -> f64 {
    let keyword = match value.to_ascii_lowercase().as_str() {
        "xx-small" => Some(9.0),
        "x-small" => Some(10.0),
        "small" => Some(13.0),
        "medium" => Some(MEDIUM_FONT_SIZE),
        "large" => Some(18.0),
        "x-large" => Some(24.0),
        "xx-large" => Some(32.0),
        "xxx-large" => Some(48.0),
        "smaller" => Some(parent / 1.2),
        "larger" => Some(parent * 1.2),
        _ => None,
    };
    if let Some(px) = keyword {
        return px;
    }
    if let Some(percent) = value.strip_suffix('%')
        && let Ok(number) = percent.trim().parse::<f64>()
    {
        return parent * number / 100.0;
    }
    length_px(value, parent, root).unwrap_or_else(|| {
        warn!("unresolvable font-size `{value}`, inheriting");
        parent
    })
}

fn bolder(parent: f64) -> f64 {
    if parent < 350.0 {
        400.0
    } else if parent < 550.0 {
        700.0
    } else {
        parent.max(900.0)
    }
}

fn lighter(parent: f64) -> f64 {
    if parent < 550.0 {
        parent.min(100.0)
    } else if parent < 750.0 {
        400.0
    } else {
        700.0
    }
}

/// Numeric weight; `bolder`/`lighter` step relative to the parent.
pub(crate) fn compute_font_weight(value: &str, parent: &str) -> String {
    let parent_weight = parent.parse::<f64>().unwrap_or(400.0);
    let weight = match value.to_ascii_lowercase().as_str() {
        "normal" => 400.0,
        "bold" => 700.0,
        "bolder" => bolder(parent_weight),
        "lighter" => lighter(parent_weight),
        other => match other.parse::<f64>() {
            Ok(number) => number,
            Err(_) => return value.to_owned(),
        },
    };
    format_number(weight)
}

/// `normal` and plain numbers stay; lengths and percentages become px.
pub(crate) fn compute_line_height(value: &str, context: &Context<'_>) -> String {
    if value.eq_ignore_ascii_case("normal") {
        return "normal".to_owned();
    }
    if let Ok(number) = value.parse::<f64>() {
        return format_number(number);
    }
    if let Some(percent) = value.strip_suffix('%')
        && let Ok(number) = percent.trim().parse::<f64>()
    {
        return format_px(context.font_size * number / 100.0);
    }
    compute_length(value, context)
}

pub(crate) fn compute_number(value: &str) -> String {
    value
        .parse::<f64>()
        .map_or_else(|_| lowercase_keyword(value), format_number)
}
