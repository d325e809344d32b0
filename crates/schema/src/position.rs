//! Flex participation of an element inside its parent container.

use serde::Serialize;

use crate::dimension::is_reasonable_dimension;
use crate::source::StyleProvider;
use crate::text::parse_leading_int;

/// `flex` shorthand value that carries no information.
const FLEX_INITIAL: &str = "0 1 auto";

/// How an element grows, shrinks and sizes along its parent's main axis.
///
/// `shrink` is left out when it is the implicit 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Position {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grow: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shrink: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basis: Option<String>,
    pub display: bool,
}

impl Position {
    /// What grid containers always report.
    pub const fn fully_flexible() -> Self {
        Self {
            grow: Some(1),
            shrink: Some(1),
            basis: None,
            display: true,
        }
    }
}

/// Infer the position descriptor from resolved style.
pub fn infer_position<S: StyleProvider>(styles: &S, element: S::Handle) -> Position {
    let read = |property: &str| styles.resolved_value(element, property).trim().to_owned();

    let display = read("display");
    if display == "grid" {
        return Position::fully_flexible();
    }

    let flex_grow = read("flex-grow");
    let grow = if flex_grow.is_empty() || flex_grow == "0" {
        None
    } else {
        parse_leading_int(&flex_grow)
    };

    let flex_shrink = read("flex-shrink");
    let shrink = match flex_shrink.as_str() {
        "1" => None,
        "0" => Some(0),
        other => parse_leading_int(other),
    };

    let basis = basis_candidate(&read("flex-basis"), &read("flex")).map(|candidate| {
        if is_reasonable_dimension(&candidate) {
            candidate
        } else {
            "auto".to_owned()
        }
    });

    Position {
        grow,
        shrink,
        basis,
        display: display != "none",
    }
}

/// Explicit `flex-basis` first, else the third token of the `flex` shorthand.
fn basis_candidate(flex_basis: &str, flex: &str) -> Option<String> {
    if !flex_basis.is_empty() && flex_basis != "auto" && flex_basis != "0px" {
        return Some(flex_basis.to_owned());
    }
    if flex.is_empty() || flex == FLEX_INITIAL {
        return None;
    }
    flex.split_whitespace()
        .nth(2)
        .filter(|token| *token != "auto")
        .map(str::to_owned)
}
