//! Longhand properties the engine computes, with their initial values.

/// How a specified value becomes a computed one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ValueKind {
    /// Lowercased as written.
    Keyword,
    /// Absolute and font-relative lengths become px; percentages stay.
    Length,
    /// `border-*-width`: keywords map to px; zero when the side has no style.
    BorderWidth,
    Color,
    /// A color, or anything else (`none`, `url(...)`) verbatim.
    Paint,
    FontSize,
    FontWeight,
    LineHeight,
    Number,
    Verbatim,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Longhand {
    pub name: &'static str,
    pub initial: &'static str,
    pub inherited: bool,
    pub kind: ValueKind,
}

const fn own(name: &'static str, initial: &'static str, kind: ValueKind) -> Longhand {
    Longhand {
        name,
        initial,
        inherited: false,
        kind,
    }
}

const fn inherited(name: &'static str, initial: &'static str, kind: ValueKind) -> Longhand {
    Longhand {
        name,
        initial,
        inherited: true,
        kind,
    }
}

pub(crate) const LONGHANDS: &[Longhand] = &[
    own("display", "inline", ValueKind::Keyword),
    own("position", "static", ValueKind::Keyword),
    own("float", "none", ValueKind::Keyword),
    own("box-sizing", "content-box", ValueKind::Keyword),
    inherited("visibility", "visible", ValueKind::Keyword),
    inherited("color", "rgb(0, 0, 0)", ValueKind::Color),
    own("background-color", "rgba(0, 0, 0, 0)", ValueKind::Color),
    own("opacity", "1", ValueKind::Number),
    inherited("font-size", "16px", ValueKind::FontSize),
    inherited("font-weight", "400", ValueKind::FontWeight),
    inherited("font-family", "\"Times New Roman\"", ValueKind::Verbatim),
    inherited("font-style", "normal", ValueKind::Keyword),
    inherited("line-height", "normal", ValueKind::LineHeight),
    inherited("letter-spacing", "normal", ValueKind::Length),
    inherited("text-align", "start", ValueKind::Keyword),
    inherited("text-transform", "none", ValueKind::Keyword),
    inherited("white-space", "normal", ValueKind::Keyword),
    inherited("cursor", "auto", ValueKind::Keyword),
    own("margin-top", "0px", ValueKind::Length),
    own("margin-right", "0px", ValueKind::Length),
    own("margin-bottom", "0px", ValueKind::Length),
    own("margin-left", "0px", ValueKind::Length),
    own("padding-top", "0px", ValueKind::Length),
    own("padding-right", "0px", ValueKind::Length),
    own("padding-bottom", "0px", ValueKind::Length),
    own("padding-left", "0px", ValueKind::Length),
    own("border-top-width", "medium", ValueKind::BorderWidth),
    own("border-right-width", "medium", ValueKind::BorderWidth),
    own("border-bottom-width", "medium", ValueKind::BorderWidth),
    own("border-left-width", "medium", ValueKind::BorderWidth),
    own("border-top-style", "none", ValueKind::Keyword),
    own("border-right-style", "none", ValueKind::Keyword),
    own("border-bottom-style", "none", ValueKind::Keyword),
    own("border-left-style", "none", ValueKind::Keyword),
    own("border-top-color", "currentcolor", ValueKind::Color),
    own("border-right-color", "currentcolor", ValueKind::Color),
    own("border-bottom-color", "currentcolor", ValueKind::Color),
    own("border-left-color", "currentcolor", ValueKind::Color),
    own("border-top-left-radius", "0px", ValueKind::Length),
    own("border-top-right-radius", "0px", ValueKind::Length),
    own("border-bottom-right-radius", "0px", ValueKind::Length),
    own("border-bottom-left-radius", "0px", ValueKind::Length),
    own("width", "auto", ValueKind::Length),
    own("height", "auto", ValueKind::Length),
    own("min-width", "auto", ValueKind::Length),
    own("min-height", "auto", ValueKind::Length),
    own("max-width", "none", ValueKind::Length),
    own("max-height", "none", ValueKind::Length),
    own("top", "auto", ValueKind::Length),
    own("right", "auto", ValueKind::Length),
    own("bottom", "auto", ValueKind::Length),
    own("left", "auto", ValueKind::Length),
    own("z-index", "auto", ValueKind::Number),
    own("flex-direction", "row", ValueKind::Keyword),
    own("flex-wrap", "nowrap", ValueKind::Keyword),
    own("justify-content", "normal", ValueKind::Keyword),
    own("align-items", "normal", ValueKind::Keyword),
    own("align-content", "normal", ValueKind::Keyword),
    own("align-self", "auto", ValueKind::Keyword),
    own("flex-grow", "0", ValueKind::Number),
    own("flex-shrink", "1", ValueKind::Number),
    own("flex-basis", "auto", ValueKind::Length),
    own("order", "0", ValueKind::Number),
    own("row-gap", "normal", ValueKind::Length),
    own("column-gap", "normal", ValueKind::Length),
    own("overflow-x", "visible", ValueKind::Keyword),
    own("overflow-y", "visible", ValueKind::Keyword),
    own("transform", "none", ValueKind::Verbatim),
    inherited("fill", "rgb(0, 0, 0)", ValueKind::Paint),
    inherited("stroke", "none", ValueKind::Paint),
];

pub(crate) fn longhand(name: &str) -> Option<&'static Longhand> {
    LONGHANDS.iter().find(|longhand| longhand.name == name)
}
