//! Output model: one JSON object per emitted design component.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::position::Position;
use crate::style::StyleMap;
use crate::svg::SvgElement;

/// Component kinds the builder understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Container,
    Label,
    Icon,
    Svg,
}

impl NodeKind {
    /// Component type without any deployment prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container.flex",
            Self::Label => "display.label",
            Self::Icon => "display.icon",
            Self::Svg => "shapes.svg",
        }
    }

    /// Schema version emitted for this kind. Every kind is currently at 0.
    pub const fn version(self) -> u32 {
        0
    }
}

/// One node of the emitted schema tree. Built once, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub type_name: String,
    pub version: u32,
    pub props: Props,
    pub meta: Meta,
    pub position: Position,
    pub custom: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SchemaNode>>,
}

impl SchemaNode {
    pub(crate) fn new(type_prefix: &str, props: Props, meta: Meta, position: Position) -> Self {
        let kind = props.kind();
        Self {
            type_name: format!("{type_prefix}{}", kind.as_str()),
            version: kind.version(),
            props,
            meta,
            position,
            custom: Map::new(),
            children: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.props.kind()
    }

    /// Attached children, empty for leaves.
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Naming metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub name: String,
    #[serde(rename = "domId", skip_serializing_if = "Option::is_none")]
    pub dom_id: Option<String>,
}

/// Kind-specific properties.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Props {
    Container(ContainerProps),
    Label(LabelProps),
    Icon(IconProps),
    Svg(SvgProps),
}

impl Props {
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Container(_) => NodeKind::Container,
            Self::Label(_) => NodeKind::Label,
            Self::Icon(_) => NodeKind::Icon,
            Self::Svg(_) => NodeKind::Svg,
        }
    }
}

/// Flex layout of a container plus whatever style was not promoted into it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabelProps {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IconProps {
    pub path: String,
    pub color: String,
    pub style: StyleMap,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SvgProps {
    pub elements: Vec<SvgElement>,
    #[serde(rename = "viewBox", skip_serializing_if = "Option::is_none")]
    pub view_box: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
}
