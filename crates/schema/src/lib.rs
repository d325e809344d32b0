//! Converts a rendered element tree with resolved style into a design schema tree.
//!
//! The pipeline per element is: classify ([`classify`]), then build an icon,
//! label, svg or container node. Containers get flex layout props from their
//! resolved style and recurse into their children.
//!
//! The element tree and the style engine are supplied by the host through
//! [`ElementTree`] and [`StyleProvider`].

#![forbid(unsafe_code)]

mod builder;
mod classify;
mod color;
pub mod defaults;
mod dimension;
mod error;
mod node;
mod options;
mod position;
mod source;
mod style;
mod svg;
mod text;

pub use builder::{Converter, Target};
pub use classify::{Classification, classify, generate_name};
pub use color::rgb_to_hex;
pub use dimension::{MAX_DIMENSION_PX, is_reasonable_dimension};
pub use error::ConvertError;
pub use node::{
    ContainerProps, IconProps, LabelProps, Meta, NodeKind, Props, SchemaNode, SvgProps,
};
pub use options::{ConvertOptions, DEFAULT_ICON_PATH};
pub use position::{Position, infer_position};
pub use source::{ElementTree, SelectionSource, StyleProvider};
pub use style::{StyleMap, extract_style};
pub use svg::{SvgElement, SvgValue, parse_svg_children};
pub use text::{camel_case, kebab_case, parse_leading_int};
